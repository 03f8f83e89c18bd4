//! Multi-search screen.
//!
//! Unlike the other screens there is no loaded latch — every submitted
//! query is a fresh request. Empty or whitespace-only queries clear the
//! screen locally with no network call.

use std::sync::Arc;

use terebi_api::{TmdbClient, TmdbError};
use terebi_core::models::MediaItem;

use crate::media_items_without_people;
use crate::state::ScreenState;

pub struct SearchScreen {
    client: Arc<TmdbClient>,
    state: ScreenState<Vec<MediaItem>>,
}

impl SearchScreen {
    pub fn new(client: Arc<TmdbClient>) -> Self {
        Self {
            client,
            state: ScreenState::Idle,
        }
    }

    pub fn state(&self) -> &ScreenState<Vec<MediaItem>> {
        &self.state
    }

    /// Run a multi-search for the trimmed query, filtering out people.
    pub async fn search(&mut self, query: &str) {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            // Results and any prior error are both cleared.
            self.state = ScreenState::Idle;
            return;
        }

        self.state = ScreenState::Loading;
        match self.fetch(trimmed).await {
            Ok(items) => self.state = ScreenState::Ready(items),
            Err(e) => {
                tracing::warn!(error = %e, "search failed");
                self.state = ScreenState::Failed(e.to_string());
            }
        }
    }

    async fn fetch(&self, query: &str) -> Result<Vec<MediaItem>, TmdbError> {
        let records = self.client.search_multi(query).await?;
        Ok(media_items_without_people(records))
    }
}
