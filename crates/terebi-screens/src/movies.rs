//! Movies screen: popular and top-rated shelves.

use std::sync::Arc;

use terebi_api::types::MovieRecord;
use terebi_api::{TmdbClient, TmdbError};

use crate::listing::{self, ListingData};
use crate::state::ScreenState;

pub struct MoviesScreen {
    client: Arc<TmdbClient>,
    state: ScreenState<ListingData>,
    has_loaded: bool,
}

impl MoviesScreen {
    pub fn new(client: Arc<TmdbClient>) -> Self {
        Self {
            client,
            state: ScreenState::Idle,
            has_loaded: false,
        }
    }

    pub fn state(&self) -> &ScreenState<ListingData> {
        &self.state
    }

    pub async fn load_if_needed(&mut self) {
        if self.has_loaded {
            return;
        }
        self.load().await;
    }

    pub async fn reload(&mut self) {
        self.has_loaded = false;
        self.load().await;
    }

    async fn load(&mut self) {
        self.state = ScreenState::Loading;

        match self.fetch().await {
            Ok(data) => {
                self.state = ScreenState::Ready(data);
                self.has_loaded = true;
            }
            Err(e) => {
                tracing::warn!(error = %e, "movies load failed");
                self.state = ScreenState::Failed(e.to_string());
            }
        }
    }

    async fn fetch(&self) -> Result<ListingData, TmdbError> {
        let (popular, top_rated) = tokio::try_join!(
            self.client.popular_movies(),
            self.client.top_rated_movies(),
        )?;

        Ok(listing::assemble(
            popular.into_iter().map(MovieRecord::into_media_item).collect(),
            top_rated.into_iter().map(MovieRecord::into_media_item).collect(),
        ))
    }
}
