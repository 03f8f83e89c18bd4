//! Trending screen: one daily trending list, rendered both as a
//! 12-item row and a 24-item grid.

use std::sync::Arc;

use terebi_api::{TmdbClient, TmdbError};
use terebi_core::models::MediaItem;

use crate::media_items_without_people;
use crate::state::ScreenState;

const GRID_LEN: usize = 24;
const ROW_LEN: usize = 12;

/// The person-filtered trending list, capped at 24.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendingData {
    pub items: Vec<MediaItem>,
}

impl TrendingData {
    /// First 12 items, for the "Trending Now" row.
    pub fn row(&self) -> &[MediaItem] {
        &self.items[..self.items.len().min(ROW_LEN)]
    }

    /// All items, for the full grid.
    pub fn grid(&self) -> &[MediaItem] {
        &self.items
    }
}

pub struct TrendingScreen {
    client: Arc<TmdbClient>,
    state: ScreenState<TrendingData>,
    has_loaded: bool,
}

impl TrendingScreen {
    pub fn new(client: Arc<TmdbClient>) -> Self {
        Self {
            client,
            state: ScreenState::Idle,
            has_loaded: false,
        }
    }

    pub fn state(&self) -> &ScreenState<TrendingData> {
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
                tracing::warn!(error = %e, "trending load failed");
                self.state = ScreenState::Failed(e.to_string());
            }
        }
    }

    async fn fetch(&self) -> Result<TrendingData, TmdbError> {
        let records = self.client.trending().await?;
        let mut items = media_items_without_people(records);
        items.truncate(GRID_LEN);
        Ok(TrendingData { items })
    }
}
