//! Home feed: trending plus top-rated movies and TV, merged into five
//! rows.

use std::sync::Arc;

use terebi_api::types::{MovieRecord, TvRecord};
use terebi_api::{TmdbClient, TmdbError};
use terebi_core::models::MediaItem;

use crate::media_items_without_people;
use crate::state::ScreenState;

const HERO_LEN: usize = 8;
const TRENDING_ROW_OFFSET: usize = 3;
const ROW_LEN: usize = 12;
const RECOMMEND_MIN_VOTE: f64 = 7.0;

/// Row data for the home feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeData {
    /// Hero carousel: first 8 trending items.
    pub hero: Vec<MediaItem>,
    /// Trending row: trending items 4–15.
    pub trending_now: Vec<MediaItem>,
    pub top_movies: Vec<MediaItem>,
    pub top_tv: Vec<MediaItem>,
    /// Movies + TV rated ≥ 7.0, best first.
    pub highly_recommend: Vec<MediaItem>,
}

/// Home feed screen.
pub struct HomeScreen {
    client: Arc<TmdbClient>,
    state: ScreenState<HomeData>,
    has_loaded: bool,
}

impl HomeScreen {
    pub fn new(client: Arc<TmdbClient>) -> Self {
        Self {
            client,
            state: ScreenState::Idle,
            has_loaded: false,
        }
    }

    pub fn state(&self) -> &ScreenState<HomeData> {
        &self.state
    }

    /// Load once; later calls are no-ops until `reload`.
    pub async fn load_if_needed(&mut self) {
        if self.has_loaded {
            return;
        }
        self.load().await;
    }

    /// Drop the loaded latch and fetch fresh data.
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
                tracing::warn!(error = %e, "home load failed");
                self.state = ScreenState::Failed(e.to_string());
            }
        }
    }

    async fn fetch(&self) -> Result<HomeData, TmdbError> {
        let (trending, movies, tv) = tokio::try_join!(
            self.client.trending(),
            self.client.top_rated_movies(),
            self.client.top_rated_tv(),
        )?;

        let trending = media_items_without_people(trending);
        let movies: Vec<MediaItem> = movies.into_iter().map(MovieRecord::into_media_item).collect();
        let tv: Vec<MediaItem> = tv.into_iter().map(TvRecord::into_media_item).collect();

        Ok(assemble(trending, movies, tv))
    }
}

/// Build the five home rows from the person-filtered trending list and
/// the top-rated movie/TV lists.
fn assemble(trending: Vec<MediaItem>, movies: Vec<MediaItem>, tv: Vec<MediaItem>) -> HomeData {
    let hero = trending.iter().take(HERO_LEN).cloned().collect();
    let trending_now = trending
        .iter()
        .skip(TRENDING_ROW_OFFSET)
        .take(ROW_LEN)
        .cloned()
        .collect();
    let top_movies = movies.iter().take(ROW_LEN).cloned().collect();
    let top_tv = tv.iter().take(ROW_LEN).cloned().collect();

    let mut highly_recommend: Vec<MediaItem> = movies
        .into_iter()
        .chain(tv)
        .filter(|item| item.vote_average >= RECOMMEND_MIN_VOTE)
        .collect();
    highly_recommend.sort_by(|a, b| b.vote_average.total_cmp(&a.vote_average));
    highly_recommend.truncate(ROW_LEN);

    HomeData {
        hero,
        trending_now,
        top_movies,
        top_tv,
        highly_recommend,
    }
}
