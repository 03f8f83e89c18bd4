//! Per-screen view state for the terebi catalog browser.
//!
//! Each screen owns a small state machine — Idle → Loading →
//! Ready(data) | Failed(message) — and a fixed set of catalog calls it
//! issues concurrently. A screen never commits partial data: every
//! sub-fetch must succeed before new state lands, and the first failure
//! turns the whole load into `Failed` with the client's error message.
//!
//! `load_if_needed` is a no-op once a screen has loaded; `reload` drops
//! the loaded latch and fetches again. Loads take exclusive mutable
//! access to the screen, so two loads for one screen cannot overlap.

pub mod detail;
pub mod home;
pub mod listing;
pub mod movies;
pub mod search;
pub mod state;
pub mod trending;
pub mod tv;

pub use state::ScreenState;

use terebi_api::types::TrendingRecord;
use terebi_core::models::{MediaItem, MediaType};

/// Drop person records and convert the rest, preserving source order.
///
/// Trending and multi-search return people alongside movies and TV;
/// none of the screens show them.
pub(crate) fn media_items_without_people(records: Vec<TrendingRecord>) -> Vec<MediaItem> {
    records
        .into_iter()
        .filter(|record| record.media_type != MediaType::Person)
        .map(TrendingRecord::into_media_item)
        .collect()
}
