//! Shared shape for the Movies and TV catalog screens: a popular shelf
//! and a top-rated shelf, each capped at 20 items.

use terebi_core::models::MediaItem;

const SHELF_LEN: usize = 20;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingData {
    pub popular: Vec<MediaItem>,
    pub top_rated: Vec<MediaItem>,
}

/// Truncate each shelf independently.
pub(crate) fn assemble(mut popular: Vec<MediaItem>, mut top_rated: Vec<MediaItem>) -> ListingData {
    popular.truncate(SHELF_LEN);
    top_rated.truncate(SHELF_LEN);
    ListingData { popular, top_rated }
}
