//! Unified catalog model shared by the client and the screens.

mod detail;
mod media;
mod providers;

pub use detail::{
    release_year, AuthorDetails, CastMember, Creator, CrewMember, DetailBundle, Genre, Review,
};
pub use media::{watchlist_key, MediaItem, MediaType};
pub use providers::{sort_by_priority, WatchProvider, WatchProviderRegion};
