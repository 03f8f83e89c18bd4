use serde::Deserialize;

use crate::quick_providers::QuickProvider;

use super::providers::WatchProviderRegion;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// A series creator, from TV detail's `created_by`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Creator {
    pub id: u64,
    pub name: String,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    pub job: Option<String>,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthorDetails {
    pub rating: Option<f64>,
    pub avatar_path: Option<String>,
    pub name: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    pub content: String,
    pub author_details: Option<AuthorDetails>,
}

/// Everything a detail screen shows for one media item.
///
/// Built fresh on first visit or explicit reload, discarded with the
/// screen; never persisted.
#[derive(Debug, Clone, Default)]
pub struct DetailBundle {
    pub title: String,
    pub tagline: Option<String>,
    pub overview: String,
    pub release_year: Option<String>,
    pub genres: Vec<Genre>,
    pub cast: Vec<CastMember>,
    pub directors: Vec<CrewMember>,
    /// TV only; empty for movies.
    pub creators: Vec<Creator>,
    /// Populated only when `creators` is empty.
    pub executive_producers: Vec<CrewMember>,
    pub reviews: Vec<Review>,
    pub providers: Option<WatchProviderRegion>,
    pub quick_providers: Vec<QuickProvider>,
    pub in_watchlist: bool,
}

/// Extract the year from an ISO `YYYY-MM-DD` date string: the substring
/// before the first `-`, or `None` when there is nothing to take.
pub fn release_year(date: Option<&str>) -> Option<String> {
    let year = date?.split('-').next()?;
    if year.is_empty() {
        None
    } else {
        Some(year.to_string())
    }
}
