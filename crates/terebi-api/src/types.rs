//! Raw TMDB wire records.
//!
//! TMDB uses snake_case keys throughout, which map directly onto these
//! field names — the wire/model field mapping is declared here once, not
//! per call. List records convert into the unified model via
//! `into_media_item()`.

use std::collections::HashMap;

use serde::Deserialize;

use terebi_core::models::{
    CastMember, Creator, CrewMember, Genre, MediaItem, MediaType, Review, WatchProviderRegion,
};

/// Paged listing envelope returned by every list endpoint.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// A movie row from a listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieRecord {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub vote_average: f64,
}

impl MovieRecord {
    pub fn into_media_item(self) -> MediaItem {
        MediaItem {
            id: self.id,
            title: self.title,
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            overview: self.overview,
            vote_average: self.vote_average,
            media_type: MediaType::Movie,
        }
    }
}

/// A TV series row from a listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TvRecord {
    pub id: u64,
    pub name: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub vote_average: f64,
}

impl TvRecord {
    pub fn into_media_item(self) -> MediaItem {
        MediaItem {
            id: self.id,
            title: self.name,
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            overview: self.overview,
            vote_average: self.vote_average,
            media_type: MediaType::Tv,
        }
    }
}

/// A row from `/trending` or `/search/multi`. The shape varies with the
/// media type, so everything but id and type is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingRecord {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub overview: Option<String>,
    pub vote_average: Option<f64>,
    pub media_type: MediaType,
}

impl TrendingRecord {
    /// Title chain is `title` → `name` → empty; the "Untitled" display
    /// fallback happens at render time via `MediaItem::title_text`.
    pub fn into_media_item(self) -> MediaItem {
        MediaItem {
            id: self.id,
            title: self.title.or(self.name).unwrap_or_default(),
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            overview: self.overview.unwrap_or_default(),
            vote_average: self.vote_average.unwrap_or(0.0),
            media_type: self.media_type,
        }
    }
}

/// Full movie detail from `/movie/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetailRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub tagline: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// Full TV detail from `/tv/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TvDetailRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub overview: String,
    pub tagline: Option<String>,
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub created_by: Vec<Creator>,
}

/// Cast and crew from `/{movie|tv}/{id}/credits`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditsRecord {
    pub id: u64,
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

/// Review listing from `/{movie|tv}/{id}/reviews`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewsRecord {
    pub id: u64,
    #[serde(default)]
    pub results: Vec<Review>,
}

/// All-region provider availability from `/{movie|tv}/{id}/watch/providers`.
/// TMDB sends `results: null` for some titles; both that and a missing key
/// read as no regions.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchProvidersRecord {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty_map")]
    pub results: HashMap<String, WatchProviderRegion>,
}

fn null_as_empty_map<'de, D>(
    deserializer: D,
) -> Result<HashMap<String, WatchProviderRegion>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_record_decodes_snake_case() {
        let json = r#"{
            "id": 603,
            "title": "The Matrix",
            "poster_path": "/matrix.jpg",
            "backdrop_path": null,
            "overview": "A hacker learns the truth.",
            "vote_average": 8.2
        }"#;
        let record: MovieRecord = serde_json::from_str(json).unwrap();
        let item = record.into_media_item();

        assert_eq!(item.id, 603);
        assert_eq!(item.media_type, MediaType::Movie);
        assert_eq!(item.poster_path.as_deref(), Some("/matrix.jpg"));
        assert_eq!(item.backdrop_path, None);
    }

    #[test]
    fn test_trending_title_chain() {
        let titled = TrendingRecord {
            id: 1,
            title: Some("Movie Title".into()),
            name: Some("ignored".into()),
            poster_path: None,
            backdrop_path: None,
            overview: None,
            vote_average: None,
            media_type: MediaType::Movie,
        };
        assert_eq!(titled.into_media_item().title, "Movie Title");

        let named = TrendingRecord {
            id: 2,
            title: None,
            name: Some("Show Name".into()),
            poster_path: None,
            backdrop_path: None,
            overview: None,
            vote_average: None,
            media_type: MediaType::Tv,
        };
        assert_eq!(named.into_media_item().title, "Show Name");

        let bare = TrendingRecord {
            id: 3,
            title: None,
            name: None,
            poster_path: None,
            backdrop_path: None,
            overview: None,
            vote_average: None,
            media_type: MediaType::Person,
        };
        let item = bare.into_media_item();
        assert_eq!(item.title, "");
        assert_eq!(item.title_text(), "Untitled");
        assert_eq!(item.vote_average, 0.0);
    }

    #[test]
    fn test_trending_page_decodes_mixed_media() {
        let json = r#"{
            "page": 1,
            "total_pages": 10,
            "total_results": 200,
            "results": [
                {"id": 1, "title": "A Movie", "media_type": "movie", "vote_average": 7.1},
                {"id": 2, "name": "A Show", "media_type": "tv"},
                {"id": 3, "name": "Someone", "media_type": "person"}
            ]
        }"#;
        let page: Page<TrendingRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(page.results.len(), 3);
        assert_eq!(page.results[0].media_type, MediaType::Movie);
        assert_eq!(page.results[2].media_type, MediaType::Person);
        assert_eq!(page.total_results, 200);
    }

    #[test]
    fn test_providers_record_decodes_regions() {
        let json = r#"{
            "id": 603,
            "results": {
                "US": {
                    "link": "https://www.themoviedb.org/movie/603/watch?locale=US",
                    "flatrate": [
                        {"provider_id": 8, "provider_name": "Netflix",
                         "logo_path": "/n.jpg", "display_priority": 0}
                    ]
                }
            }
        }"#;
        let record: WatchProvidersRecord = serde_json::from_str(json).unwrap();
        let region = record.results.get("US").unwrap();

        let flatrate = region.flatrate.as_ref().unwrap();
        assert_eq!(flatrate[0].provider_name, "Netflix");
        assert_eq!(flatrate[0].display_priority, Some(0));
        assert!(region.rent.is_none());
    }

    #[test]
    fn test_null_provider_results_read_as_empty() {
        let record: WatchProvidersRecord =
            serde_json::from_str(r#"{"id":603,"results":null}"#).unwrap();
        assert!(record.results.is_empty());

        let record: WatchProvidersRecord = serde_json::from_str(r#"{"id":603}"#).unwrap();
        assert!(record.results.is_empty());
    }
}
