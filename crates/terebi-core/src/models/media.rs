use serde::Deserialize;

/// Discriminator for catalog records: film, series, or person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
    Person,
}

impl MediaType {
    /// Short tag used in watchlist keys and API paths.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
            Self::Person => "person",
        }
    }

    /// Parse the short tag back into a media type.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "movie" => Some(Self::Movie),
            "tv" => Some(Self::Tv),
            "person" => Some(Self::Person),
            _ => None,
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Tv => "TV Series",
            Self::Person => "Person",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified catalog entry used by every screen.
///
/// Built once from a raw movie/tv/trending record and not mutated after.
/// Numeric ids are not unique across media types — a movie and a TV series
/// may share one — so UI keying must combine `id` with `media_type`.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub overview: String,
    pub vote_average: f64,
    pub media_type: MediaType,
}

impl MediaItem {
    /// Display title, falling back to "Untitled" for empty source titles.
    pub fn title_text(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }

    /// Key identifying this item in the watchlist: `"{type}-{id}"`.
    pub fn watchlist_key(&self) -> String {
        watchlist_key(self.media_type, self.id)
    }
}

/// Build the watchlist key for a media type and id.
pub fn watchlist_key(media_type: MediaType, id: u64) -> String {
    format!("{}-{id}", media_type.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> MediaItem {
        MediaItem {
            id: 603,
            title: title.into(),
            poster_path: None,
            backdrop_path: None,
            overview: String::new(),
            vote_average: 8.2,
            media_type: MediaType::Movie,
        }
    }

    #[test]
    fn test_title_text_fallback() {
        assert_eq!(item("The Matrix").title_text(), "The Matrix");
        assert_eq!(item("").title_text(), "Untitled");
    }

    #[test]
    fn test_watchlist_key() {
        assert_eq!(watchlist_key(MediaType::Movie, 42), "movie-42");
        assert_eq!(watchlist_key(MediaType::Tv, 42), "tv-42");
        assert_eq!(item("x").watchlist_key(), "movie-603");
    }

    #[test]
    fn test_media_type_tags() {
        assert_eq!(MediaType::from_tag("tv"), Some(MediaType::Tv));
        assert_eq!(MediaType::from_tag("song"), None);
        assert_eq!(MediaType::Tv.label(), "TV Series");
    }
}
