//! HTTP client for The Movie Database.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use terebi_core::models::{MediaType, Review, WatchProviderRegion};

use crate::config::Credential;
use crate::error::TmdbError;
use crate::types::{
    CreditsRecord, MovieDetailRecord, MovieRecord, Page, ReviewsRecord, TrendingRecord,
    TvDetailRecord, TvRecord, WatchProvidersRecord,
};

const BASE_URL: &str = "https://api.themoviedb.org/3";

const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w342";
const IMAGE_BASE_LARGE: &str = "https://image.tmdb.org/t/p/w780";
const PROFILE_BASE: &str = "https://image.tmdb.org/t/p/w185";
const LOGO_BASE: &str = "https://image.tmdb.org/t/p/w92";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Listing endpoints are pinned to English and the first page.
const LISTING_QUERY: &[(&str, &str)] = &[("language", "en-US"), ("page", "1")];

/// TMDB catalog client.
///
/// One instance is shared by all screens; `reqwest::Client` pools
/// connections internally.
pub struct TmdbClient {
    http: Client,
    credential: Credential,
    base_url: String,
}

impl TmdbClient {
    /// Build a client, resolving the credential from the source chain.
    pub fn new() -> Result<Self, TmdbError> {
        let credential = Credential::resolve().ok_or(TmdbError::MissingApiKey)?;
        Self::with_credential(credential)
    }

    /// Build a client with an explicit credential.
    pub fn with_credential(credential: Credential) -> Result<Self, TmdbError> {
        Self::with_base_url(credential, BASE_URL)
    }

    /// Build a client against a different API host. Paths and auth are
    /// unchanged; used to point screens at a stub catalog in tests.
    pub fn with_base_url(
        credential: Credential,
        base_url: impl Into<String>,
    ) -> Result<Self, TmdbError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            credential,
            base_url: base_url.into(),
        })
    }

    // ── Catalog calls ───────────────────────────────────────────

    /// Daily trending across movies, TV, and people.
    pub async fn trending(&self) -> Result<Vec<TrendingRecord>, TmdbError> {
        let page: Page<TrendingRecord> = self.request("/trending/all/day", &[]).await?;
        Ok(page.results)
    }

    pub async fn top_rated_movies(&self) -> Result<Vec<MovieRecord>, TmdbError> {
        let page: Page<MovieRecord> = self.request("/movie/top_rated", LISTING_QUERY).await?;
        Ok(page.results)
    }

    pub async fn popular_movies(&self) -> Result<Vec<MovieRecord>, TmdbError> {
        let page: Page<MovieRecord> = self.request("/movie/popular", LISTING_QUERY).await?;
        Ok(page.results)
    }

    pub async fn top_rated_tv(&self) -> Result<Vec<TvRecord>, TmdbError> {
        let page: Page<TvRecord> = self.request("/tv/top_rated", LISTING_QUERY).await?;
        Ok(page.results)
    }

    pub async fn popular_tv(&self) -> Result<Vec<TvRecord>, TmdbError> {
        let page: Page<TvRecord> = self.request("/tv/popular", LISTING_QUERY).await?;
        Ok(page.results)
    }

    pub async fn movie_detail(&self, id: u64) -> Result<MovieDetailRecord, TmdbError> {
        self.request(&format!("/movie/{id}"), &[]).await
    }

    pub async fn tv_detail(&self, id: u64) -> Result<TvDetailRecord, TmdbError> {
        self.request(&format!("/tv/{id}"), &[]).await
    }

    pub async fn credits(&self, id: u64, media: MediaType) -> Result<CreditsRecord, TmdbError> {
        let path = format!("/{}/{id}/credits", detail_segment(media)?);
        self.request(&path, &[]).await
    }

    pub async fn reviews(&self, id: u64, media: MediaType) -> Result<Vec<Review>, TmdbError> {
        let path = format!("/{}/{id}/reviews", detail_segment(media)?);
        let record: ReviewsRecord = self.request(&path, &[]).await?;
        Ok(record.results)
    }

    /// Provider availability for one region, or `None` when TMDB lists
    /// nothing for that region (not an error).
    pub async fn watch_providers(
        &self,
        id: u64,
        media: MediaType,
        region: &str,
    ) -> Result<Option<WatchProviderRegion>, TmdbError> {
        let path = format!("/{}/{id}/watch/providers", detail_segment(media)?);
        let mut record: WatchProvidersRecord = self.request(&path, &[]).await?;
        Ok(record.results.remove(region))
    }

    /// Multi-search across movies, TV, and people.
    pub async fn search_multi(&self, query: &str) -> Result<Vec<TrendingRecord>, TmdbError> {
        let page: Page<TrendingRecord> =
            self.request("/search/multi", &[("query", query)]).await?;
        Ok(page.results)
    }

    // ── Image URLs ──────────────────────────────────────────────

    /// Poster URL for the small (w342) or large (w780) tier, or `None`
    /// for an empty/missing path.
    pub fn poster_url(path: Option<&str>, large: bool) -> Option<String> {
        image_url(if large { IMAGE_BASE_LARGE } else { IMAGE_BASE }, path)
    }

    /// Backdrop URL; same tiers as posters.
    pub fn backdrop_url(path: Option<&str>, large: bool) -> Option<String> {
        image_url(if large { IMAGE_BASE_LARGE } else { IMAGE_BASE }, path)
    }

    /// Profile photo URL (w185).
    pub fn profile_url(path: Option<&str>) -> Option<String> {
        image_url(PROFILE_BASE, path)
    }

    /// Provider logo URL (w92).
    pub fn provider_logo_url(path: Option<&str>) -> Option<String> {
        image_url(LOGO_BASE, path)
    }

    // ── Request plumbing ────────────────────────────────────────

    /// Build the request URL, attaching `api_key` for v3 keys. v4
    /// bearer tokens authenticate via header instead.
    fn build_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, TmdbError> {
        let mut url = Url::parse(&format!("{}{path}", self.base_url))
            .map_err(|e| TmdbError::InvalidUrl(e.to_string()))?;

        let mut params: Vec<(&str, &str)> = query.to_vec();
        if !self.credential.is_bearer() {
            params.push(("api_key", self.credential.as_str()));
        }
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }

    async fn request<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, TmdbError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.build_url(path, query)?;
        tracing::debug!(path, "TMDB request");

        let mut req = self.http.get(url);
        if self.credential.is_bearer() {
            req = req.header(
                "Authorization",
                format!("Bearer {}", self.credential.as_str()),
            );
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), path, "TMDB error status");
            return Err(TmdbError::Http(status.as_u16()));
        }

        let body = resp.bytes().await.map_err(|_| TmdbError::InvalidResponse)?;
        serde_json::from_slice(&body).map_err(|e| TmdbError::Decode(e.to_string()))
    }
}

/// Path segment for credit/review/provider endpoints. People have none,
/// so those requests are rejected before any network activity.
fn detail_segment(media: MediaType) -> Result<&'static str, TmdbError> {
    match media {
        MediaType::Movie => Ok("movie"),
        MediaType::Tv => Ok("tv"),
        MediaType::Person => Err(TmdbError::InvalidUrl(
            "person records have no credit/review/provider endpoints".into(),
        )),
    }
}

/// Build `base + path`, or `None` for an empty/missing path.
fn image_url(base: &str, path: Option<&str>) -> Option<String> {
    match path {
        Some(p) if !p.is_empty() => Some(format!("{base}{p}")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v3_key_goes_in_query() {
        let client = TmdbClient::with_credential(Credential::new("abc123")).unwrap();
        let url = client
            .build_url("/movie/top_rated", LISTING_QUERY)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.themoviedb.org/3/movie/top_rated?language=en-US&page=1&api_key=abc123"
        );
    }

    #[test]
    fn test_v4_token_stays_out_of_query() {
        let client = TmdbClient::with_credential(Credential::new("eyJ.abc")).unwrap();

        let url = client.build_url("/trending/all/day", &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.themoviedb.org/3/trending/all/day");

        let url = client.build_url("/search/multi", &[("query", "dune")]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.themoviedb.org/3/search/multi?query=dune"
        );
    }

    #[test]
    fn test_image_urls() {
        assert_eq!(
            TmdbClient::poster_url(Some("/abc.jpg"), false).as_deref(),
            Some("https://image.tmdb.org/t/p/w342/abc.jpg")
        );
        assert_eq!(
            TmdbClient::backdrop_url(Some("/abc.jpg"), true).as_deref(),
            Some("https://image.tmdb.org/t/p/w780/abc.jpg")
        );
        assert_eq!(TmdbClient::poster_url(Some(""), false), None);
        assert_eq!(TmdbClient::poster_url(None, true), None);
        assert_eq!(
            TmdbClient::provider_logo_url(Some("/n.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w92/n.jpg")
        );
    }

    #[test]
    fn test_person_detail_endpoints_rejected() {
        assert!(matches!(
            detail_segment(MediaType::Person),
            Err(TmdbError::InvalidUrl(_))
        ));
        assert_eq!(detail_segment(MediaType::Movie).unwrap(), "movie");
        assert_eq!(detail_segment(MediaType::Tv).unwrap(), "tv");
    }
}
