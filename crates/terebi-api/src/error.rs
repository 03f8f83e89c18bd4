use thiserror::Error;

/// Errors from the TMDB catalog client.
///
/// Every request surfaces exactly one of these. The aggregation layer
/// passes them through to screen state unchanged; nothing is retried.
#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("missing TMDB API key; set TMDB_API_KEY, add it to .env, or to the terebi config file")]
    MissingApiKey,

    #[error("invalid TMDB URL: {0}")]
    InvalidUrl(String),

    #[error("unreadable response from TMDB")]
    InvalidResponse,

    #[error("TMDB request failed with status {0}")]
    Http(u16),

    #[error("failed to decode TMDB response: {0}")]
    Decode(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
