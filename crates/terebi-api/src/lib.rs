//! TMDB catalog client.
//!
//! Resolves an API credential, builds authenticated requests, validates
//! HTTP status, decodes JSON wire records, and classifies every failure
//! as exactly one [`TmdbError`]. Raw records convert into the unified
//! `terebi-core` model via `into_media_item()`.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::TmdbClient;
pub use config::Credential;
pub use error::TmdbError;
