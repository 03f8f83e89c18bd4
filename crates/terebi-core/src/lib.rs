//! Core data model and local state for the terebi catalog browser.
//!
//! This crate has no networking. It defines the unified media model every
//! screen consumes, the JSON-backed watchlist, and the quick-provider
//! shortcut matcher. The TMDB client in `terebi-api` converts its wire
//! records into these types.

pub mod models;
pub mod quick_providers;
pub mod watchlist;
