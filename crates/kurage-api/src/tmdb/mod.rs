//! TMDB enrichment, reached through a same-origin `/tmdb` proxy path so
//! the API key never lives in the client.

pub mod client;
pub mod types;

pub use client::TmdbClient;
pub use types::{normalize_person_name, TitleKind, TmdbDetails, TmdbVideo, WatchProvider};
