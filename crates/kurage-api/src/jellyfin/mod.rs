//! Jellyfin REST client: authentication, library views, item browsing
//! and image URL construction.

pub mod client;
pub mod error;
pub mod images;
pub mod query;
pub mod types;

pub use client::{authenticate, JellyfinClient};
pub use error::JellyfinError;
