//! HTTP clients for the media server and the metadata provider.

pub mod jellyfin;
pub mod tmdb;
