use std::collections::HashMap;
use std::path::PathBuf;

use kurage_core::models::MediaItem;

/// State of an artwork download for a given cache key.
#[derive(Debug, Clone)]
pub enum CoverState {
    Loading,
    Loaded(PathBuf),
    Failed,
}

/// In-memory cache mapping artwork keys to their download state.
///
/// Keys combine the server item id (a GUID) with the image role, e.g.
/// `f27caa37-poster`, so one item's poster and backdrop cache separately.
#[derive(Debug, Default)]
pub struct CoverCache {
    pub states: HashMap<String, CoverState>,
}

impl CoverCache {
    pub fn get(&self, key: &str) -> Option<&CoverState> {
        self.states.get(key)
    }
}

pub fn poster_key(item_id: &str) -> String {
    format!("{item_id}-poster")
}

pub fn backdrop_key(item_id: &str) -> String {
    format!("{item_id}-backdrop")
}

pub fn person_key(person_id: &str) -> String {
    format!("{person_id}-person")
}

pub fn avatar_key(user_id: &str) -> String {
    format!("{user_id}-avatar")
}

/// Poster request pair for a fetched item: cache key plus the URL when
/// the item actually carries primary art.
pub fn poster_request(
    client: &kurage_api::jellyfin::JellyfinClient,
    item: &MediaItem,
    width: u32,
) -> (String, Option<String>) {
    let url = item
        .primary_image_tag()
        .map(|_| client.primary_image_url(item, width));
    (poster_key(&item.id), url)
}

/// Directory for cached artwork.
pub fn covers_dir() -> PathBuf {
    kurage_core::config::project_dirs()
        .map(|dirs| dirs.data_dir().join("covers"))
        .unwrap_or_else(|| PathBuf::from("covers"))
}

/// Expected file path for a cached image.
pub fn cover_path(key: &str) -> PathBuf {
    covers_dir().join(format!("{key}.jpg"))
}

/// Download an image and save it to disk. Returns the saved path.
pub async fn fetch_cover(key: String, url: String) -> Result<PathBuf, String> {
    let dir = covers_dir();
    std::fs::create_dir_all(&dir).map_err(|e| e.to_string())?;

    let path = cover_path(&key);

    let bytes = reqwest::get(&url)
        .await
        .map_err(|e| e.to_string())?
        .bytes()
        .await
        .map_err(|e| e.to_string())?;

    std::fs::write(&path, &bytes).map_err(|e| e.to_string())?;
    Ok(path)
}
