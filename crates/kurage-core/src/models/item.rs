//! Media item records as the server returns them.
//!
//! These are wire DTOs (PascalCase JSON) and the domain model at once —
//! the client never re-shapes what the server sends, it only renders it.
//! A summary record and its later detail fetch share the same identity;
//! the detail simply carries more fields.

use serde::{Deserialize, Serialize};

/// A playable work: movie, series, season or episode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MediaItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "Type")]
    pub kind: MediaKind,
    pub original_title: Option<String>,
    pub production_year: Option<u32>,
    pub premiere_date: Option<String>,
    pub overview: Option<String>,
    pub run_time_ticks: Option<i64>,
    pub community_rating: Option<f32>,
    pub taglines: Vec<String>,
    pub tags: Vec<String>,
    pub genres: Vec<String>,
    pub image_tags: ImageTags,
    pub backdrop_image_tags: Vec<String>,
    pub index_number: Option<u32>,
    pub parent_index_number: Option<u32>,
    pub child_count: Option<u32>,
    pub recursive_item_count: Option<u32>,
    pub people: Vec<Person>,
    pub provider_ids: ProviderIds,
    pub user_data: Option<UserData>,
}

impl MediaItem {
    /// Server-tracked "fully watched" flag.
    pub fn is_played(&self) -> bool {
        self.user_data.as_ref().is_some_and(|u| u.played)
    }

    pub fn primary_image_tag(&self) -> Option<&str> {
        self.image_tags.primary.as_deref()
    }

    /// First backdrop tag, if the item has backdrop art.
    pub fn backdrop_tag(&self) -> Option<&str> {
        self.backdrop_image_tags.first().map(String::as_str)
    }

    pub fn tagline(&self) -> Option<&str> {
        self.taglines.first().map(String::as_str)
    }
}

/// Item kind. Unrecognized server kinds deserialize as `Unknown` rather
/// than failing the whole page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MediaKind {
    Movie,
    Series,
    Season,
    Episode,
    BoxSet,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ImageTags {
    pub primary: Option<String>,
    pub backdrop: Option<String>,
    pub logo: Option<String>,
}

/// Cross-reference identifiers pairing the item with external catalogs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProviderIds {
    pub tmdb: Option<String>,
    pub imdb: Option<String>,
}

/// Per-user playback state attached by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserData {
    pub played: bool,
    pub unplayed_item_count: Option<u32>,
    pub playback_position_ticks: Option<i64>,
}

/// Cast or crew credit on an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub role: Option<String>,
    #[serde(rename = "Type")]
    pub kind: PersonKind,
    pub primary_image_tag: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PersonKind {
    Actor,
    Director,
    Producer,
    Writer,
    Creator,
    #[default]
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_item_parses() {
        let json = r#"{
            "Name": "The Matrix",
            "Id": "f27caa37e5142225cceded48f6553502",
            "Type": "Movie",
            "ProductionYear": 1999,
            "RunTimeTicks": 81760000000,
            "CommunityRating": 8.2,
            "ImageTags": { "Primary": "a1b2" },
            "BackdropImageTags": ["c3d4"],
            "UserData": { "Played": true, "PlaybackPositionTicks": 0 }
        }"#;
        let item: MediaItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, MediaKind::Movie);
        assert!(item.is_played());
        assert_eq!(item.primary_image_tag(), Some("a1b2"));
        assert_eq!(item.backdrop_tag(), Some("c3d4"));
    }

    #[test]
    fn unknown_kind_is_tolerated() {
        let json = r#"{ "Name": "x", "Id": "1", "Type": "MusicVideo" }"#;
        let item: MediaItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, MediaKind::Unknown);
        assert!(!item.is_played());
    }

    #[test]
    fn people_classify_by_kind() {
        let json = r#"{
            "Name": "s", "Id": "2", "Type": "Series",
            "People": [
                { "Name": "A", "Id": "p1", "Type": "Actor", "Role": "Neo" },
                { "Name": "B", "Id": "p2", "Type": "Director" },
                { "Name": "C", "Id": "p3", "Type": "GuestStar" }
            ]
        }"#;
        let item: MediaItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.people[0].kind, PersonKind::Actor);
        assert_eq!(item.people[1].kind, PersonKind::Director);
        assert_eq!(item.people[2].kind, PersonKind::Other);
    }
}
