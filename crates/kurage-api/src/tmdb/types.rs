use std::collections::HashMap;

use serde::Deserialize;
use unicode_normalization::UnicodeNormalization;

use kurage_core::models::MediaKind;

/// Which TMDB catalog an item lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleKind {
    Movie,
    Tv,
}

impl TitleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }

    /// Series map to the TV catalog; everything else is looked up as a
    /// movie.
    pub fn for_item(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Series => Self::Tv,
            _ => Self::Movie,
        }
    }
}

/// Enrichment record for one title, with credits, videos and regional
/// watch providers appended.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TmdbDetails {
    pub overview: Option<String>,
    pub original_language: Option<String>,
    pub homepage: Option<String>,
    pub external_ids: Option<ExternalIds>,
    pub credits: Option<Credits>,
    pub created_by: Option<Vec<TmdbPerson>>,
    pub videos: Option<VideoList>,
    #[serde(rename = "watch/providers")]
    pub watch_providers: Option<WatchProviderResults>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExternalIds {
    pub imdb_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Credits {
    pub cast: Vec<TmdbPerson>,
    pub crew: Vec<TmdbPerson>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TmdbPerson {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VideoList {
    pub results: Vec<TmdbVideo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TmdbVideo {
    pub key: String,
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub official: bool,
}

impl TmdbVideo {
    pub fn youtube_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.key)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WatchProviderResults {
    pub results: HashMap<String, RegionProviders>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegionProviders {
    pub flatrate: Option<Vec<WatchProvider>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WatchProvider {
    pub provider_id: u32,
    pub provider_name: String,
    pub logo_path: Option<String>,
}

impl WatchProvider {
    pub fn logo_url(&self) -> Option<String> {
        self.logo_path
            .as_deref()
            .map(|p| format!("https://image.tmdb.org/t/p/original{p}"))
    }
}

impl TmdbDetails {
    /// Best trailer: an official YouTube trailer, else any YouTube
    /// trailer.
    pub fn trailer(&self) -> Option<&TmdbVideo> {
        let videos = &self.videos.as_ref()?.results;
        let is_trailer = |v: &&TmdbVideo| v.kind == "Trailer" && v.site == "YouTube";
        videos
            .iter()
            .filter(is_trailer)
            .find(|v| v.official)
            .or_else(|| videos.iter().find(is_trailer))
    }

    /// Streaming (flatrate) providers for a region, falling back to US
    /// availability when the region has none.
    pub fn flatrate_providers(&self, region: &str) -> &[WatchProvider] {
        let Some(results) = self.watch_providers.as_ref().map(|w| &w.results) else {
            return &[];
        };
        let region = region.to_uppercase();
        results
            .get(&region)
            .and_then(|r| r.flatrate.as_deref())
            .or_else(|| results.get("US").and_then(|r| r.flatrate.as_deref()))
            .unwrap_or(&[])
    }

    /// Normalized person name → TMDB person id, across created_by, cast
    /// and crew. Used to link the server's credited people to their TMDB
    /// pages despite accent/case differences.
    pub fn person_index(&self) -> HashMap<String, u64> {
        let mut index = HashMap::new();
        let mut add = |people: &[TmdbPerson]| {
            for person in people {
                if person.id != 0 && !person.name.is_empty() {
                    index.insert(normalize_person_name(&person.name), person.id);
                }
            }
        };
        if let Some(created_by) = &self.created_by {
            add(created_by);
        }
        if let Some(credits) = &self.credits {
            add(&credits.cast);
            add(&credits.crew);
        }
        index
    }
}

/// Lowercase, decompose and strip combining accents, so "Amélie" and
/// "amelie" compare equal.
pub fn normalize_person_name(name: &str) -> String {
    name.to_lowercase()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// TMDB page for a person, or a person search when the id is unknown.
pub fn person_url(index: &HashMap<String, u64>, name: &str) -> String {
    match index.get(&normalize_person_name(name)) {
        Some(id) => format!("https://www.themoviedb.org/person/{id}"),
        None => {
            let encoded: String =
                url::form_urlencoded::byte_serialize(name.as_bytes()).collect();
            format!("https://www.themoviedb.org/search/person?query={encoded}")
        }
    }
}

/// TMDB page for a title.
pub fn title_url(kind: TitleKind, tmdb_id: &str) -> String {
    format!("https://www.themoviedb.org/{}/{tmdb_id}", kind.as_str())
}

/// IMDb page for a title.
pub fn imdb_url(imdb_id: &str) -> String {
    format!("https://www.imdb.com/title/{imdb_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(kind: &str, site: &str, official: bool, key: &str) -> TmdbVideo {
        TmdbVideo {
            key: key.into(),
            name: String::new(),
            site: site.into(),
            kind: kind.into(),
            official,
        }
    }

    #[test]
    fn official_trailer_wins() {
        let details = TmdbDetails {
            videos: Some(VideoList {
                results: vec![
                    video("Clip", "YouTube", true, "clip"),
                    video("Trailer", "YouTube", false, "fan"),
                    video("Trailer", "YouTube", true, "official"),
                ],
            }),
            ..Default::default()
        };
        assert_eq!(details.trailer().unwrap().key, "official");
    }

    #[test]
    fn any_youtube_trailer_is_a_fallback() {
        let details = TmdbDetails {
            videos: Some(VideoList {
                results: vec![
                    video("Trailer", "Vimeo", true, "vimeo"),
                    video("Trailer", "YouTube", false, "fan"),
                ],
            }),
            ..Default::default()
        };
        assert_eq!(details.trailer().unwrap().key, "fan");
        assert_eq!(
            details.trailer().unwrap().youtube_url(),
            "https://www.youtube.com/watch?v=fan"
        );
    }

    #[test]
    fn providers_fall_back_to_us() {
        let mut results = HashMap::new();
        results.insert(
            "US".to_string(),
            RegionProviders {
                flatrate: Some(vec![WatchProvider {
                    provider_id: 8,
                    provider_name: "Netflix".into(),
                    logo_path: Some("/n.png".into()),
                }]),
            },
        );
        let details = TmdbDetails {
            watch_providers: Some(WatchProviderResults { results }),
            ..Default::default()
        };
        let providers = details.flatrate_providers("fr");
        assert_eq!(providers.len(), 1);
        assert_eq!(
            providers[0].logo_url().unwrap(),
            "https://image.tmdb.org/t/p/original/n.png"
        );
        assert!(TmdbDetails::default().flatrate_providers("fr").is_empty());
    }

    #[test]
    fn person_names_match_despite_accents() {
        assert_eq!(normalize_person_name("Amélie Poulain"), "amelie poulain");
        assert_eq!(
            normalize_person_name("  Pedro ALMODÓVAR "),
            "pedro almodovar"
        );
    }

    #[test]
    fn person_index_covers_cast_crew_and_creators() {
        let details = TmdbDetails {
            created_by: Some(vec![TmdbPerson {
                id: 1,
                name: "Vince".into(),
            }]),
            credits: Some(Credits {
                cast: vec![TmdbPerson {
                    id: 2,
                    name: "Léa".into(),
                }],
                crew: vec![TmdbPerson {
                    id: 3,
                    name: "Denis".into(),
                }],
            }),
            ..Default::default()
        };
        let index = details.person_index();
        assert_eq!(index.get("vince"), Some(&1));
        assert_eq!(index.get("lea"), Some(&2));
        assert_eq!(
            person_url(&index, "Léa"),
            "https://www.themoviedb.org/person/2"
        );
        assert!(person_url(&index, "Nobody Known").contains("search/person?query=Nobody+Known"));
    }

    #[test]
    fn title_kind_maps_series_to_tv() {
        use kurage_core::models::MediaKind;
        assert_eq!(TitleKind::for_item(MediaKind::Series), TitleKind::Tv);
        assert_eq!(TitleKind::for_item(MediaKind::Movie), TitleKind::Movie);
        assert_eq!(title_url(TitleKind::Tv, "42"), "https://www.themoviedb.org/tv/42");
    }

    #[test]
    fn full_payload_parses() {
        let json = r#"{
            "overview": "desc",
            "original_language": "en",
            "homepage": "https://example.com",
            "external_ids": { "imdb_id": "tt0133093" },
            "credits": { "cast": [{ "id": 1, "name": "A" }], "crew": [] },
            "videos": { "results": [{ "key": "k", "site": "YouTube", "type": "Trailer", "official": true }] },
            "watch/providers": { "results": { "US": { "flatrate": [{ "provider_id": 8, "provider_name": "Netflix" }] } } }
        }"#;
        let details: TmdbDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.external_ids.unwrap().imdb_id.as_deref(), Some("tt0133093"));
        assert!(details.videos.is_some());
    }
}
