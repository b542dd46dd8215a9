use serde::{Deserialize, Serialize};

use super::item::ImageTags;

/// A library (user view) on the server, e.g. "Movies" or "Shows".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LibraryView {
    pub id: String,
    pub name: String,
    pub collection_type: Option<String>,
    pub image_tags: ImageTags,
}

impl LibraryView {
    /// Collection-folder views ("boxsets") are hidden from the library
    /// listing by the presentation layer.
    pub fn is_boxset_collection(&self) -> bool {
        self.collection_type.as_deref() == Some("boxsets")
    }
}

/// A selectable filter entry, e.g. a genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilterOption {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxsets_are_flagged() {
        let view: LibraryView = serde_json::from_str(
            r#"{ "Id": "v1", "Name": "Collections", "CollectionType": "boxsets" }"#,
        )
        .unwrap();
        assert!(view.is_boxset_collection());

        let view: LibraryView =
            serde_json::from_str(r#"{ "Id": "v2", "Name": "Movies", "CollectionType": "movies" }"#)
                .unwrap();
        assert!(!view.is_boxset_collection());
    }
}
