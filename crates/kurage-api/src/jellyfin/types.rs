use serde::Deserialize;

/// Response to `POST /Users/AuthenticateByName`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthResponse {
    pub user: UserDto,
    pub access_token: String,
    #[serde(default)]
    pub server_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub primary_image_tag: Option<String>,
}

/// The server wraps every list response the same way.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemsEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total_record_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurage_core::models::MediaItem;

    #[test]
    fn auth_response_parses() {
        let json = r#"{
            "User": { "Id": "u1", "Name": "alice", "PrimaryImageTag": "t1" },
            "AccessToken": "tok",
            "ServerId": "s1"
        }"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.user.id, "u1");
        assert_eq!(resp.access_token, "tok");
    }

    #[test]
    fn envelope_defaults_on_missing_fields() {
        let resp: ItemsEnvelope<MediaItem> = serde_json::from_str("{}").unwrap();
        assert!(resp.items.is_empty());
        assert_eq!(resp.total_record_count, 0);

        let resp: ItemsEnvelope<MediaItem> = serde_json::from_str(
            r#"{ "Items": [{ "Id": "1", "Name": "x", "Type": "Movie" }], "TotalRecordCount": 9 }"#,
        )
        .unwrap();
        assert_eq!(resp.items.len(), 1);
        assert_eq!(resp.total_record_count, 9);
    }
}
