//! Image URL construction. Pure string building, no network calls —
//! resizing and format conversion happen on the server via query
//! parameters.

/// Shown when an item carries no image tag at all.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/300/450";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Primary,
    Backdrop,
}

impl ImageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Backdrop => "Backdrop",
        }
    }
}

/// URL for an item image, or the placeholder when no tag is present.
pub fn image_url(
    server_url: &str,
    item_id: &str,
    tag: Option<&str>,
    kind: ImageKind,
    width: Option<u32>,
) -> String {
    let Some(tag) = tag else {
        return PLACEHOLDER_IMAGE_URL.to_string();
    };
    let base = clean_url(server_url);
    let kind = kind.as_str();
    let mut url = format!("{base}/Items/{item_id}/Images/{kind}?tag={tag}");
    if let Some(width) = width {
        url.push_str(&format!("&width={width}"));
    }
    url.push_str("&format=webp&quality=60");
    url
}

/// URL for a user's avatar, or `None` when the user has no image.
pub fn user_image_url(
    server_url: &str,
    user_id: &str,
    tag: Option<&str>,
    width: u32,
) -> Option<String> {
    let tag = tag?;
    let base = clean_url(server_url);
    Some(format!(
        "{base}/Users/{user_id}/Images/Primary?tag={tag}&width={width}&quality=60&format=webp"
    ))
}

/// Strip a single trailing slash so joins don't double up.
pub fn clean_url(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tag_yields_placeholder() {
        let url = image_url("http://jf.local", "i1", None, ImageKind::Primary, Some(300));
        assert_eq!(url, PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn primary_url_carries_tag_width_and_format() {
        let url = image_url(
            "http://jf.local/",
            "i1",
            Some("abc"),
            ImageKind::Primary,
            Some(400),
        );
        assert_eq!(
            url,
            "http://jf.local/Items/i1/Images/Primary?tag=abc&width=400&format=webp&quality=60"
        );
    }

    #[test]
    fn backdrop_url_without_width() {
        let url = image_url("http://jf.local", "i1", Some("bd"), ImageKind::Backdrop, None);
        assert_eq!(
            url,
            "http://jf.local/Items/i1/Images/Backdrop?tag=bd&format=webp&quality=60"
        );
    }

    #[test]
    fn user_image_requires_tag() {
        assert!(user_image_url("http://jf.local", "u1", None, 100).is_none());
        let url = user_image_url("http://jf.local", "u1", Some("t"), 100).unwrap();
        assert!(url.starts_with("http://jf.local/Users/u1/Images/Primary?tag=t"));
    }

    #[test]
    fn clean_url_strips_one_trailing_slash() {
        assert_eq!(clean_url("http://a/"), "http://a");
        assert_eq!(clean_url("http://a"), "http://a");
    }
}
