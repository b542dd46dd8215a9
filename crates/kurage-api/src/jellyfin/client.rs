use reqwest::Client;
use serde_json::json;

use kurage_core::browse::{ItemPage, PageRequest};
use kurage_core::models::{FilterOption, LibraryView, MediaItem, Person};
use kurage_core::session::Session;

use super::error::JellyfinError;
use super::images::{self, ImageKind};
use super::query;
use super::types::{AuthResponse, ItemsEnvelope};

/// Static client identification sent with every request.
const CLIENT_AUTH_HEADER: &str = concat!(
    "MediaBrowser Client=\"Kurage\", Device=\"Desktop\", DeviceId=\"kurage-desktop\", Version=\"",
    env!("CARGO_PKG_VERSION"),
    "\""
);

/// Authenticate against a server with username/password.
///
/// Any non-success status reads as bad credentials or an unreachable
/// server; the login screen surfaces it inline.
pub async fn authenticate(
    server_url: &str,
    username: &str,
    password: &str,
) -> Result<Session, JellyfinError> {
    let base = images::clean_url(server_url);
    let http = Client::new();
    let resp = http
        .post(format!("{base}/Users/AuthenticateByName"))
        .header("X-Emby-Authorization", CLIENT_AUTH_HEADER)
        .json(&json!({ "Username": username, "Pw": password }))
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(JellyfinError::Auth(format!(
            "server rejected login (status {})",
            resp.status().as_u16()
        )));
    }

    let body: AuthResponse = resp
        .json()
        .await
        .map_err(|e| JellyfinError::Parse(e.to_string()))?;

    Ok(Session {
        user_id: body.user.id,
        user_name: body.user.name,
        access_token: body.access_token,
        server_url: base.to_string(),
        user_image_tag: body.user.primary_image_tag,
    })
}

/// Authenticated Jellyfin client. Stateless beyond the session and the
/// shared connection pool; cheap to clone into async tasks.
#[derive(Debug, Clone)]
pub struct JellyfinClient {
    session: Session,
    http: Client,
}

impl JellyfinClient {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            http: Client::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn base(&self) -> &str {
        images::clean_url(&self.session.server_url)
    }

    fn get(&self, url: String) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header("X-Emby-Authorization", CLIENT_AUTH_HEADER)
            .header("X-Emby-Token", &self.session.access_token)
    }

    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, JellyfinError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            Err(JellyfinError::Api { status, message })
        }
    }

    /// List the user's libraries. Collection filtering is the caller's
    /// concern, not the client's.
    pub async fn list_views(&self) -> Result<Vec<LibraryView>, JellyfinError> {
        let base = self.base();
        let user_id = &self.session.user_id;
        let resp = self.get(format!("{base}/Users/{user_id}/Views")).send().await?;
        let resp = Self::check_response(resp).await?;
        let body: ItemsEnvelope<LibraryView> = resp
            .json()
            .await
            .map_err(|e| JellyfinError::Parse(e.to_string()))?;
        Ok(body.items)
    }

    /// Fetch one browse page for the given request.
    pub async fn list_items(&self, req: &PageRequest) -> Result<ItemPage, JellyfinError> {
        let base = self.base();
        let user_id = &self.session.user_id;
        let params = query::item_query(req);
        let resp = self
            .get(format!("{base}/Users/{user_id}/Items"))
            .query(&params)
            .send()
            .await?;
        let resp = Self::check_response(resp).await?;
        let body: ItemsEnvelope<MediaItem> = resp
            .json()
            .await
            .map_err(|e| JellyfinError::Parse(e.to_string()))?;
        Ok(ItemPage {
            items: body.items,
            total_count: body.total_record_count,
        })
    }

    /// Pick a random item, optionally scoped to one library and excluding
    /// played items. Failures read as "no result" — a missing pick is a
    /// notice, not an error state.
    pub async fn random_item(
        &self,
        scope: Option<&str>,
        exclude_played: bool,
    ) -> Option<MediaItem> {
        let base = self.base();
        let user_id = &self.session.user_id;
        let params = query::random_query(scope, exclude_played);
        let resp = self
            .get(format!("{base}/Users/{user_id}/Items"))
            .query(&params)
            .send()
            .await
            .ok()?;
        if !resp.status().is_success() {
            tracing::debug!(status = resp.status().as_u16(), "Random pick refused");
            return None;
        }
        let body: ItemsEnvelope<MediaItem> = resp.json().await.ok()?;
        body.items.into_iter().next()
    }

    /// Fetch the enriched record for one item.
    pub async fn item_detail(&self, item_id: &str) -> Result<MediaItem, JellyfinError> {
        let base = self.base();
        let user_id = &self.session.user_id;
        let resp = self
            .get(format!("{base}/Users/{user_id}/Items/{item_id}"))
            .query(&[("Fields", query::DETAIL_FIELDS)])
            .send()
            .await?;
        let resp = Self::check_response(resp).await?;
        resp.json()
            .await
            .map_err(|e| JellyfinError::Parse(e.to_string()))
    }

    /// Genres available in a scope. Non-fatal: any failure reads as "no
    /// filter options".
    pub async fn list_genres(&self, scope: Option<&str>) -> Vec<FilterOption> {
        let base = self.base();
        let resp = self
            .get(format!("{base}/Genres"))
            .query(&[
                ("ParentId", scope.unwrap_or_default()),
                ("Recursive", "true"),
            ])
            .send()
            .await;
        let resp = match resp {
            Ok(resp) if resp.status().is_success() => resp,
            Ok(resp) => {
                tracing::debug!(status = resp.status().as_u16(), "Genre listing refused");
                return Vec::new();
            }
            Err(e) => {
                tracing::debug!("Genre listing failed: {e}");
                return Vec::new();
            }
        };
        resp.json::<ItemsEnvelope<FilterOption>>()
            .await
            .map(|body| body.items)
            .unwrap_or_default()
    }

    /// Seasons of a series, ordered by season index.
    pub async fn list_seasons(&self, series_id: &str) -> Result<Vec<MediaItem>, JellyfinError> {
        let base = self.base();
        let user_id = &self.session.user_id;
        let params = query::seasons_query(series_id);
        let resp = self
            .get(format!("{base}/Users/{user_id}/Items"))
            .query(&params)
            .send()
            .await?;
        let resp = Self::check_response(resp).await?;
        let body: ItemsEnvelope<MediaItem> = resp
            .json()
            .await
            .map_err(|e| JellyfinError::Parse(e.to_string()))?;
        Ok(body.items)
    }

    // ── Image URLs (no network) ───────────────────────────────────

    pub fn primary_image_url(&self, item: &MediaItem, width: u32) -> String {
        images::image_url(
            &self.session.server_url,
            &item.id,
            item.primary_image_tag(),
            ImageKind::Primary,
            Some(width),
        )
    }

    pub fn backdrop_image_url(&self, item: &MediaItem, width: u32) -> Option<String> {
        item.backdrop_tag().map(|tag| {
            images::image_url(
                &self.session.server_url,
                &item.id,
                Some(tag),
                ImageKind::Backdrop,
                Some(width),
            )
        })
    }

    pub fn person_image_url(&self, person: &Person, width: u32) -> Option<String> {
        person.primary_image_tag.as_deref().map(|tag| {
            images::image_url(
                &self.session.server_url,
                &person.id,
                Some(tag),
                ImageKind::Primary,
                Some(width),
            )
        })
    }

    pub fn user_avatar_url(&self, width: u32) -> Option<String> {
        images::user_image_url(
            &self.session.server_url,
            &self.session.user_id,
            self.session.user_image_tag.as_deref(),
            width,
        )
    }

    /// Deep link into the server's own web player for playback.
    pub fn web_player_url(&self, item_id: &str) -> String {
        let base = self.base();
        format!("{base}/web/index.html#!/details?id={item_id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            user_id: "u1".into(),
            user_name: "alice".into(),
            access_token: "tok".into(),
            server_url: "http://jf.local:8096/".into(),
            user_image_tag: None,
        }
    }

    #[test]
    fn web_player_url_strips_trailing_slash() {
        let client = JellyfinClient::new(session());
        assert_eq!(
            client.web_player_url("i9"),
            "http://jf.local:8096/web/index.html#!/details?id=i9"
        );
    }

    #[test]
    fn client_header_names_the_app() {
        assert!(CLIENT_AUTH_HEADER.starts_with("MediaBrowser Client=\"Kurage\""));
        assert!(CLIENT_AUTH_HEADER.contains("DeviceId=\"kurage-desktop\""));
    }
}
