//! Persisted login session.
//!
//! Two durable entries, mirroring what the client needs across restarts:
//! the serialized session (user identity + token + server) and the
//! last-used server URL, which survives logout so the login form can be
//! re-seeded.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::project_dirs;
use crate::error::KurageError;

const SESSION_FILE: &str = "session.json";
const SERVER_URL_FILE: &str = "server_url";

/// An authenticated identity against one media server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub user_name: String,
    pub access_token: String,
    pub server_url: String,
    pub user_image_tag: Option<String>,
}

/// Durable store for the session and the last-used server URL.
///
/// Written only at login/logout; read at startup. No concurrent writers.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Store rooted at the platform data dir.
    pub fn open() -> Self {
        let dir = project_dirs()
            .map(|d| d.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        Self { dir }
    }

    /// Store rooted at an explicit directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Load the persisted session, if any. A corrupt file reads as "not
    /// logged in" rather than an error.
    pub fn load(&self) -> Option<Session> {
        let content = std::fs::read_to_string(self.dir.join(SESSION_FILE)).ok()?;
        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Discarding unreadable session file: {e}");
                None
            }
        }
    }

    /// Persist a session and remember its server URL.
    pub fn save(&self, session: &Session) -> Result<(), KurageError> {
        std::fs::create_dir_all(&self.dir)?;
        let json =
            serde_json::to_string_pretty(session).map_err(|e| KurageError::Store(e.to_string()))?;
        std::fs::write(self.dir.join(SESSION_FILE), json)?;
        std::fs::write(self.dir.join(SERVER_URL_FILE), &session.server_url)?;
        Ok(())
    }

    /// Remove the persisted session. The last-used server URL is kept.
    pub fn clear(&self) -> Result<(), KurageError> {
        let path = self.dir.join(SESSION_FILE);
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Last server URL a login succeeded against.
    pub fn last_server_url(&self) -> Option<String> {
        let url = std::fs::read_to_string(self.dir.join(SERVER_URL_FILE)).ok()?;
        let url = url.trim().to_string();
        (!url.is_empty()).then_some(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Session {
        Session {
            user_id: "3fa85f64".into(),
            user_name: "alice".into(),
            access_token: "tok-123".into(),
            server_url: "http://jf.local:8096".into(),
            user_image_tag: Some("abc".into()),
        }
    }

    #[test]
    fn roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::with_dir(dir.path());
        assert!(store.load().is_none());

        store.save(&sample()).unwrap();
        assert_eq!(store.load(), Some(sample()));
        assert_eq!(
            store.last_server_url().as_deref(),
            Some("http://jf.local:8096")
        );
    }

    #[test]
    fn clear_keeps_server_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::with_dir(dir.path());
        store.save(&sample()).unwrap();
        store.clear().unwrap();
        assert!(store.load().is_none());
        assert!(store.last_server_url().is_some());
        // Clearing twice is fine.
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_session_reads_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE), "{not json").unwrap();
        let store = SessionStore::with_dir(dir.path());
        assert!(store.load().is_none());
    }
}
