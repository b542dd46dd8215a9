use reqwest::Client;

use super::types::{TitleKind, TmdbDetails};
use crate::jellyfin::images::clean_url;

const APPEND: &str = "external_ids,credits,videos,watch/providers";

/// Enrichment client. Talks to the `/tmdb/{movie|tv}/{id}` proxy path on
/// the configured host; failures are swallowed — the overlay simply
/// renders without the enrichment-dependent sections.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    proxy_base: String,
    language: String,
    http: Client,
}

impl TmdbClient {
    pub fn new(proxy_base: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            proxy_base: proxy_base.into(),
            language: language.into(),
            http: Client::new(),
        }
    }

    /// The region used for watch-provider availability.
    pub fn region(&self) -> String {
        self.language.to_uppercase()
    }

    /// Fetch the enrichment record for an external id, or `None` on any
    /// failure.
    pub async fn fetch_details(&self, kind: TitleKind, tmdb_id: &str) -> Option<TmdbDetails> {
        let base = clean_url(&self.proxy_base);
        let url = format!("{base}/tmdb/{}/{tmdb_id}", kind.as_str());
        let resp = self
            .http
            .get(&url)
            .query(&[("language", self.language.as_str()), ("append_to_response", APPEND)])
            .send()
            .await;

        match resp {
            Ok(resp) if resp.status().is_success() => match resp.json::<TmdbDetails>().await {
                Ok(details) => Some(details),
                Err(e) => {
                    tracing::debug!("Enrichment parse failed: {e}");
                    None
                }
            },
            Ok(resp) => {
                tracing::debug!(status = resp.status().as_u16(), "Enrichment refused");
                None
            }
            Err(e) => {
                tracing::debug!("Enrichment fetch failed: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_is_uppercased_language() {
        let client = TmdbClient::new("http://jf.local", "fr");
        assert_eq!(client.region(), "FR");
    }
}
