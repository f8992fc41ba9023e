//! Twitter API HTTP client.

use std::path::PathBuf;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{header, Client, Response};
use url::Url;

use crate::api::types::{parse_timeline_page, TimelinePage, TimelineQuery};
use crate::auth::{Credentials, OauthSigner};
use crate::download::media::{ByteStream, MediaFetcher};
use crate::error::{Error, Result};
use crate::timeline::TimelineSource;

/// Twitter v1.1 API base URL.
const API_BASE: &str = "https://api.twitter.com/1.1";

/// Twitter API client signing every request with single-legged OAuth1.
pub struct TwitterApi {
    client: Client,
    signer: Option<OauthSigner>,
    credentials_path: PathBuf,
}

impl TwitterApi {
    /// Create a new API client.
    ///
    /// `credentials` may be absent; requests will then fail with
    /// [`Error::CredentialMissing`] once signing is attempted.
    pub fn new(credentials: Option<Credentials>, credentials_path: PathBuf) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            signer: credentials.map(OauthSigner::new),
            credentials_path,
        })
    }

    fn signer(&self) -> Result<&OauthSigner> {
        self.signer
            .as_ref()
            .ok_or_else(|| Error::CredentialMissing(self.credentials_path.clone()))
    }

    /// Make a signed GET request.
    async fn get_signed(&self, url: Url) -> Result<Response> {
        let auth_header = self.signer()?.authorization_header("GET", &url, &[])?;

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, auth_header)
            .send()
            .await?;

        tracing::debug!("Response status: {}", response.status());

        Ok(response)
    }

    /// Fetch one page of a user's timeline.
    pub async fn user_timeline(&self, query: &TimelineQuery) -> Result<TimelinePage> {
        let mut url = Url::parse(&format!("{}/statuses/user_timeline.json", API_BASE))?;
        for (k, v) in query.query_pairs() {
            url.query_pairs_mut().append_pair(k, &v);
        }

        let response = self.get_signed(url).await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Error::Api(format!(
                "timeline request failed: HTTP {} - {}",
                status,
                truncate_on_char_boundary(&text, 200)
            )));
        }

        parse_timeline_page(&text)
    }

    /// Download an image file. Unsigned; media hosts take no OAuth.
    pub async fn fetch_image(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to fetch image: HTTP {}",
                response.status()
            )));
        }

        Ok(response)
    }
}

/// Truncate a body snippet for log output without splitting a UTF-8
/// sequence; error bodies can carry non-ASCII message text.
fn truncate_on_char_boundary(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[async_trait]
impl TimelineSource for TwitterApi {
    async fn fetch_page(&self, query: &TimelineQuery) -> Result<TimelinePage> {
        self.user_timeline(query).await
    }
}

#[async_trait]
impl MediaFetcher for TwitterApi {
    async fn fetch_stream(&self, url: &str) -> Result<ByteStream> {
        let response = self.fetch_image(url).await?;
        Ok(response
            .bytes_stream()
            .map(|chunk| match chunk {
                Ok(bytes) => Ok(bytes.to_vec()),
                Err(e) => Err(Error::Download(format!("Stream error: {}", e))),
            })
            .boxed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_on_char_boundary("short body", 200), "short body");
    }

    #[test]
    fn test_truncate_ascii_at_limit() {
        let text = "a".repeat(300);
        assert_eq!(truncate_on_char_boundary(&text, 200).len(), 200);
    }

    #[test]
    fn test_truncate_backs_off_multibyte_boundary() {
        // Two-byte character straddling the limit must not panic the
        // error path; the snippet backs off to the previous boundary.
        let mut text = "a".repeat(199);
        text.push('é');
        text.push_str(&"b".repeat(100));

        let snippet = truncate_on_char_boundary(&text, 200);
        assert_eq!(snippet, "a".repeat(199));
    }

    #[test]
    fn test_truncate_all_multibyte() {
        let text = "é".repeat(150);
        let snippet = truncate_on_char_boundary(&text, 199);
        assert_eq!(snippet.len(), 198);
        assert!(snippet.chars().all(|c| c == 'é'));
    }
}
