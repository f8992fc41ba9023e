//! API response type definitions.

use serde::Deserialize;

use crate::error::{Error, Result};

/// A tweet from the user timeline.
#[derive(Debug, Clone, Deserialize)]
pub struct Tweet {
    pub id_str: String,
    #[serde(default)]
    pub entities: Option<Entities>,
    #[serde(default)]
    pub extended_entities: Option<Entities>,
}

/// Entity block carrying media attachments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entities {
    #[serde(default)]
    pub media: Option<Vec<MediaEntity>>,
}

/// A single media attachment.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaEntity {
    pub media_url_https: String,
}

impl Tweet {
    /// Extract the image URLs carried by this tweet, in API order.
    ///
    /// `extended_entities` holds the full attachment list when a tweet has
    /// multiple images; plain `entities` only ever exposes the first one.
    /// Tweets without media contribute nothing.
    pub fn image_urls(&self) -> Vec<String> {
        if let Some(media) = self
            .extended_entities
            .as_ref()
            .and_then(|e| e.media.as_ref())
        {
            return media.iter().map(|m| m.media_url_https.clone()).collect();
        }

        if let Some(media) = self.entities.as_ref().and_then(|e| e.media.as_ref()) {
            return media
                .first()
                .map(|m| vec![m.media_url_https.clone()])
                .unwrap_or_default();
        }

        Vec::new()
    }
}

/// Query parameters for one timeline page request.
#[derive(Debug, Clone)]
pub struct TimelineQuery {
    pub screen_name: String,
    pub count: u32,
    /// Watermark: only tweets newer than this ID are requested.
    pub since_id: Option<String>,
    /// Pagination cursor for follow-up pages.
    pub max_id: Option<String>,
}

impl TimelineQuery {
    pub fn new(screen_name: &str, count: u32, since_id: Option<String>) -> Self {
        Self {
            screen_name: screen_name.to_string(),
            count,
            since_id,
            max_id: None,
        }
    }

    /// Query pairs in request order; absent optional params are omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("screen_name", self.screen_name.clone()),
            ("count", self.count.to_string()),
            ("exclude_replies", "true".to_string()),
            ("include_rts", "false".to_string()),
            ("trim_user", "true".to_string()),
        ];
        if let Some(since_id) = &self.since_id {
            pairs.push(("since_id", since_id.clone()));
        }
        if let Some(max_id) = &self.max_id {
            pairs.push(("max_id", max_id.clone()));
        }
        pairs
    }
}

/// One parsed timeline response.
#[derive(Debug, Clone, Default)]
pub struct TimelinePage {
    pub tweets: Vec<Tweet>,
    /// Cursor for the next page, when the response carries one.
    pub next_cursor: Option<String>,
}

/// Parse a timeline response body.
///
/// `user_timeline` responds with a bare JSON array of tweets. A non-array
/// body is malformed (typically an API error object) and reported as such;
/// the caller treats it as a terminal page.
pub fn parse_timeline_page(body: &str) -> Result<TimelinePage> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| Error::MalformedResponse(format!("body is not JSON: {}", e)))?;

    if !value.is_array() {
        return Err(Error::MalformedResponse(
            "body is not a tweet sequence".to_string(),
        ));
    }

    // NOTE: user_timeline returns a bare array that never carries
    // next_cursor_str; the field belongs to the cursored API family
    // (followers/ids, friends/ids). Reading it here means a scan ends after
    // the first page in practice. Deliberate; see DESIGN.md before changing
    // where the cursor comes from.
    let next_cursor = value
        .get("next_cursor_str")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string());

    let tweets: Vec<Tweet> = serde_json::from_value(value)
        .map_err(|e| Error::MalformedResponse(format!("unexpected tweet shape: {}", e)))?;

    Ok(TimelinePage {
        tweets,
        next_cursor,
    })
}
