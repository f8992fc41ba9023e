//! Timeline scanning logic.
//!
//! Walks a user's timeline page by page, collecting image URLs for every
//! tweet newer than the stored watermark. The loop is modeled as an explicit
//! state machine so its termination conditions stay auditable:
//!
//! `Requesting -> Parsing -> Requesting | Done`
//!
//! Transport failures end the scan early, keeping whatever was collected so
//! far but reverting the watermark; credential errors are the one class that
//! propagates, since no request can be signed without them.

use async_trait::async_trait;

use crate::api::types::{TimelinePage, TimelineQuery};
use crate::error::{Error, Result};
use crate::tweet_id::{compare_ids, IdOrdering};

/// Source of timeline pages. The HTTP client implements this; tests
/// substitute canned pages.
#[async_trait]
pub trait TimelineSource {
    async fn fetch_page(&self, query: &TimelineQuery) -> Result<TimelinePage>;
}

/// Outcome of one timeline scan.
#[derive(Debug, Clone)]
pub struct TimelineScan {
    /// Image URLs in the order the API returned them.
    pub image_urls: Vec<String>,
    /// Watermark after the scan. Equal to the input watermark unless the
    /// scan completed and found newer tweets.
    pub watermark: Option<String>,
    /// Whether the scan ran to a clean terminal page. Incomplete scans must
    /// not advance the persisted watermark.
    pub complete: bool,
}

enum FetchState {
    Requesting { first_page: bool },
    Parsing { page: TimelinePage, first_page: bool },
    Done { complete: bool },
}

/// Collect image URLs for all tweets newer than `watermark`.
pub async fn fetch_new_images<S: TimelineSource + Sync>(
    source: &S,
    account: &str,
    page_size: u32,
    watermark: Option<String>,
) -> Result<TimelineScan> {
    let mut query = TimelineQuery::new(account, page_size, watermark.clone());
    let mut image_urls: Vec<String> = Vec::new();
    let mut scanned_watermark = watermark.clone();
    let mut state = FetchState::Requesting { first_page: true };

    loop {
        state = match state {
            FetchState::Requesting { first_page } => match source.fetch_page(&query).await {
                Ok(page) => FetchState::Parsing { page, first_page },
                Err(e) if e.is_credential_error() => return Err(e),
                Err(Error::MalformedResponse(msg)) => {
                    // A non-sequence body ends the walk cleanly; only
                    // transport failures mark the scan incomplete.
                    tracing::warn!("Stopping scan on malformed response: {}", msg);
                    FetchState::Done { complete: true }
                }
                Err(e) => {
                    tracing::error!("Timeline request failed: {}", e);
                    FetchState::Done { complete: false }
                }
            },

            FetchState::Parsing { page, first_page } => {
                if page.tweets.is_empty() {
                    FetchState::Done { complete: true }
                } else {
                    // Only the first tweet of the first page can be the
                    // globally newest item of this scan; later pages are
                    // strictly older under since_id/max_id semantics.
                    if first_page {
                        let newest = &page.tweets[0].id_str;
                        let replaces = match &scanned_watermark {
                            None => true,
                            Some(current) => {
                                compare_ids(newest, current) == IdOrdering::LeftLarger
                            }
                        };
                        if replaces {
                            tracing::debug!("Watermark advances to {}", newest);
                            scanned_watermark = Some(newest.clone());
                        }
                    }

                    for tweet in &page.tweets {
                        image_urls.extend(tweet.image_urls());
                    }

                    match page.next_cursor {
                        Some(cursor) => {
                            query.max_id = Some(cursor);
                            FetchState::Requesting { first_page: false }
                        }
                        None => FetchState::Done { complete: true },
                    }
                }
            }

            FetchState::Done { complete } => {
                return Ok(TimelineScan {
                    image_urls,
                    watermark: if complete { scanned_watermark } else { watermark },
                    complete,
                });
            }
        };
    }
}
