use crate::error::CatalogError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use log::warn;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Key baked in at build time, used when the page does not inject one.
pub const BUILD_API_KEY: Option<&str> = option_env!("YOUTUBE_API_KEY");

/// Results per search page, the API maximum.
pub const PAGE_SIZE: u32 = 50;
/// Ids per video lookup, the API maximum.
pub const LOOKUP_BATCH_SIZE: usize = 50;
pub const RELEVANCE_LANGUAGE: &str = "pl";
/// From this many minutes on, the search asks the server for `videoDuration=long` only.
pub const LONG_VIDEO_MINUTES: u32 = 20;
pub const DEFAULT_PAGE_LIMIT: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_key: String,
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        ApiConfig {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

/// The option inputs exactly as the form holds them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSearchOptions {
    pub published_before: String,
    pub min_duration: String,
    pub page_count: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub published_before: Option<DateTime<Utc>>,
    /// Minimum duration in whole seconds; `None` disables the duration filter.
    pub min_duration_seconds: Option<u64>,
    pub page_limit: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            published_before: None,
            min_duration_seconds: None,
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl SearchOptions {
    /// Only a non-empty publish date that cannot be read is an error; unreadable
    /// numbers fall back to "no filter" and a single page.
    pub fn parse(raw: &RawSearchOptions) -> Result<Self, CatalogError> {
        Ok(SearchOptions {
            published_before: parse_published_before(&raw.published_before)?,
            min_duration_seconds: parse_min_duration(&raw.min_duration),
            page_limit: parse_page_limit(&raw.page_count),
        })
    }

    pub fn long_videos_only(&self) -> bool {
        self.min_duration_seconds
            .is_some_and(|seconds| seconds >= u64::from(LONG_VIDEO_MINUTES) * 60)
    }
}

/// Accepts RFC 3339, a datetime-local value (`2024-01-31T18:30`) or a plain date,
/// the latter two read as UTC.
fn parse_published_before(raw: &str) -> Result<Option<DateTime<Utc>>, CatalogError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(datetime.with_timezone(&Utc)));
    }
    for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(Some(naive.and_utc()));
        }
    }
    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(Some(midnight.and_utc()));
    }

    Err(CatalogError::InvalidDate(raw.to_string()))
}

/// Minutes may be fractional; the threshold is truncated to whole seconds.
fn parse_min_duration(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(minutes) if minutes.is_finite() && minutes >= 0.0 => {
            Some((minutes * 60.0).trunc() as u64)
        }
        _ => {
            warn!("Ignoring minimum duration '{raw}': not a non-negative number of minutes");
            None
        }
    }
}

fn parse_page_limit(raw: &str) -> u32 {
    let raw = raw.trim();
    match raw.parse::<u32>() {
        Ok(limit) if limit > 0 => limit,
        _ => {
            if !raw.is_empty() {
                warn!("Invalid page count '{raw}', fetching {DEFAULT_PAGE_LIMIT} page");
            }
            DEFAULT_PAGE_LIMIT
        }
    }
}
