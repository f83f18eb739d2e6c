#[cfg(feature = "youtube_data_api")]
pub mod youtube;

use crate::config::{ApiConfig, SearchOptions, PAGE_SIZE, RELEVANCE_LANGUAGE};
use crate::error::CatalogError;
use crate::models::{SearchListResponse, VideoListResponse};
use chrono::{DateTime, SecondsFormat, Utc};
use url::Url;

/// Transport for the two YouTube Data API calls the catalog needs.
///
/// Implementations only move bytes: they render the request against their
/// [`ApiConfig`], send it, and decode the body or report why they could not.
#[allow(async_fn_in_trait)]
pub trait VideoApi {
    async fn search(&self, request: &SearchRequest) -> Result<SearchListResponse, CatalogError>;

    async fn videos(&self, request: &VideoLookupRequest)
        -> Result<VideoListResponse, CatalogError>;
}

/// One page of `search.list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub published_before: Option<DateTime<Utc>>,
    pub long_videos_only: bool,
    pub page_token: Option<String>,
}

impl SearchRequest {
    pub fn new(query: &str, options: &SearchOptions, page_token: Option<String>) -> Self {
        SearchRequest {
            query: query.to_string(),
            published_before: options.published_before,
            long_videos_only: options.long_videos_only(),
            page_token,
        }
    }

    pub fn query_pairs(&self, api_key: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("part", "snippet".to_string()),
            ("q", self.query.clone()),
            ("type", "video".to_string()),
            ("key", api_key.to_string()),
            ("maxResults", PAGE_SIZE.to_string()),
            ("relevanceLanguage", RELEVANCE_LANGUAGE.to_string()),
            ("safeSearch", "none".to_string()),
        ];

        if let Some(before) = self.published_before {
            params.push((
                "publishedBefore",
                before.to_rfc3339_opts(SecondsFormat::Millis, true),
            ));
        }
        // `publishedAfter` is supported by the API but deliberately never sent.
        if self.long_videos_only {
            params.push(("videoDuration", "long".to_string()));
        }
        if let Some(token) = &self.page_token {
            params.push(("pageToken", token.clone()));
        }

        params
    }

    pub fn url(&self, config: &ApiConfig) -> Result<Url, CatalogError> {
        let endpoint = format!("{}/search", config.base_url);
        Ok(Url::parse_with_params(
            &endpoint,
            self.query_pairs(&config.api_key),
        )?)
    }
}

/// One batch of `videos.list` for content details and statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoLookupRequest {
    pub ids: Vec<String>,
}

impl VideoLookupRequest {
    pub fn new(ids: Vec<String>) -> Self {
        VideoLookupRequest { ids }
    }

    pub fn query_pairs(&self, api_key: &str) -> Vec<(&'static str, String)> {
        vec![
            ("part", "contentDetails,statistics".to_string()),
            ("id", self.ids.join(",")),
            ("key", api_key.to_string()),
        ]
    }

    pub fn url(&self, config: &ApiConfig) -> Result<Url, CatalogError> {
        let endpoint = format!("{}/videos", config.base_url);
        Ok(Url::parse_with_params(
            &endpoint,
            self.query_pairs(&config.api_key),
        )?)
    }
}
