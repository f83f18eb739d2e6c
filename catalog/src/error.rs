use thiserror::Error;

/// Failures that abort a search or an enrichment pass.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("YouTube API returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("search result is missing `{0}`")]
    MissingField(&'static str),

    #[error("invalid publish date `{0}`")]
    InvalidDate(String),

    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
}

#[cfg(feature = "youtube_data_api")]
impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else {
            CatalogError::Transport(err.to_string())
        }
    }
}

/// Why a single video could not be enriched. Stored on the record, never propagated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnrichmentError {
    #[error("video has no content details")]
    MissingContentDetails,

    #[error("malformed duration `{0}`")]
    MalformedDuration(String),

    #[error("statistic `{field}` is not a number: `{value}`")]
    InvalidStatistic { field: &'static str, value: String },
}
