//! Search the YouTube Data API, look up durations and statistics for the results,
//! and keep the long videos.
//!
//! [`Catalog`] drives the pipeline against any [`VideoApi`] transport: a
//! `reqwest` one ships behind the `youtube_data_api` feature, the browser
//! frontend brings its own.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod record;
pub mod services;
pub mod utils;

pub use api::{SearchRequest, VideoApi, VideoLookupRequest};
#[cfg(feature = "youtube_data_api")]
pub use api::youtube::ReqwestApi;
pub use config::{ApiConfig, RawSearchOptions, SearchOptions};
pub use error::{CatalogError, EnrichmentError};
pub use record::{Age, EnrichmentStatus, Hms, Record, VideoDuration};
pub use services::catalog::{Catalog, EnrichmentReport};
