use crate::env_variable_utils::API_CONFIG;
use gloo_net::http::{Request, Response};
use tube_catalog::models::{SearchListResponse, VideoListResponse};
use tube_catalog::{
    ApiConfig, Catalog, CatalogError, Record, SearchOptions, SearchRequest, VideoApi,
    VideoLookupRequest,
};

/// [`VideoApi`] over the browser's fetch.
#[derive(Debug, Clone)]
pub struct GlooApi {
    config: ApiConfig,
}

impl GlooApi {
    pub fn new(config: ApiConfig) -> Self {
        GlooApi { config }
    }

    pub fn from_env() -> Self {
        GlooApi::new(API_CONFIG.clone())
    }
}

impl VideoApi for GlooApi {
    async fn search(&self, request: &SearchRequest) -> Result<SearchListResponse, CatalogError> {
        let url = request.url(&self.config)?;
        let response = send(url.as_str()).await?;
        response
            .json::<SearchListResponse>()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }

    async fn videos(
        &self,
        request: &VideoLookupRequest,
    ) -> Result<VideoListResponse, CatalogError> {
        let url = request.url(&self.config)?;
        let response = send(url.as_str()).await?;
        response
            .json::<VideoListResponse>()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

async fn send(url: &str) -> Result<Response, CatalogError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| CatalogError::Transport(e.to_string()))?;

    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(CatalogError::Http { status, body })
    }
}

/// Everything the result list needs from one finished search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub records: Vec<Record>,
    pub unresolved: usize,
}

/// Run one query in its own catalog: fetch, enrich, then sort and filter.
pub async fn execute_search(
    api: &GlooApi,
    query: &str,
    options: &SearchOptions,
) -> Result<SearchOutcome, CatalogError> {
    let mut catalog = Catalog::new();
    catalog.search(api, query, options).await?;
    catalog.sort_and_filter(options.min_duration_seconds);

    // Counted after filtering, so it matches what the list shows.
    let unresolved = catalog.unresolved_count();
    Ok(SearchOutcome {
        records: catalog.into_records(),
        unresolved,
    })
}
