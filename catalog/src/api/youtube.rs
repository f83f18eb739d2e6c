use crate::api::{SearchRequest, VideoApi, VideoLookupRequest};
use crate::config::ApiConfig;
use crate::error::CatalogError;
use crate::models::{SearchListResponse, VideoListResponse};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

/// [`VideoApi`] over `reqwest`, for native callers.
#[derive(Debug, Clone)]
pub struct ReqwestApi {
    client: Client,
    config: ApiConfig,
}

impl ReqwestApi {
    pub fn new(config: ApiConfig) -> Self {
        ReqwestApi {
            client: Client::new(),
            config,
        }
    }

    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        ReqwestApi { client, config }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        debug!("GET {}{}", url.origin().ascii_serialization(), url.path());

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

impl VideoApi for ReqwestApi {
    async fn search(&self, request: &SearchRequest) -> Result<SearchListResponse, CatalogError> {
        self.get_json(request.url(&self.config)?).await
    }

    async fn videos(
        &self,
        request: &VideoLookupRequest,
    ) -> Result<VideoListResponse, CatalogError> {
        self.get_json(request.url(&self.config)?).await
    }
}
