// Backend API client implementation
use crate::application::dashboard_api::{ApiError, ApiResult, DashboardApi};
use crate::domain::payload::{DashboardPayload, RefreshReport};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` is the backend origin; `api_prefix` is joined in front of every resource path
    pub fn new(base_url: &str, api_prefix: &str) -> Self {
        let prefix = api_prefix.trim_matches('/');
        let origin = base_url.trim_end_matches('/');
        let base_url = if prefix.is_empty() {
            origin.to_string()
        } else {
            format!("{}/{}", origin, prefix)
        };

        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        let result = self.execute(endpoint).await;
        if let Err(e) = &result {
            tracing::error!("Error fetching {}: {}", endpoint, e);
        }
        result
    }

    async fn execute<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        let url = self.endpoint_url(endpoint);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(ApiError::Http {
                endpoint: endpoint.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.json::<T>().await.map_err(|source| ApiError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

#[async_trait]
impl DashboardApi for ApiClient {
    async fn all_data(&self) -> ApiResult<DashboardPayload> {
        self.fetch("/data").await
    }

    async fn company(&self) -> ApiResult<DashboardPayload> {
        self.fetch("/company").await
    }

    async fn competitors(&self) -> ApiResult<DashboardPayload> {
        self.fetch("/competitors").await
    }

    async fn trends(&self) -> ApiResult<DashboardPayload> {
        self.fetch("/trends").await
    }

    async fn news(&self) -> ApiResult<DashboardPayload> {
        self.fetch("/news").await
    }

    async fn app(&self) -> ApiResult<DashboardPayload> {
        self.fetch("/app").await
    }

    async fn traffic(&self) -> ApiResult<DashboardPayload> {
        self.fetch("/traffic").await
    }

    async fn refresh(&self) -> ApiResult<RefreshReport> {
        self.fetch("/refresh").await
    }
}
