// Backend API trait for dashboard data access
use crate::domain::payload::{DashboardPayload, RefreshReport};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error! status: {status} ({endpoint})")]
    Http { endpoint: String, status: u16 },
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("response from {endpoint} is not valid JSON: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Backend resources that serve a single slice of the aggregate payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadSection {
    Company,
    Competitors,
    Trends,
    News,
    App,
    Traffic,
}

impl PayloadSection {
    pub const ALL: [PayloadSection; 6] = [
        PayloadSection::Company,
        PayloadSection::Competitors,
        PayloadSection::Trends,
        PayloadSection::News,
        PayloadSection::App,
        PayloadSection::Traffic,
    ];

    pub fn path(self) -> &'static str {
        match self {
            PayloadSection::Company => "/company",
            PayloadSection::Competitors => "/competitors",
            PayloadSection::Trends => "/trends",
            PayloadSection::News => "/news",
            PayloadSection::App => "/app",
            PayloadSection::Traffic => "/traffic",
        }
    }
}

/// One operation per backend resource. Section endpoints return a subset of
/// the aggregate payload, so they share its type.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Aggregate payload with every section
    async fn all_data(&self) -> ApiResult<DashboardPayload>;

    async fn company(&self) -> ApiResult<DashboardPayload>;

    async fn competitors(&self) -> ApiResult<DashboardPayload>;

    async fn trends(&self) -> ApiResult<DashboardPayload>;

    async fn news(&self) -> ApiResult<DashboardPayload>;

    async fn app(&self) -> ApiResult<DashboardPayload>;

    /// Traffic and YouTube blobs; not rendered by any view
    async fn traffic(&self) -> ApiResult<DashboardPayload>;

    /// Ask the backend to re-run its data fetch
    async fn refresh(&self) -> ApiResult<RefreshReport>;
}
