use serde::Deserialize;

use crate::client::ApiError;

/// Health-check interface for API clients.
pub trait HealthCheck: Send + Sync {
    /// Returns `Ok(true)` if the API is healthy, `Ok(false)` if it responded
    /// but reported an unhealthy state, or `Err` on connection failure.
    fn is_healthy(&self) -> impl std::future::Future<Output = Result<bool, ApiError>> + Send;
}

/// Payload of `GET /api/health`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
}

impl HealthStatus {
    /// A 2xx answer whose payload reports `success: true`.
    pub fn is_healthy(&self, status: u16) -> bool {
        (200..300).contains(&status) && self.success
    }
}
