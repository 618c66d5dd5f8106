use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

use crate::core::client::error::ClusterError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cluster configuration unavailable: {0}")]
    ClusterConfigError(String),

    #[error("Cluster client error: {0}")]
    ClusterClientError(String),

    #[error("K8s API error: {0}")]
    K8sApiError(String),

    #[error("K8s API timed out after {0}s")]
    K8sApiTimeout(u64),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ClusterConfigError(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::ClusterClientError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::K8sApiError(_) => StatusCode::BAD_GATEWAY,
            AppError::K8sApiTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<ClusterError> for AppError {
    fn from(err: ClusterError) -> Self {
        match err {
            ClusterError::Config(msg) => AppError::ClusterConfigError(msg),
            ClusterError::Client(msg) => AppError::ClusterClientError(msg),
            ClusterError::Api(msg) => AppError::K8sApiError(msg),
            ClusterError::Timeout(secs) => AppError::K8sApiTimeout(secs),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();

        // Failure bodies carry a single `err` field and nothing else
        let body = Json(json!({
            "err": self.to_string()
        }));

        (status, body).into_response()
    }
}
