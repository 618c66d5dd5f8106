use thiserror::Error;

/// Failures on the way from ambient credentials to a pod list.
///
/// Messages are captured as strings so fakes can produce every kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClusterError {
    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Client(String),

    #[error("{0}")]
    Api(String),

    #[error("list call exceeded {0}s")]
    Timeout(u64),
}

impl ClusterError {
    /// Short label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ClusterError::Config(_) => "config",
            ClusterError::Client(_) => "client",
            ClusterError::Api(_) => "api",
            ClusterError::Timeout(_) => "timeout",
        }
    }
}
