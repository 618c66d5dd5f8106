use kube::{Client, Config};
use tracing::debug;

use crate::core::client::error::ClusterError;

/// Resolves the service-account credentials mounted into the running pod.
///
/// Only the in-cluster environment is consulted; there is no kubeconfig fallback.
pub fn resolve_incluster_config() -> Result<Config, ClusterError> {
    let config = Config::incluster().map_err(|e| ClusterError::Config(e.to_string()))?;

    debug!(cluster_url = %config.cluster_url, "Resolved in-cluster configuration");
    Ok(config)
}

/// Creates a Kubernetes client from an already resolved configuration
pub fn build_kube_client(config: Config) -> Result<Client, ClusterError> {
    let client = Client::try_from(config).map_err(|e| ClusterError::Client(e.to_string()))?;

    debug!("Kubernetes client initialized successfully");
    Ok(client)
}
