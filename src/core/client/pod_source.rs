use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::core::client::error::ClusterError;
use crate::core::client::kube_client::{build_kube_client, resolve_incluster_config};
use crate::core::client::mappers::map_pod_to_summary;
use crate::core::client::pods::fetch_pods;
use crate::domain::echo::model::PodSummary;

/// Anything able to produce the current pod list of a cluster
#[async_trait]
pub trait PodSource: Send + Sync {
    async fn list_pods(&self) -> Result<Vec<PodSummary>, ClusterError>;
}

/// Lists pods through the cluster API using the pod's own service account.
///
/// Credentials and the client are rebuilt on every call.
#[derive(Debug, Clone, Default)]
pub struct KubePodSource {
    list_timeout: Option<Duration>,
}

impl KubePodSource {
    pub fn new(list_timeout: Option<Duration>) -> Self {
        Self { list_timeout }
    }
}

#[async_trait]
impl PodSource for KubePodSource {
    async fn list_pods(&self) -> Result<Vec<PodSummary>, ClusterError> {
        let config = resolve_incluster_config()?;
        let client = build_kube_client(config)?;
        let pods = fetch_pods(&client, self.list_timeout).await?;

        let summaries: Vec<PodSummary> = pods.iter().map(map_pod_to_summary).collect();
        debug!("Mapped {} pod summaries", summaries.len());
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_fails_before_any_api_call_when_not_in_cluster() {
        if std::env::var("KUBERNETES_SERVICE_HOST").is_ok() {
            return;
        }

        let err = KubePodSource::default().list_pods().await.unwrap_err();
        assert!(matches!(err, ClusterError::Config(_)));
    }
}
