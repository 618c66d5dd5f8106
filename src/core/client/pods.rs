use std::time::Duration;

use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::error::ClusterError;
use crate::core::client::kube_resources::Pod;

/// Fetch all pods in the cluster, across every namespace.
///
/// A single unfiltered list call; `continue` tokens are not followed.
pub async fn fetch_pods(client: &Client, timeout: Option<Duration>) -> Result<Vec<Pod>, ClusterError> {
    let pods: Api<Pod> = Api::all(client.clone());
    let params = ListParams::default();
    let list = pods.list(&params);

    let pod_list = match timeout {
        Some(limit) => tokio::time::timeout(limit, list)
            .await
            .map_err(|_| ClusterError::Timeout(limit.as_secs()))?,
        None => list.await,
    }
    .map_err(|e| ClusterError::Api(e.to_string()))?;

    debug!("Discovered {} pod(s)", pod_list.items.len());
    Ok(pod_list.items)
}
