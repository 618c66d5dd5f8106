/// Maps k8s-openapi types → internal domain models
use crate::core::client::kube_resources::Pod;
use crate::domain::echo::model::PodSummary;

/// Converts a Pod into its (name, reported IP) pair.
///
/// Pods without a name or without an assigned IP yet map to empty strings.
pub fn map_pod_to_summary(pod: &Pod) -> PodSummary {
    let name = pod.metadata.name.clone().unwrap_or_default();
    let ip = pod
        .status
        .as_ref()
        .and_then(|s| s.pod_ip.clone())
        .unwrap_or_default();

    PodSummary { name, ip }
}
