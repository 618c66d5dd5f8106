/// Re-export the Kubernetes resource types this service reads
pub use k8s_openapi::api::core::v1::{Pod, PodStatus};

pub use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
