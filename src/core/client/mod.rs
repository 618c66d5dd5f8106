// Kube-rs based Kubernetes client
pub mod error;
pub mod kube_client;
pub mod kube_resources;
pub mod mappers;
pub mod pod_source;
pub mod pods;
