//! Echo API DTOs

use serde::Serialize;

/// Body of a successful `GET /echo`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EchoResponse {
    pub port: u16,
    #[serde(rename = "podName")]
    pub pod_name: String,
    #[serde(rename = "podIP")]
    pub pod_ip: String,
    #[serde(rename = "podInfos")]
    pub pod_infos: Vec<String>,
    #[serde(rename = "hostIP")]
    pub host_ip: String,
}
