use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::dto::echo_dto::EchoResponse;
use crate::config::AppConfig;
use crate::core::client::error::ClusterError;
use crate::core::client::pod_source::PodSource;
use crate::core::net::host_address::HostAddressResolver;

/// Builds the echo snapshot: configured identity, cluster pods, host address
pub struct EchoService {
    config: Arc<AppConfig>,
    pods: Arc<dyn PodSource>,
    host: Arc<dyn HostAddressResolver>,
}

impl EchoService {
    pub fn new(
        config: Arc<AppConfig>,
        pods: Arc<dyn PodSource>,
        host: Arc<dyn HostAddressResolver>,
    ) -> Self {
        Self { config, pods, host }
    }

    pub async fn echo(&self) -> Result<EchoResponse, ClusterError> {
        let pods = self.pods.list_pods().await?;
        let pod_infos: Vec<String> = pods.iter().map(ToString::to_string).collect();
        let host_ip = self.resolve_host_ip();

        debug!(pods = pod_infos.len(), host_ip = %host_ip, "Echo snapshot built");

        Ok(EchoResponse {
            port: self.config.port,
            pod_name: self.config.pod_name.clone(),
            pod_ip: self.config.pod_ip.clone(),
            pod_infos,
            host_ip,
        })
    }

    /// Never fails the request; an unknown host address is reported as "".
    fn resolve_host_ip(&self) -> String {
        match self.host.host_ip() {
            Ok(Some(ip)) => ip.to_string(),
            Ok(None) => {
                debug!("No non-loopback interface address found");
                String::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to enumerate interface addresses");
                String::new()
            }
        }
    }
}
