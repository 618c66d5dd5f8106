use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::client::pod_source::{KubePodSource, PodSource};
use crate::core::net::host_address::{HostAddressResolver, InterfaceAddressResolver};
use crate::domain::echo::service::echo_service::EchoService;

#[derive(Clone)]
pub struct AppState {
    pub echo_service: Arc<EchoService>,
}

impl AppState {
    pub fn new(
        config: Arc<AppConfig>,
        pods: Arc<dyn PodSource>,
        host: Arc<dyn HostAddressResolver>,
    ) -> Self {
        Self {
            echo_service: Arc::new(EchoService::new(config, pods, host)),
        }
    }
}

/// Wires the production cluster and interface sources around the parsed config
pub fn build_app_state(config: AppConfig) -> AppState {
    let pods = KubePodSource::new(config.list_timeout());
    AppState::new(Arc::new(config), Arc::new(pods), Arc::new(InterfaceAddressResolver))
}
