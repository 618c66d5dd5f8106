//! In-memory stand-ins for the cluster and the host network

use std::io;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Barrier;

use crate::app_state::AppState;
use crate::config::AppConfig;
use crate::core::client::error::ClusterError;
use crate::core::client::pod_source::PodSource;
use crate::core::net::host_address::HostAddressResolver;
use crate::domain::echo::model::PodSummary;

pub struct FakePodSource {
    result: Result<Vec<PodSummary>, ClusterError>,
}

impl FakePodSource {
    pub fn pods(pods: &[(&str, &str)]) -> Self {
        Self {
            result: Ok(pods.iter().map(|(n, ip)| PodSummary::new(*n, *ip)).collect()),
        }
    }

    pub fn failing(err: ClusterError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl PodSource for FakePodSource {
    async fn list_pods(&self) -> Result<Vec<PodSummary>, ClusterError> {
        // Yield so concurrent requests actually interleave
        tokio::task::yield_now().await;
        self.result.clone()
    }
}

/// Hands out a different pod list per call and holds every call at a barrier
/// until `lists.len()` calls are in flight together.
pub struct InterleavedPodSource {
    lists: Vec<Vec<PodSummary>>,
    calls: AtomicUsize,
    barrier: Barrier,
}

impl InterleavedPodSource {
    pub fn new(lists: &[&[(&str, &str)]]) -> Self {
        Self {
            lists: lists
                .iter()
                .map(|pods| pods.iter().map(|(n, ip)| PodSummary::new(*n, *ip)).collect())
                .collect(),
            calls: AtomicUsize::new(0),
            barrier: Barrier::new(lists.len()),
        }
    }
}

#[async_trait]
impl PodSource for InterleavedPodSource {
    async fn list_pods(&self) -> Result<Vec<PodSummary>, ClusterError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.barrier.wait().await;
        Ok(self.lists[call].clone())
    }
}

pub struct FixedHostAddresses(Vec<IpAddr>);

impl FixedHostAddresses {
    pub fn new(addrs: &[&str]) -> Self {
        Self(addrs.iter().map(|a| a.parse().unwrap()).collect())
    }
}

impl HostAddressResolver for FixedHostAddresses {
    fn interface_addrs(&self) -> io::Result<Vec<IpAddr>> {
        Ok(self.0.clone())
    }
}

pub struct FailingHostAddresses;

impl HostAddressResolver for FailingHostAddresses {
    fn interface_addrs(&self) -> io::Result<Vec<IpAddr>> {
        Err(io::Error::other("getifaddrs unavailable"))
    }
}

pub fn app_state<P: PodSource + 'static>(config: AppConfig, pods: P, host: &[&str]) -> AppState {
    AppState::new(
        Arc::new(config),
        Arc::new(pods),
        Arc::new(FixedHostAddresses::new(host)),
    )
}
