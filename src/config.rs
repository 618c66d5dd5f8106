//! Process configuration, parsed once at startup

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use clap::Parser;

/// pod-echo - reports this pod's identity together with every pod in the cluster
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "pod-echo")]
#[command(author, version, about, long_about = None)]
pub struct AppConfig {
    /// app server port
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// pod name
    #[arg(long = "pod_name", visible_alias = "pod-name", env = "POD_NAME", default_value = "")]
    pub pod_name: String,

    /// pod IP
    #[arg(long = "pod_ip", visible_alias = "pod-ip", env = "POD_IP", default_value = "")]
    pub pod_ip: String,

    /// Address the listener binds to
    #[arg(long, env = "BIND_ADDRESS", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind_address: IpAddr,

    /// Upper bound for the cluster pod list call, in seconds (unbounded when unset)
    #[arg(long, env = "LIST_TIMEOUT_SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub list_timeout_secs: Option<u64>,

    /// Print one echo snapshot as JSON and exit instead of serving
    #[arg(long)]
    pub once: bool,
}

impl AppConfig {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    pub fn list_timeout(&self) -> Option<Duration> {
        self.list_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            pod_name: String::new(),
            pod_ip: String::new(),
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            list_timeout_secs: None,
            once: false,
        }
    }
}
