use std::io;
use std::net::IpAddr;

/// Source of the addresses assigned to this host's interfaces
pub trait HostAddressResolver: Send + Sync {
    fn interface_addrs(&self) -> io::Result<Vec<IpAddr>>;

    /// First non-loopback interface address, if any.
    fn host_ip(&self) -> io::Result<Option<IpAddr>> {
        Ok(first_non_loopback(self.interface_addrs()?))
    }
}

/// Enumerates local interfaces through `getifaddrs` (or the platform equivalent)
#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceAddressResolver;

impl HostAddressResolver for InterfaceAddressResolver {
    fn interface_addrs(&self) -> io::Result<Vec<IpAddr>> {
        Ok(if_addrs::get_if_addrs()?
            .into_iter()
            .map(|iface| iface.ip())
            .collect())
    }
}

/// Picks the first address that is not a loopback address, keeping enumeration order.
pub fn first_non_loopback<I>(addrs: I) -> Option<IpAddr>
where
    I: IntoIterator<Item = IpAddr>,
{
    addrs.into_iter().find(|ip| !ip.is_loopback())
}
