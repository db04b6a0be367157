//! Peer discovery bootstrap data.

use std::net::{IpAddr, Ipv6Addr, SocketAddr};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

/// Fixed seed record: IPv6 (or IPv4-mapped) address and port.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    pub const fn ipv4(a: u8, b: u8, c: u8, d: u8, port: u16) -> Self {
        Self {
            addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d],
            port,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        let ip = Ipv6Addr::from(self.addr);
        match ip.to_ipv4_mapped() {
            Some(v4) => SocketAddr::new(IpAddr::V4(v4), self.port),
            None => SocketAddr::new(IpAddr::V6(ip), self.port),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_mapped_record() {
        let seed = SeedSpec6::ipv4(47, 52, 45, 101, 19_683);
        assert_eq!(seed.socket_addr().to_string(), "47.52.45.101:19683");
    }

    #[test]
    fn native_ipv6_record() {
        let mut addr = [0u8; 16];
        addr[0] = 0x20;
        addr[1] = 0x01;
        addr[15] = 0x01;
        let seed = SeedSpec6 { addr, port: 18_683 };
        assert_eq!(seed.socket_addr().to_string(), "[2001::1]:18683");
    }
}
