//! Local network address discovery.

use std::io;
use std::net::{IpAddr, UdpSocket};

/// External address the probe socket connects to. A UDP connect only records
/// the routing decision; no datagram is ever sent.
const PROBE_TARGET: &str = "8.8.8.8:80";

// Discovers this machine's LAN address by asking the OS which interface
// would be used to reach `target`. The socket closes on every path.
fn probe(target: &str) -> io::Result<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.connect(target)?;
    let addr = socket.local_addr()?;
    Ok(addr.ip())
}

/// Discovered address as a string, or `fallback` if discovery fails for any
/// reason (no network, no route, sandboxed environment).
pub fn local_ip_or(fallback: &str) -> String {
    local_ip_via(PROBE_TARGET, fallback)
}

fn local_ip_via(target: &str, fallback: &str) -> String {
    match probe(target) {
        Ok(ip) => ip.to_string(),
        Err(e) => {
            tracing::debug!("local IP discovery failed ({}), using {}", e, fallback);
            fallback.to_string()
        }
    }
}

/// Base URL other devices on the network can use to reach a server on `port`.
pub fn public_url(port: u16, fallback: &str) -> String {
    format!("http://{}:{}", local_ip_or(fallback), port)
}
