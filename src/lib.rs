//! A minimal IPv4/UDP datagram codec for TUN devices
//!
//! This library lets an application speak raw UDP datagrams over a TUN
//! virtual interface without an OS-managed socket:
//! - parse raw IPv4 frames into endpoints plus a borrowed payload
//! - build well-formed IPv4+UDP frames ready for transmission
//! - Internet checksum for the IPv4 header
//! - a thin TUN device wrapper for the read/write pump

pub mod codec;
pub mod error;
pub mod iface;
pub mod network;
pub mod transport;

// Re-export commonly used types
pub use codec::{build, parse, Datagram, Endpoint, IpAddr};
pub use error::{CodecError, Error};
pub use iface::tun::TunDevice;
pub use network::checksum;
