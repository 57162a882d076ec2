//! Transport layer protocol implementation
//!
//! This module contains the UDP header codec. UDP is the only transport
//! this crate speaks.

pub mod udp;

// Re-export commonly used items
pub use udp::{UdpHeader, UDP_HEADER_LEN};
