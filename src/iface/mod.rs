//! TUN interface collaborator
//!
//! Device acquisition and raw packet I/O. The codec itself never sees
//! the device; these helpers glue the two together for callers running
//! a simple read/parse/build/write pump.

pub mod tun;

// Re-export commonly used items
pub use tun::TunDevice;
