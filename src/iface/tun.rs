//! TUN device wrapper
//!
//! One read yields exactly one raw IP packet and one write transmits
//! exactly one; there is no framing or buffering across calls. Device
//! errors propagate unchanged.

use std::io;

use tun_tap::{Iface, Mode};

use crate::codec::{self, Datagram, Endpoint};
use crate::error::Error;

/// A TUN virtual point-to-point interface
///
/// Opened in TUN mode without the packet-information prefix, so the
/// bytes exchanged are raw IP packets. Address assignment, link state
/// and any further interface flags are left to the OS tooling.
pub struct TunDevice {
    iface: Iface,
}

impl TunDevice {
    /// Open the named TUN interface
    pub fn open(name: &str) -> io::Result<Self> {
        let iface = Iface::without_packet_info(name, Mode::Tun)?;
        Ok(TunDevice { iface })
    }

    /// Name the interface actually got
    pub fn name(&self) -> &str {
        self.iface.name()
    }

    /// Read one raw IP packet into `buf`, returning its length
    pub fn recv(&self, buf: &mut [u8]) -> io::Result<usize> {
        self.iface.recv(buf)
    }

    /// Write one raw IP packet
    pub fn send(&self, frame: &[u8]) -> io::Result<usize> {
        self.iface.send(frame)
    }

    /// Read one packet and decode it as a UDP datagram
    ///
    /// Transient codec rejections (not IPv4, not UDP, truncated) come
    /// back as [`Error::Codec`]; the read loop should discard those and
    /// keep reading. The datagram's payload borrows from `buf`.
    pub fn recv_udp<'a>(&self, buf: &'a mut [u8]) -> Result<Datagram<'a>, Error> {
        let n = self.iface.recv(buf)?;
        let datagram = codec::parse(&buf[..n])?;
        Ok(datagram)
    }

    /// Encode a UDP datagram into `buf` and transmit it
    ///
    /// Returns the byte count reported by the device write and the next
    /// packet-identifier value for the caller to thread forward.
    pub fn send_udp(
        &self,
        buf: &mut [u8],
        src: &Endpoint,
        dst: &Endpoint,
        payload: &[u8],
        id: u16,
    ) -> Result<(usize, u16), Error> {
        let (len, next_id) = codec::build(buf, src, dst, payload, id)?;
        let written = self.iface.send(&buf[..len])?;
        Ok((written, next_id))
    }
}
