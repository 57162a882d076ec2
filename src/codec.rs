//! IPv4/UDP datagram codec
//!
//! The two core operations: [`parse`] decodes a raw IPv4 frame into a
//! pair of endpoints and a borrowed payload slice, [`build`] encodes
//! endpoints plus payload into a self-consistent IPv4+UDP frame.
//!
//! The codec is stateless. The IPv4 identification counter is owned by
//! the caller: [`build`] takes the current value and returns the next
//! one alongside the frame length, so the state dependency is visible
//! in the signature instead of hiding behind a shared integer.

use std::fmt;

use byteorder::{BigEndian, ByteOrder};
use tracing::trace;

use crate::error::CodecError;
use crate::network::{checksum, protocol, Ipv4Header, IPV4_HEADER_LEN};
use crate::transport::{UdpHeader, UDP_HEADER_LEN};

/// An IP address, either family
///
/// Only V4 endpoints can be encoded; V6 exists so callers handing us an
/// address of the wrong family get a typed rejection instead of a
/// silent misencode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpAddr {
    V4([u8; 4]),
    V6([u8; 16]),
}

/// One side of a UDP exchange: an IP address plus a port
///
/// The same type serves as source and destination; the role is decided
/// by parameter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub addr: IpAddr,
    pub port: u16,
}

impl Endpoint {
    pub fn new(addr: IpAddr, port: u16) -> Self {
        Endpoint { addr, port }
    }

    /// IPv4 endpoint from four octets and a port
    pub fn v4(addr: [u8; 4], port: u16) -> Self {
        Endpoint {
            addr: IpAddr::V4(addr),
            port,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.addr {
            IpAddr::V4([a, b, c, d]) => write!(f, "{}.{}.{}.{}:{}", a, b, c, d, self.port),
            IpAddr::V6(_) => write!(f, "[ipv6]:{}", self.port),
        }
    }
}

/// A decoded UDP datagram
///
/// The payload borrows from the frame passed to [`parse`]; nothing is
/// copied and nothing is retained past the call.
#[derive(Debug, PartialEq, Eq)]
pub struct Datagram<'a> {
    pub src: Endpoint,
    pub dst: Endpoint,
    pub payload: &'a [u8],
}

/// Parse a raw IPv4 frame into a UDP datagram
///
/// `frame` must be exactly the bytes returned by one read from the
/// interface. Validation, in order, each a hard rejection:
///
/// 1. long enough for a minimal 20-byte IPv4 header;
/// 2. version nibble is 4;
/// 3. protocol is UDP;
/// 4. the payload offset (IHL-derived header length plus the 8-byte UDP
///    header) lies within the frame.
///
/// The header length comes from the IHL nibble, so frames carrying IP
/// options parse fine and the option bytes are skipped; the transmit
/// path never emits options. Neither the IPv4 header checksum nor the
/// UDP checksum is verified: on a controlled point-to-point link the
/// permissive receive path is a deliberate choice, not an oversight.
pub fn parse(frame: &[u8]) -> Result<Datagram<'_>, CodecError> {
    trace!(len = frame.len(), "rx frame {}", hex_dump(frame));

    let ip = Ipv4Header::from_bytes(frame)?;
    if ip.protocol != protocol::UDP {
        return Err(CodecError::NotUdp {
            protocol: ip.protocol,
        });
    }

    let offset = ip.header_len() + UDP_HEADER_LEN;
    if offset > frame.len() {
        return Err(CodecError::Truncated {
            needed: offset,
            len: frame.len(),
        });
    }

    // The offset check above guarantees at least 8 bytes past the IP header.
    let udp = UdpHeader::from_bytes(&frame[ip.header_len()..]).ok_or(CodecError::Truncated {
        needed: offset,
        len: frame.len(),
    })?;

    let src = Endpoint::v4(ip.src_addr, udp.src_port);
    let dst = Endpoint::v4(ip.dst_addr, udp.dst_port);
    let payload = &frame[offset..];

    trace!(
        ihl = ip.ihl,
        total_len = ip.total_len,
        ttl = ip.ttl,
        udp_len = udp.length,
        "rx {} -> {} payload {} bytes",
        src,
        dst,
        payload.len()
    );

    Ok(Datagram { src, dst, payload })
}

/// Encode a UDP datagram into `buf` as a raw IPv4 frame
///
/// `id` is the caller's packet-identifier counter; the current value
/// goes into the IPv4 identification field and the wrapped successor is
/// returned with the frame length. On success the first
/// `20 + 8 + payload.len()` bytes of `buf` form a self-consistent
/// IPv4/UDP datagram: minimal header, TTL 63, UDP checksum zero
/// ("no checksum", as UDP over IPv4 allows).
///
/// All preconditions are checked before the first byte is written, so a
/// failed build leaves `buf` untouched.
pub fn build(
    buf: &mut [u8],
    src: &Endpoint,
    dst: &Endpoint,
    payload: &[u8],
    id: u16,
) -> Result<(usize, u16), CodecError> {
    let (src_addr, dst_addr) = match (src.addr, dst.addr) {
        (IpAddr::V4(s), IpAddr::V4(d)) => (s, d),
        _ => return Err(CodecError::UnsupportedAddressFamily),
    };

    if payload.len() > u16::MAX as usize - IPV4_HEADER_LEN - UDP_HEADER_LEN {
        return Err(CodecError::PayloadTooLarge { len: payload.len() });
    }

    let frame_len = IPV4_HEADER_LEN + UDP_HEADER_LEN + payload.len();
    if buf.len() < frame_len {
        return Err(CodecError::BufferTooSmall {
            needed: frame_len,
            capacity: buf.len(),
        });
    }

    let ip = Ipv4Header::new_udp(frame_len as u16, id, src_addr, dst_addr);
    buf[..IPV4_HEADER_LEN].copy_from_slice(&ip.to_bytes());

    let udp = UdpHeader {
        src_port: src.port,
        dst_port: dst.port,
        length: (UDP_HEADER_LEN + payload.len()) as u16,
        checksum: 0,
    };
    buf[IPV4_HEADER_LEN..IPV4_HEADER_LEN + UDP_HEADER_LEN].copy_from_slice(&udp.to_bytes());
    buf[IPV4_HEADER_LEN + UDP_HEADER_LEN..frame_len].copy_from_slice(payload);

    // Header checksum over exactly the 20 header bytes, patched in place
    let sum = checksum(&buf[..IPV4_HEADER_LEN]);
    BigEndian::write_u16(&mut buf[10..12], sum);

    trace!(
        len = frame_len,
        id,
        "tx {} -> {}: {}",
        src,
        dst,
        hex_dump(&buf[..frame_len])
    );

    Ok((frame_len, id.wrapping_add(1)))
}

fn hex_dump(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}
