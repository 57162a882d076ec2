//! IPv4 header codec
//!
//! Explicit field-by-field encode/decode of the standard 20-byte IPv4
//! header, using fixed byte offsets and big-endian conversion rather
//! than overlaying a packed struct onto raw memory.

use byteorder::{BigEndian, ByteOrder};

use crate::error::CodecError;

/// Length of an IPv4 header without options
pub const IPV4_HEADER_LEN: usize = 20;
pub const IPV4_VERSION: u8 = 4;
const DEFAULT_IHL: u8 = 5; // 5 * 4 = 20 bytes (no options)

/// Hop count written into outgoing frames
pub const DEFAULT_TTL: u8 = 63;

/// IP protocol numbers
pub mod protocol {
    pub const UDP: u8 = 17;
}

/// IPv4 packet header structure
///
/// Represents the standard IPv4 header as defined in RFC 791.
#[derive(Debug, Clone)]
pub struct Ipv4Header {
    pub version: u8,
    pub ihl: u8, // Internet Header Length, in 32-bit words
    pub tos: u8, // Type of Service
    pub total_len: u16,
    pub id: u16,
    pub flags_frag_offset: u16, // Flags and Fragment Offset
    pub ttl: u8,                // Time to Live
    pub protocol: u8,           // Next Protocol
    pub checksum: u16,
    pub src_addr: [u8; 4], // Source IP Address
    pub dst_addr: [u8; 4], // Destination IP Address
}

impl Ipv4Header {
    /// Create a header for an outgoing UDP datagram
    ///
    /// Minimal 20-byte form: no options, no fragmentation, TTL 63.
    /// The checksum field starts at zero and is filled in after the
    /// header bytes have been serialized.
    pub fn new_udp(total_len: u16, id: u16, src_addr: [u8; 4], dst_addr: [u8; 4]) -> Self {
        Ipv4Header {
            version: IPV4_VERSION,
            ihl: DEFAULT_IHL,
            tos: 0,
            total_len,
            id,
            flags_frag_offset: 0,
            ttl: DEFAULT_TTL,
            protocol: protocol::UDP,
            checksum: 0, // Computed over the serialized header
            src_addr,
            dst_addr,
        }
    }

    /// Parse an IPv4 header from a byte slice
    ///
    /// Rejects inputs shorter than the minimal 20-byte header and inputs
    /// whose version nibble is not 4. Headers with options (`ihl > 5`)
    /// parse fine; the option bytes are skipped via [`header_len`].
    ///
    /// [`header_len`]: Ipv4Header::header_len
    pub fn from_bytes(data: &[u8]) -> Result<Self, CodecError> {
        if data.len() < IPV4_HEADER_LEN {
            return Err(CodecError::Truncated {
                needed: IPV4_HEADER_LEN,
                len: data.len(),
            });
        }

        let version = (data[0] & 0xF0) >> 4;
        if version != IPV4_VERSION {
            return Err(CodecError::NotIpv4 { version });
        }

        Ok(Ipv4Header {
            version,
            ihl: data[0] & 0x0F,
            tos: data[1],
            total_len: BigEndian::read_u16(&data[2..4]),
            id: BigEndian::read_u16(&data[4..6]),
            flags_frag_offset: BigEndian::read_u16(&data[6..8]),
            ttl: data[8],
            protocol: data[9],
            checksum: BigEndian::read_u16(&data[10..12]),
            src_addr: data[12..16].try_into().unwrap(),
            dst_addr: data[16..20].try_into().unwrap(),
        })
    }

    /// Convert the IPv4 header to bytes
    ///
    /// Serializes to the minimal 20-byte wire form. Option bytes are
    /// never emitted, whatever `ihl` says.
    pub fn to_bytes(&self) -> [u8; IPV4_HEADER_LEN] {
        let mut bytes = [0u8; IPV4_HEADER_LEN];
        bytes[0] = (self.version << 4) | self.ihl;
        bytes[1] = self.tos;
        BigEndian::write_u16(&mut bytes[2..4], self.total_len);
        BigEndian::write_u16(&mut bytes[4..6], self.id);
        BigEndian::write_u16(&mut bytes[6..8], self.flags_frag_offset);
        bytes[8] = self.ttl;
        bytes[9] = self.protocol;
        BigEndian::write_u16(&mut bytes[10..12], self.checksum);
        bytes[12..16].copy_from_slice(&self.src_addr);
        bytes[16..20].copy_from_slice(&self.dst_addr);

        bytes
    }

    /// Get the header length in bytes
    pub fn header_len(&self) -> usize {
        (self.ihl as usize) * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_fidelity() {
        let header = Ipv4Header::new_udp(32, 7, [10, 0, 0, 1], [10, 0, 0, 2]);
        let bytes = header.to_bytes();
        assert_eq!(bytes[0], 0x45);
        assert_eq!(bytes[8], DEFAULT_TTL);
        assert_eq!(bytes[9], protocol::UDP);

        let decoded = Ipv4Header::from_bytes(&bytes).unwrap();
        assert_eq!(decoded.total_len, 32);
        assert_eq!(decoded.id, 7);
        assert_eq!(decoded.src_addr, [10, 0, 0, 1]);
        assert_eq!(decoded.dst_addr, [10, 0, 0, 2]);
        assert_eq!(decoded.header_len(), 20);
    }

    #[test]
    fn test_rejects_short_input() {
        let err = Ipv4Header::from_bytes(&[0x45; 19]).unwrap_err();
        assert!(matches!(err, CodecError::Truncated { len: 19, .. }));
    }

    #[test]
    fn test_rejects_non_v4() {
        let mut bytes = [0u8; 20];
        bytes[0] = 0x60; // IPv6 version nibble
        let err = Ipv4Header::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, CodecError::NotIpv4 { version: 6 }));
    }
}
