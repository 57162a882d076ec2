//! UDP (User Datagram Protocol) header codec

use byteorder::{BigEndian, ByteOrder};

/// UDP header length in bytes
pub const UDP_HEADER_LEN: usize = 8;

/// UDP packet header structure
///
/// Represents the standard 8-byte UDP header as defined in RFC 768.
/// The checksum field is always written as zero on outgoing frames
/// ("no checksum", permitted for UDP over IPv4) and ignored on receive.
#[derive(Debug, Clone, Copy)]
pub struct UdpHeader {
    pub src_port: u16,
    pub dst_port: u16,
    pub length: u16, // Length of UDP header and data
    pub checksum: u16,
}

impl UdpHeader {
    /// Parse a UDP header from a byte slice
    ///
    /// Returns None if the data is too short to contain a UDP header.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < UDP_HEADER_LEN {
            return None;
        }

        Some(UdpHeader {
            src_port: BigEndian::read_u16(&data[0..2]),
            dst_port: BigEndian::read_u16(&data[2..4]),
            length: BigEndian::read_u16(&data[4..6]),
            checksum: BigEndian::read_u16(&data[6..8]),
        })
    }

    /// Convert the UDP header to bytes
    pub fn to_bytes(&self) -> [u8; UDP_HEADER_LEN] {
        let mut bytes = [0u8; UDP_HEADER_LEN];
        BigEndian::write_u16(&mut bytes[0..2], self.src_port);
        BigEndian::write_u16(&mut bytes[2..4], self.dst_port);
        BigEndian::write_u16(&mut bytes[4..6], self.length);
        BigEndian::write_u16(&mut bytes[6..8], self.checksum);
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        let bytes = [0x30, 0x39, 0x00, 0x35, 0x00, 0x0C, 0x00, 0x00];
        let header = UdpHeader::from_bytes(&bytes).unwrap();
        assert_eq!(header.src_port, 12345);
        assert_eq!(header.dst_port, 53);
        assert_eq!(header.length, 12);
        assert_eq!(header.checksum, 0);
    }

    #[test]
    fn test_short_input() {
        assert!(UdpHeader::from_bytes(&[0u8; 7]).is_none());
    }
}
