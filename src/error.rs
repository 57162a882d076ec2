use thiserror::Error;

/// Failures produced by the packet codec itself.
///
/// Parse-side rejections are transient: the frame was not for us (wrong
/// version, wrong protocol, truncated) and the read loop should discard
/// it and continue. Build-side failures indicate a violated caller
/// precondition and should not be retried as-is.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("not an IPv4 packet (version {version})")]
    NotIpv4 { version: u8 },

    #[error("not a UDP packet (protocol {protocol})")]
    NotUdp { protocol: u8 },

    #[error("truncated frame: need {needed} bytes, got {len}")]
    Truncated { needed: usize, len: usize },

    #[error("output buffer too small: need {needed} bytes, capacity {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },

    #[error("unsupported address family, only IPv4 endpoints can be sent")]
    UnsupportedAddressFamily,

    #[error("payload of {len} bytes does not fit a single datagram")]
    PayloadTooLarge { len: usize },
}

impl CodecError {
    /// True for receive-path rejections a read loop should skip over.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            CodecError::NotIpv4 { .. } | CodecError::NotUdp { .. } | CodecError::Truncated { .. }
        )
    }
}

/// Crate-level error for operations that touch the TUN device.
///
/// Device failures propagate unchanged; the codec never retries or
/// suppresses them.
#[derive(Debug, Error)]
pub enum Error {
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
