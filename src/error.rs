//! Error types for the PJLink client
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using PjlinkError
pub type Result<T> = std::result::Result<T, PjlinkError>;

/// Unified error type for PJLink operations
#[derive(Debug, Error)]
pub enum PjlinkError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    /// Connect failure, timeout, or read/write I/O error. The socket is
    /// closed before this surfaces.
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// The peer closed the connection without sending any bytes.
    /// Distinct from a malformed frame: the failure point is the peer
    /// closing cleanly, not the peer sending garbage.
    #[error("peer closed the connection without replying")]
    EmptyReply,

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    /// A received line is shorter than the minimum valid frame, or its
    /// header, separator, or terminator is not where the protocol puts it.
    #[error("malformed frame: {0}")]
    MalformedFrame(String),

    /// The reply decoded cleanly but its data is outside the vocabulary
    /// the operation expects (e.g. an unknown power-status token).
    #[error("unexpected reply data: {0:?}")]
    UnexpectedReply(String),

    // -------------------------------------------------------------------------
    // Command Construction Errors
    // -------------------------------------------------------------------------
    /// Command parameter exceeds the 128-byte protocol limit.
    #[error("parameter too long: {0} bytes (max 128)")]
    ParameterTooLong(usize),

    /// Protocol version outside the single-digit range the frame header
    /// can carry.
    #[error("unsupported protocol version: {0} (must be 1-9)")]
    UnsupportedVersion(u8),
}
