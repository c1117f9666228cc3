//! Response definitions
//!
//! Represents inbound messages from the projector.

use super::vocab::{CommandCode, ErrorToken, ACK};

/// An inbound message: the echoed command code, a version digit, and
/// the reply data
///
/// Data is one of: the acknowledgement token, a compact status code, or
/// one of the four error tokens. Decoded from exactly one received
/// line and discarded once interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Command code echoed back from the request
    pub code: CommandCode,

    /// Protocol version digit from the header
    pub version: u8,

    /// Reply data, exactly as received (error tokens included)
    pub data: String,
}

impl Response {
    /// True iff the data is the acknowledgement token
    pub fn is_ack(&self) -> bool {
        self.data == ACK
    }

    /// The error token, if the device replied with one
    pub fn error_token(&self) -> Option<ErrorToken> {
        ErrorToken::from_wire(&self.data)
    }
}
