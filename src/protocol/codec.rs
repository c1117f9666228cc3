//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ### Request Frame
//! ```text
//! ┌────────┬─────────────┬──────────────┬──────┬───────────┬──────┐
//! │ % (1)  │ version (1) │ command (4)  │ SP   │ parameter │ CR   │
//! └────────┴─────────────┴──────────────┴──────┴───────────┴──────┘
//! ```
//!
//! ### Reply Frame
//! ```text
//! ┌────────┬─────────────┬──────────────┬──────┬───────────┬──────┐
//! │ % (1)  │ version (1) │ command (4)  │ =    │ data      │ CR   │
//! └────────┴─────────────┴──────────────┴──────┴───────────┴──────┘
//! ```
//!
//! The only difference between the two is the separator byte at offset
//! 6: a space on the request path, an equals sign on the reply path.
//! No escaping exists; parameters must not contain the CR terminator.

use crate::error::{PjlinkError, Result};
use super::command::Command;
use super::response::Response;
use super::vocab::CommandCode;

/// Header marker byte opening every frame
pub const MARKER: u8 = b'%';

/// Frame terminator
pub const TERMINATOR: u8 = b'\r';

/// Separator between command code and parameter on the request path
pub const COMMAND_SEPARATOR: u8 = b' ';

/// Separator between command code and data on the reply path
pub const RESPONSE_SEPARATOR: u8 = b'=';

/// Minimum frame: marker + version + 4-char code + separator + terminator
pub const MIN_FRAME_LEN: usize = 8;

/// Maximum parameter length in bytes
pub const MAX_PARAMETER_LEN: usize = 128;

// =============================================================================
// Command Encoding/Decoding
// =============================================================================

/// Encode a command to its exact wire bytes
///
/// Deterministic and total: every `Command` (whose invariants are
/// enforced at construction) has exactly one encoding.
pub fn encode_command(command: &Command) -> Vec<u8> {
    encode_frame(
        command.code,
        &command.parameter,
        command.version,
        COMMAND_SEPARATOR,
    )
}

/// Decode a received line into a command
///
/// Used by simulators and tests; the live client only ever decodes
/// responses.
pub fn decode_command(frame: &[u8]) -> Result<Command> {
    let (code, body, version) = decode_frame(frame, COMMAND_SEPARATOR)?;
    Command::new(code, body, version)
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a response to its exact wire bytes
///
/// Primarily useful for fixtures and the simulator; devices produce
/// these frames in the live protocol.
pub fn encode_response(response: &Response) -> Vec<u8> {
    encode_frame(
        response.code,
        &response.data,
        response.version,
        RESPONSE_SEPARATOR,
    )
}

/// Decode a received line into a response
pub fn decode_response(frame: &[u8]) -> Result<Response> {
    let (code, body, version) = decode_frame(frame, RESPONSE_SEPARATOR)?;
    Ok(Response {
        code,
        version,
        data: body.to_string(),
    })
}

// =============================================================================
// Shared Frame Handling
// =============================================================================

/// Build a frame: `%<version><code><separator><body>\r`
fn encode_frame(code: CommandCode, body: &str, version: u8, separator: u8) -> Vec<u8> {
    let mut frame = Vec::with_capacity(MIN_FRAME_LEN + body.len());
    frame.push(MARKER);
    frame.push(b'0' + version);
    frame.extend_from_slice(code.as_wire().as_bytes());
    frame.push(separator);
    frame.extend_from_slice(body.as_bytes());
    frame.push(TERMINATOR);
    frame
}

/// Split a frame into (code, body, version), validating every fixed byte
///
/// Offsets: marker at 0, version digit at 1, code at 2..6, separator at
/// 6, body from 7 up to the trailing CR.
fn decode_frame(frame: &[u8], separator: u8) -> Result<(CommandCode, &str, u8)> {
    if frame.len() < MIN_FRAME_LEN {
        return Err(PjlinkError::MalformedFrame(format!(
            "frame too short: {} bytes (min {})",
            frame.len(),
            MIN_FRAME_LEN
        )));
    }

    if frame[0] != MARKER {
        return Err(PjlinkError::MalformedFrame(format!(
            "bad marker byte: 0x{:02x}",
            frame[0]
        )));
    }

    let version = match (frame[1] as char).to_digit(10) {
        Some(d) => d as u8,
        None => {
            return Err(PjlinkError::MalformedFrame(format!(
                "version byte is not a digit: 0x{:02x}",
                frame[1]
            )))
        }
    };

    let code = std::str::from_utf8(&frame[2..6])
        .ok()
        .and_then(CommandCode::from_wire)
        .ok_or_else(|| {
            PjlinkError::MalformedFrame(format!(
                "command code outside the catalogue: {:?}",
                String::from_utf8_lossy(&frame[2..6])
            ))
        })?;

    if frame[6] != separator {
        return Err(PjlinkError::MalformedFrame(format!(
            "missing separator: expected 0x{:02x}, got 0x{:02x}",
            separator, frame[6]
        )));
    }

    if frame[frame.len() - 1] != TERMINATOR {
        return Err(PjlinkError::MalformedFrame(
            "missing CR terminator".to_string(),
        ));
    }

    let body = std::str::from_utf8(&frame[7..frame.len() - 1]).map_err(|_| {
        PjlinkError::MalformedFrame("body contains non-UTF-8 bytes".to_string())
    })?;

    Ok((code, body, version))
}
