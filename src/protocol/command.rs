//! Command definitions
//!
//! Represents outbound messages to the projector.

use crate::error::{PjlinkError, Result};
use super::codec::MAX_PARAMETER_LEN;
use super::vocab::CommandCode;

/// An outbound message: one command code, one parameter, one version digit
///
/// Built fresh per call, encoded once, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// 4-character command code from the fixed catalogue
    pub code: CommandCode,

    /// Command-specific parameter, at most 128 bytes, no CR
    pub parameter: String,

    /// Protocol version digit carried in the header
    pub version: u8,
}

impl Command {
    /// Create a command, enforcing the frame invariants
    ///
    /// Fails if the parameter exceeds 128 bytes or the version is not a
    /// digit the 1-byte header slot can carry.
    pub fn new(code: CommandCode, parameter: impl Into<String>, version: u8) -> Result<Self> {
        let parameter = parameter.into();

        if parameter.len() > MAX_PARAMETER_LEN {
            return Err(PjlinkError::ParameterTooLong(parameter.len()));
        }
        if !(1..=9).contains(&version) {
            return Err(PjlinkError::UnsupportedVersion(version));
        }

        Ok(Self {
            code,
            parameter,
            version,
        })
    }
}
