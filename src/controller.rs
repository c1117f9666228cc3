//! Controller
//!
//! The public operation surface. Every operation builds one command,
//! drives one transport round trip, decodes the reply, and interprets
//! it into a typed result.
//!
//! ## Interpretation rules
//! - Set-style operations return `true` iff the reply data is the
//!   acknowledgement token; an error token reads as `false`, not as a
//!   client failure.
//! - Query operations whose reply data does not have the promised width
//!   degrade to `None` rather than erroring, matching the protocol's
//!   convention of returning exactly the promised field width on
//!   success.
//! - Decode and transport failures propagate up uncaught; no swallowing,
//!   no fallback values, no retries.

use serde::Serialize;

use crate::config::Endpoint;
use crate::error::{PjlinkError, Result};
use crate::protocol::vocab::{
    CommandCode, InputNumber, InputType, MuteState, PowerCommand, PowerStatus, Severity, QUERY,
};
use crate::protocol::{decode_response, encode_command, Command, Response};
use crate::transport;

/// Audio/video mute snapshot from an AVMT query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MuteStatus {
    pub audio_muted: bool,
    pub video_muted: bool,
}

/// Per-subsystem severities from an ERST query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub fan: Severity,
    pub lamp: Severity,
    pub temperature: Severity,
    pub cover: Severity,
    pub other: Severity,
}

/// A command object for one projector endpoint
///
/// Stateless beyond the endpoint binding: every operation opens its own
/// connection and owns it exclusively for the duration of the call, so
/// concurrent calls from multiple holders are safe at the client level.
/// The device itself serializes commands; callers that need ordering
/// across many concurrent commands must serialize them.
#[derive(Debug, Clone)]
pub struct Controller {
    endpoint: Endpoint,
}

impl Controller {
    /// Bind a controller to a device endpoint
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    /// The bound endpoint
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    // =========================================================================
    // Power
    // =========================================================================

    /// Turn the projector on; true iff the device acknowledged
    pub fn power_on(&self) -> Result<bool> {
        let response = self.round_trip(CommandCode::Power, PowerCommand::On.as_wire())?;
        Ok(response.is_ack())
    }

    /// Turn the projector off; true iff the device acknowledged
    pub fn power_off(&self) -> Result<bool> {
        let response = self.round_trip(CommandCode::Power, PowerCommand::Off.as_wire())?;
        Ok(response.is_ack())
    }

    /// Query the instantaneous power state
    ///
    /// ERR3/ERR4 replies are valid degenerate statuses
    /// ([`PowerStatus::Unavailable`] / [`PowerStatus::Failure`]); a
    /// token outside the power vocabulary is an
    /// [`PjlinkError::UnexpectedReply`].
    pub fn query_power(&self) -> Result<PowerStatus> {
        let response = self.round_trip(CommandCode::Power, QUERY)?;
        PowerStatus::from_wire(&response.data)
            .ok_or(PjlinkError::UnexpectedReply(response.data))
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Select an input; true iff the device acknowledged
    pub fn set_input(&self, input_type: InputType, number: InputNumber) -> Result<bool> {
        let parameter = format!("{}{}", input_type.as_digit(), number.as_digit());
        let response = self.round_trip(CommandCode::Input, &parameter)?;
        Ok(response.is_ack())
    }

    /// Query the selected input
    ///
    /// `None` when the reply data is not exactly 2 characters or the
    /// digits fall outside the input catalogue.
    pub fn query_input(&self) -> Result<Option<(InputType, InputNumber)>> {
        let response = self.round_trip(CommandCode::Input, QUERY)?;
        let mut chars = response.data.chars();
        let selected = match (chars.next(), chars.next(), chars.next()) {
            (Some(t), Some(n), None) => {
                InputType::from_digit(t).zip(InputNumber::from_digit(n))
            }
            _ => None,
        };
        Ok(selected)
    }

    // =========================================================================
    // Mute
    // =========================================================================

    /// Set the audio/video mute state; true iff the device acknowledged
    pub fn set_mute(&self, state: MuteState) -> Result<bool> {
        let response = self.round_trip(CommandCode::Mute, state.as_wire())?;
        Ok(response.is_ack())
    }

    /// Query the audio/video mute state
    ///
    /// `None` when the reply data is not exactly 2 characters. Audio
    /// reads as muted for the audio-only and combined tokens, video
    /// analogously.
    pub fn query_mute(&self) -> Result<Option<MuteStatus>> {
        let response = self.round_trip(CommandCode::Mute, QUERY)?;
        if response.data.len() != 2 {
            return Ok(None);
        }
        let data = response.data.as_str();
        Ok(Some(MuteStatus {
            audio_muted: data == MuteState::AudioMuted.as_wire()
                || data == MuteState::AudioVideoMuted.as_wire(),
            video_muted: data == MuteState::VideoMuted.as_wire()
                || data == MuteState::AudioVideoMuted.as_wire(),
        }))
    }

    // =========================================================================
    // Error Status
    // =========================================================================

    /// Query the per-subsystem error severities
    ///
    /// `None` when the reply data is not exactly 5 characters, or when
    /// any character is outside the severity digits.
    pub fn query_error_status(&self) -> Result<Option<ErrorReport>> {
        let response = self.round_trip(CommandCode::ErrorStatus, QUERY)?;
        if response.data.len() != 5 {
            return Ok(None);
        }

        let mut severities = response.data.chars().map(Severity::from_digit);
        // Width checked above; five items are present.
        let report = severities
            .next()
            .flatten()
            .zip(severities.next().flatten())
            .zip(severities.next().flatten())
            .zip(severities.next().flatten())
            .zip(severities.next().flatten())
            .map(|((((fan, lamp), temperature), cover), other)| ErrorReport {
                fan,
                lamp,
                temperature,
                cover,
                other,
            });
        Ok(report)
    }

    // =========================================================================
    // Informational Queries
    // =========================================================================

    /// Query lamp hours and state, raw reply data
    pub fn query_lamp(&self) -> Result<String> {
        self.query_raw(CommandCode::Lamp)
    }

    /// Query the projector name, raw reply data
    pub fn query_name(&self) -> Result<String> {
        self.query_raw(CommandCode::Name)
    }

    /// Query the manufacturer name, raw reply data
    pub fn query_manufacturer(&self) -> Result<String> {
        self.query_raw(CommandCode::Manufacturer)
    }

    /// Query the product name, raw reply data
    pub fn query_product_name(&self) -> Result<String> {
        self.query_raw(CommandCode::ProductName)
    }

    /// Query other device info, raw reply data
    pub fn query_other_info(&self) -> Result<String> {
        self.query_raw(CommandCode::OtherInfo)
    }

    /// Query the protocol class, raw reply data
    pub fn query_class(&self) -> Result<String> {
        self.query_raw(CommandCode::Class)
    }

    fn query_raw(&self, code: CommandCode) -> Result<String> {
        let response = self.round_trip(code, QUERY)?;
        Ok(response.data)
    }

    // =========================================================================
    // Round Trip
    // =========================================================================

    /// Build, send, receive, decode: the one path every operation takes
    fn round_trip(&self, code: CommandCode, parameter: &str) -> Result<Response> {
        let command = Command::new(code, parameter, self.endpoint.version)?;
        let frame = encode_command(&command);
        tracing::debug!(
            "request to {}: {} {:?}",
            self.endpoint.addr(),
            code,
            parameter
        );

        let reply = transport::round_trip(&self.endpoint, &frame)?;
        let response = decode_response(&reply)?;
        tracing::debug!(
            "response from {}: {} {:?}",
            self.endpoint.addr(),
            response.code,
            response.data
        );
        Ok(response)
    }
}
