//! Protocol vocabulary
//!
//! The closed catalogue of command codes, parameter values, and
//! response tokens defined by the PJLink wire protocol. Every other
//! module references these symbolically; no raw wire strings appear
//! outside this file.

use std::fmt;

use serde::Serialize;

/// Acknowledgement token: the reply meaning "command accepted and applied"
pub const ACK: &str = "OK";

/// Query parameter shared by every `?`-style command
pub const QUERY: &str = "?";

// =============================================================================
// Command Codes
// =============================================================================

/// The 4-character command codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandCode {
    /// POWR: power on/off/query
    Power,
    /// INPT: input selection
    Input,
    /// AVMT: audio/video mute
    Mute,
    /// ERST: error status query
    ErrorStatus,
    /// LAMP: lamp hours and state query
    Lamp,
    /// NAME: projector name query
    Name,
    /// INF1: manufacturer name query
    Manufacturer,
    /// INF2: product name query
    ProductName,
    /// INFO: other info query
    OtherInfo,
    /// CLSS: protocol class query
    Class,
}

impl CommandCode {
    /// The exact 4 ASCII characters sent on the wire
    pub const fn as_wire(self) -> &'static str {
        match self {
            CommandCode::Power => "POWR",
            CommandCode::Input => "INPT",
            CommandCode::Mute => "AVMT",
            CommandCode::ErrorStatus => "ERST",
            CommandCode::Lamp => "LAMP",
            CommandCode::Name => "NAME",
            CommandCode::Manufacturer => "INF1",
            CommandCode::ProductName => "INF2",
            CommandCode::OtherInfo => "INFO",
            CommandCode::Class => "CLSS",
        }
    }

    /// Parse a 4-character wire code back into the catalogue
    pub fn from_wire(code: &str) -> Option<Self> {
        match code {
            "POWR" => Some(CommandCode::Power),
            "INPT" => Some(CommandCode::Input),
            "AVMT" => Some(CommandCode::Mute),
            "ERST" => Some(CommandCode::ErrorStatus),
            "LAMP" => Some(CommandCode::Lamp),
            "NAME" => Some(CommandCode::Name),
            "INF1" => Some(CommandCode::Manufacturer),
            "INF2" => Some(CommandCode::ProductName),
            "INFO" => Some(CommandCode::OtherInfo),
            "CLSS" => Some(CommandCode::Class),
            _ => None,
        }
    }
}

impl fmt::Display for CommandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

// =============================================================================
// Power
// =============================================================================

/// Parameter values for a POWR set command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerCommand {
    On,
    Off,
}

impl PowerCommand {
    pub const fn as_wire(self) -> &'static str {
        match self {
            PowerCommand::On => "1",
            PowerCommand::Off => "0",
        }
    }
}

/// Instantaneous power state reported by a POWR query
///
/// The projector owns the state machine (off -> warm-up -> on ->
/// cooling -> off); the client only decodes the snapshot it is handed.
/// ERR3/ERR4 are degenerate statuses the device may return in place of
/// a state digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PowerStatus {
    Off,
    On,
    Cooling,
    WarmUp,
    /// ERR3: unavailable at this time
    Unavailable,
    /// ERR4: projector/display failure
    Failure,
}

impl PowerStatus {
    pub const fn as_wire(self) -> &'static str {
        match self {
            PowerStatus::Off => "0",
            PowerStatus::On => "1",
            PowerStatus::Cooling => "2",
            PowerStatus::WarmUp => "3",
            PowerStatus::Unavailable => "ERR3",
            PowerStatus::Failure => "ERR4",
        }
    }

    pub fn from_wire(data: &str) -> Option<Self> {
        match data {
            "0" => Some(PowerStatus::Off),
            "1" => Some(PowerStatus::On),
            "2" => Some(PowerStatus::Cooling),
            "3" => Some(PowerStatus::WarmUp),
            "ERR3" => Some(PowerStatus::Unavailable),
            "ERR4" => Some(PowerStatus::Failure),
            _ => None,
        }
    }
}

// =============================================================================
// Input
// =============================================================================

/// The 5 input source classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputType {
    Rgb,
    Video,
    Digital,
    Storage,
    Network,
}

impl InputType {
    /// The single wire digit for this source class
    pub const fn as_digit(self) -> char {
        match self {
            InputType::Rgb => '1',
            InputType::Video => '2',
            InputType::Digital => '3',
            InputType::Storage => '4',
            InputType::Network => '5',
        }
    }

    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(InputType::Rgb),
            '2' => Some(InputType::Video),
            '3' => Some(InputType::Digital),
            '4' => Some(InputType::Storage),
            '5' => Some(InputType::Network),
            _ => None,
        }
    }
}

/// An input number within a source class: a digit 1-9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InputNumber(u8);

impl Default for InputNumber {
    /// Input 1, the number every source class has
    fn default() -> Self {
        InputNumber(1)
    }
}

impl InputNumber {
    /// Create an input number; `None` outside 1-9
    pub fn new(number: u8) -> Option<Self> {
        (1..=9).contains(&number).then_some(InputNumber(number))
    }

    pub fn from_digit(digit: char) -> Option<Self> {
        digit.to_digit(10).and_then(|d| InputNumber::new(d as u8))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// The single wire digit for this input number
    pub fn as_digit(self) -> char {
        (b'0' + self.0) as char
    }
}

// =============================================================================
// Mute
// =============================================================================

/// Parameter values for an AVMT set command, and the tokens an AVMT
/// query echoes back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuteState {
    VideoMuted,
    VideoUnmuted,
    AudioMuted,
    AudioUnmuted,
    AudioVideoMuted,
    AudioVideoUnmuted,
}

impl MuteState {
    pub const fn as_wire(self) -> &'static str {
        match self {
            MuteState::VideoMuted => "11",
            MuteState::VideoUnmuted => "10",
            MuteState::AudioMuted => "21",
            MuteState::AudioUnmuted => "20",
            MuteState::AudioVideoMuted => "31",
            MuteState::AudioVideoUnmuted => "30",
        }
    }
}

// =============================================================================
// Error Tokens
// =============================================================================

/// The 4 fixed reply values meaning the device rejected or could not
/// service the command
///
/// These arrive as ordinary response payloads, not client faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorToken {
    /// ERR1: undefined command
    UndefinedCommand,
    /// ERR2: parameter out of range
    OutOfParameter,
    /// ERR3: unavailable at this time
    Unavailable,
    /// ERR4: projector/display failure
    DeviceFailure,
}

impl ErrorToken {
    pub const fn as_wire(self) -> &'static str {
        match self {
            ErrorToken::UndefinedCommand => "ERR1",
            ErrorToken::OutOfParameter => "ERR2",
            ErrorToken::Unavailable => "ERR3",
            ErrorToken::DeviceFailure => "ERR4",
        }
    }

    pub fn from_wire(data: &str) -> Option<Self> {
        match data {
            "ERR1" => Some(ErrorToken::UndefinedCommand),
            "ERR2" => Some(ErrorToken::OutOfParameter),
            "ERR3" => Some(ErrorToken::Unavailable),
            "ERR4" => Some(ErrorToken::DeviceFailure),
            _ => None,
        }
    }
}

// =============================================================================
// Severity
// =============================================================================

/// Per-subsystem severity digit in an ERST reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Ok,
    Warning,
    Error,
}

impl Severity {
    pub const fn as_digit(self) -> char {
        match self {
            Severity::Ok => '0',
            Severity::Warning => '1',
            Severity::Error => '2',
        }
    }

    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(Severity::Ok),
            '1' => Some(Severity::Warning),
            '2' => Some(Severity::Error),
            _ => None,
        }
    }
}
