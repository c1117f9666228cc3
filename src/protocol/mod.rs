//! Protocol Module
//!
//! Defines the PJLink wire protocol: vocabulary, message shapes, and
//! the codec.
//!
//! ## Protocol Format (line-oriented, one frame per connection)
//!
//! ### Request
//! ```text
//! %<version-digit><4-char-command><space><parameter><CR>
//! ```
//!
//! ### Reply
//! ```text
//! %<version-digit><4-char-command>=<data><CR>
//! ```
//!
//! ### Reply data
//! - "OK": command accepted and applied
//! - a compact status code (e.g. "2" for cooling, "31" for A/V mute on)
//! - "ERR1".."ERR4": device-side rejection, returned as ordinary data

mod command;
mod response;
mod codec;
pub mod vocab;

pub use command::Command;
pub use response::Response;
pub use codec::{
    decode_command, decode_response, encode_command, encode_response,
    MAX_PARAMETER_LEN, MIN_FRAME_LEN,
};
