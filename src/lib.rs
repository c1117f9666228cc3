//! # pjlink
//!
//! A PJLink projector control client:
//! - Closed vocabulary of command codes and reply tokens
//! - Line-oriented command/response codec (bit-exact wire frames)
//! - One connect-write-read-close TCP round trip per command
//! - Typed operation surface (power, input, mute, error status)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Controller                              │
//! │        (power / input / mute / error status ops)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Codec                                  │
//! │        (encode command line / decode reply line)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Transport                                │
//! │        (one TCP connection per command, 15s timeout)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!                  Projector :4352
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod transport;
pub mod controller;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{PjlinkError, Result};
pub use config::{Endpoint, DEFAULT_PORT};
pub use controller::{Controller, ErrorReport, MuteStatus};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the pjlink crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
