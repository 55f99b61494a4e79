//! Error types for packet decoding.
//!
//! Every failure the decoder can produce is a [`DecodeError`]. Errors are returned to the
//! immediate caller and are terminal for the buffer that produced them: the decoder never
//! logs them, retries, or substitutes a default record.
//!
//! ## Error Categories
//!
//! - **TooShort**: the buffer cannot hold the bytes the layout needs (usually the header)
//! - **UnknownSchema**: the `(format, version, kind)` triple is not a registered layout
//! - **SizeMismatch**: the schema resolved but the buffer is not exactly the schema's size
//! - **UnknownEventCode**: an event packet carried a code outside the eleven known codes
//!
//! ```rust
//! use f1_telemetry_2020::{DecodeError, decode};
//!
//! let error = decode(&[0u8; 10]).unwrap_err();
//! assert!(matches!(error, DecodeError::TooShort { actual: 10, required: 24 }));
//! assert!(!error.is_retryable());
//! for suggestion in error.recovery_suggestions() {
//!     println!("  - {}", suggestion);
//! }
//! ```

use thiserror::Error;

use crate::packets::PacketKind;

/// Result type alias for decode operations.
pub type Result<T, E = DecodeError> = std::result::Result<T, E>;

/// Error returned when a buffer cannot be decoded into a typed packet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("Buffer too short: {actual} bytes, layout needs at least {required}")]
    TooShort { actual: usize, required: usize },

    #[error("No packet layout registered for format {format}, version {version}, packet id {kind}")]
    UnknownSchema { format: u16, version: u8, kind: u8 },

    #[error("Bad size for {kind} packet: expected {expected} bytes, received {actual}")]
    SizeMismatch { kind: PacketKind, expected: usize, actual: usize },

    #[error("Unknown event code \"{}\"", .code.escape_ascii())]
    UnknownEventCode { code: [u8; 4] },
}

impl DecodeError {
    /// Returns whether decoding the same buffer again could succeed.
    ///
    /// Decoding is a pure function of its input, so this is always `false`; the
    /// caller decides whether to drop the packet or escalate.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            DecodeError::TooShort { .. } => vec![
                "Check the receive buffer is large enough for a full datagram",
                "Drop the packet and wait for the next frame",
            ],
            DecodeError::UnknownSchema { .. } => vec![
                "Set the game's UDP format option to 2020",
                "Check the sender is an F1 2020 client",
                "Drop packets from unsupported game versions",
            ],
            DecodeError::SizeMismatch { .. } => vec![
                "Check the datagram was not truncated by the receive buffer",
                "Verify the game version matches the 2020 packet layouts",
            ],
            DecodeError::UnknownEventCode { .. } => vec![
                "Drop the event packet",
                "Check the game version for newly added event codes",
            ],
        }
    }

    /// Helper constructor for short buffers.
    pub fn too_short(actual: usize, required: usize) -> Self {
        DecodeError::TooShort { actual, required }
    }
}
