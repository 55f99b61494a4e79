//! Common packet header
//!
//! Every F1 2020 datagram starts with the same 24-byte header. The decoder reads it first
//! and uses `packet_format`, `packet_version` and `packet_id` to pick the layout for the
//! rest of the buffer.
//!
//! # Header Layout
//!
//! | Offset | Field                        | Type  |
//! |--------|------------------------------|-------|
//! | 0      | `packet_format`              | `u16` |
//! | 2      | `game_major_version`         | `u8`  |
//! | 3      | `game_minor_version`         | `u8`  |
//! | 4      | `packet_version`             | `u8`  |
//! | 5      | `packet_id`                  | `u8`  |
//! | 6      | `session_uid`                | `u64` |
//! | 14     | `session_time`               | `f32` |
//! | 18     | `frame_identifier`           | `u32` |
//! | 22     | `player_car_index`           | `u8`  |
//! | 23     | `secondary_player_car_index` | `u8`  |
//!
//! Parsing performs no validation beyond the length check; whether the triple names a
//! known layout is the registry's decision.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::wire::{WireFormat, wire_struct};
use crate::{DecodeError, Result};

/// Packet format value emitted by F1 2020.
pub const PACKET_FORMAT_2020: u16 = 2020;

/// The only packet version defined for the 2020 layouts.
pub const PACKET_VERSION_1: u8 = 1;

/// Encoded size of [`PacketHeader`].
pub const HEADER_SIZE: usize = 24;

wire_struct! {
    /// Header shared by every telemetry packet
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct PacketHeader {
        /// 2020
        pub packet_format: u16,
        /// Game major version, "X.00"
        pub game_major_version: u8,
        /// Game minor version, "1.XX"
        pub game_minor_version: u8,
        /// Version of this packet type, all start from 1
        pub packet_version: u8,
        /// Identifier for the packet type
        pub packet_id: u8,
        /// Unique identifier for the session
        pub session_uid: u64,
        /// Session timestamp
        pub session_time: f32,
        /// Identifier for the frame the data was retrieved on
        pub frame_identifier: u32,
        /// Index of the player's car in the per-car arrays
        pub player_car_index: u8,
        /// Index of the secondary player's car (splitscreen), 255 if none
        pub secondary_player_car_index: u8,
    }
}

impl PacketHeader {
    /// Parse the header from the front of a datagram.
    ///
    /// Fails with [`DecodeError::TooShort`] when fewer than [`HEADER_SIZE`] bytes are
    /// available; trailing bytes are ignored.
    pub fn parse(data: &[u8]) -> Result<Self> {
        trace!(len = data.len(), "Parsing F1 2020 packet header");

        if data.len() < HEADER_SIZE {
            return Err(DecodeError::too_short(data.len(), HEADER_SIZE));
        }

        let header = Self::decode_from(data)?;

        trace!(
            packet_format = header.packet_format,
            packet_version = header.packet_version,
            packet_id = header.packet_id,
            frame = header.frame_identifier,
            "Parsed packet header"
        );

        Ok(header)
    }

    /// The `(format, version, kind)` triple used for layout lookup.
    pub fn schema_key(&self) -> (u16, u8, u8) {
        (self.packet_format, self.packet_version, self.packet_id)
    }
}
