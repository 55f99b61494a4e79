//! Type-safe decoder for the F1 2020 UDP telemetry format.
//!
//! The game broadcasts ten kinds of fixed-layout, little-endian datagrams. This crate
//! turns one datagram into a strongly typed [`Packet`], or a precise [`DecodeError`]
//! explaining why it could not.
//!
//! # Features
//!
//! - **Header dispatch**: the 24-byte header selects one of ten registered layouts
//! - **Exact validation**: a buffer must be exactly its layout's size, never padded or truncated
//! - **Typed records**: every field is named and typed, with helpers for coded values
//! - **Encoding**: records encode back to the same wire bytes for replay and testing
//! - **Lookup tables**: display names for drivers, teams, tracks and other ids
//!
//! No sockets are opened here. Feed datagrams from any source, synchronously with
//! [`decode`] or asynchronously with [`DecodeStreamExt::decode_packets`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use f1_telemetry_2020::{Packet, decode, lookup};
//!
//! fn on_datagram(bytes: &[u8]) {
//!     match decode(bytes) {
//!         Ok(Packet::Participants(p)) => {
//!             for car in p.active() {
//!                 println!("{} ({})", car.name, lookup::team_name(car.team_id).unwrap_or("?"));
//!             }
//!         }
//!         Ok(Packet::CarTelemetry(t)) => {
//!             if let Some(car) = t.player_car() {
//!                 println!("Speed: {} km/h, gear {}", car.speed, car.gear);
//!             }
//!         }
//!         Ok(_) => {}
//!         Err(e) => eprintln!("dropping datagram: {e}"),
//!     }
//! }
//! ```

// Core types and error handling
mod decoder;
mod error;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;
pub mod wire;

// Layouts and dispatch
pub mod packets;
pub mod registry;

// Presentation and adapters
pub mod lookup;
pub mod stream;

// Core exports
pub use decoder::decode;
pub use error::*;
pub use packets::{Packet, PacketHeader, PacketKind};
pub use types::*;

// Adapter exports
pub use stream::{DecodePackets, DecodeStreamExt};
