//! Static packet layout registry
//!
//! Maps a header's `(packet_format, packet_version, packet_id)` triple to the layout
//! used to decode the rest of the buffer. The table is fixed at compile time: ten
//! entries for format 2020, version 1, ids 0 through 9.
//!
//! ```rust
//! use f1_telemetry_2020::registry;
//!
//! let schema = registry::resolve(2020, 1, 6).expect("car telemetry is registered");
//! assert_eq!(schema.name(), "Car Telemetry");
//! assert_eq!(schema.size(), 1307);
//! assert!(registry::resolve(2019, 1, 6).is_none());
//! ```

use std::fmt;

use crate::Result;
use crate::packets::{
    HEADER_SIZE, PACKET_FORMAT_2020, PACKET_VERSION_1, Packet, PacketCarSetupData,
    PacketCarStatusData, PacketCarTelemetryData, PacketEventData, PacketFinalClassificationData,
    PacketKind, PacketLapData, PacketLobbyInfoData, PacketMotionData, PacketParticipantsData,
    PacketSessionData,
};
use crate::wire::{FieldSpec, Layout, WireFormat};

type DecodeFn = fn(&[u8]) -> Result<Packet>;

/// Immutable description of one registered packet layout.
pub struct Schema {
    kind: PacketKind,
    size: usize,
    fields: &'static [FieldSpec],
    decode: DecodeFn,
}

impl Schema {
    const fn of<T: Layout>(kind: PacketKind, decode: DecodeFn) -> Self {
        Self { kind, size: T::SIZE, fields: T::FIELDS, decode }
    }

    pub fn kind(&self) -> PacketKind {
        self.kind
    }

    /// Display name of the packet kind.
    pub fn name(&self) -> &'static str {
        self.kind.short_description()
    }

    /// Exact wire size, header included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Top-level fields in wire order, starting with `header`.
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Size of everything after the common header.
    pub fn body_size(&self) -> usize {
        self.size - HEADER_SIZE
    }

    /// Decode a buffer already known to match this layout's size.
    pub fn decode(&self, data: &[u8]) -> Result<Packet> {
        (self.decode)(data)
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("kind", &self.kind)
            .field("size", &self.size)
            .field("fields", &self.fields.len())
            .finish()
    }
}

macro_rules! schema {
    ($kind:ident, $record:ty) => {{
        fn decode(data: &[u8]) -> Result<Packet> {
            <$record as WireFormat>::decode_from(data).map(Packet::$kind)
        }
        Schema::of::<$record>(PacketKind::$kind, decode)
    }};
}

static MOTION: Schema = schema!(Motion, PacketMotionData);
static SESSION: Schema = schema!(Session, PacketSessionData);
static LAP_DATA: Schema = schema!(LapData, PacketLapData);
static EVENT: Schema = schema!(Event, PacketEventData);
static PARTICIPANTS: Schema = schema!(Participants, PacketParticipantsData);
static CAR_SETUPS: Schema = schema!(CarSetups, PacketCarSetupData);
static CAR_TELEMETRY: Schema = schema!(CarTelemetry, PacketCarTelemetryData);
static CAR_STATUS: Schema = schema!(CarStatus, PacketCarStatusData);
static FINAL_CLASSIFICATION: Schema = schema!(FinalClassification, PacketFinalClassificationData);
static LOBBY_INFO: Schema = schema!(LobbyInfo, PacketLobbyInfoData);

/// Layout for a packet kind in the 2020 format.
pub fn schema_for(kind: PacketKind) -> &'static Schema {
    match kind {
        PacketKind::Motion => &MOTION,
        PacketKind::Session => &SESSION,
        PacketKind::LapData => &LAP_DATA,
        PacketKind::Event => &EVENT,
        PacketKind::Participants => &PARTICIPANTS,
        PacketKind::CarSetups => &CAR_SETUPS,
        PacketKind::CarTelemetry => &CAR_TELEMETRY,
        PacketKind::CarStatus => &CAR_STATUS,
        PacketKind::FinalClassification => &FINAL_CLASSIFICATION,
        PacketKind::LobbyInfo => &LOBBY_INFO,
    }
}

/// Look up the layout registered for a header triple.
pub fn resolve(format: u16, version: u8, kind: u8) -> Option<&'static Schema> {
    if format != PACKET_FORMAT_2020 || version != PACKET_VERSION_1 {
        return None;
    }
    PacketKind::try_from(kind).ok().map(schema_for)
}

/// All registered layouts, in packet id order.
pub fn entries() -> impl Iterator<Item = &'static Schema> {
    PacketKind::ALL.into_iter().map(schema_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_ten_layouts_are_registered() {
        let sizes: Vec<_> = entries().map(|schema| (schema.kind().id(), schema.size())).collect();
        assert_eq!(
            sizes,
            vec![
                (0, 1464),
                (1, 251),
                (2, 1190),
                (3, 35),
                (4, 1213),
                (5, 1102),
                (6, 1307),
                (7, 1344),
                (8, 839),
                (9, 1169),
            ]
        );
    }

    #[test]
    fn resolve_requires_the_full_triple() {
        for kind in 0..=9u8 {
            assert!(resolve(2020, 1, kind).is_some());
            assert!(resolve(2020, 0, kind).is_none());
            assert!(resolve(2020, 2, kind).is_none());
            assert!(resolve(2019, 1, kind).is_none());
            assert!(resolve(2021, 1, kind).is_none());
        }
        assert!(resolve(2020, 1, 10).is_none());
        assert!(resolve(2020, 1, u8::MAX).is_none());
    }

    #[test]
    fn field_tables_sum_to_schema_size() {
        for schema in entries() {
            let total: usize = schema.fields().iter().map(|field| field.size).sum();
            assert_eq!(total, schema.size(), "{}", schema.name());
            assert_eq!(schema.fields().first().map(|field| field.name), Some("header"));
            assert_eq!(schema.body_size() + HEADER_SIZE, schema.size());
        }
    }

    #[test]
    fn schemas_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Schema>();
        assert_send_sync::<&'static Schema>();
    }
}
