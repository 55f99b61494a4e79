//! Event packet (id 3)
//!
//! A header, a four-character ASCII event code, and a 7-byte region whose meaning depends
//! on the code. Six codes carry a small sub-record at the start of the region; the other
//! five carry nothing. Bytes past the active sub-record are ignored on decode and written
//! as zero on encode.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::PacketHeader;
use crate::wire::{ByteReader, ByteWriter, FieldSpec, Layout, WireFormat, wire_struct};
use crate::{DecodeError, Result};

/// Width of the event details region.
pub const EVENT_DETAILS_SIZE: usize = 7;

/// The eleven event codes sent by F1 2020.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCode {
    SessionStarted,
    SessionEnded,
    FastestLap,
    Retirement,
    DrsEnabled,
    DrsDisabled,
    TeamMateInPits,
    ChequeredFlag,
    RaceWinner,
    PenaltyIssued,
    SpeedTrap,
}

impl EventCode {
    pub const ALL: [EventCode; 11] = [
        EventCode::SessionStarted,
        EventCode::SessionEnded,
        EventCode::FastestLap,
        EventCode::Retirement,
        EventCode::DrsEnabled,
        EventCode::DrsDisabled,
        EventCode::TeamMateInPits,
        EventCode::ChequeredFlag,
        EventCode::RaceWinner,
        EventCode::PenaltyIssued,
        EventCode::SpeedTrap,
    ];

    /// Map the wire code to an event, failing for anything outside the known set.
    pub fn from_wire(code: [u8; 4]) -> Result<Self> {
        match &code {
            b"SSTA" => Ok(EventCode::SessionStarted),
            b"SEND" => Ok(EventCode::SessionEnded),
            b"FTLP" => Ok(EventCode::FastestLap),
            b"RTMT" => Ok(EventCode::Retirement),
            b"DRSE" => Ok(EventCode::DrsEnabled),
            b"DRSD" => Ok(EventCode::DrsDisabled),
            b"TMPT" => Ok(EventCode::TeamMateInPits),
            b"CHQF" => Ok(EventCode::ChequeredFlag),
            b"RCWN" => Ok(EventCode::RaceWinner),
            b"PENA" => Ok(EventCode::PenaltyIssued),
            b"SPTP" => Ok(EventCode::SpeedTrap),
            _ => Err(DecodeError::UnknownEventCode { code }),
        }
    }

    pub const fn as_bytes(self) -> &'static [u8; 4] {
        match self {
            EventCode::SessionStarted => b"SSTA",
            EventCode::SessionEnded => b"SEND",
            EventCode::FastestLap => b"FTLP",
            EventCode::Retirement => b"RTMT",
            EventCode::DrsEnabled => b"DRSE",
            EventCode::DrsDisabled => b"DRSD",
            EventCode::TeamMateInPits => b"TMPT",
            EventCode::ChequeredFlag => b"CHQF",
            EventCode::RaceWinner => b"RCWN",
            EventCode::PenaltyIssued => b"PENA",
            EventCode::SpeedTrap => b"SPTP",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventCode::SessionStarted => "SSTA",
            EventCode::SessionEnded => "SEND",
            EventCode::FastestLap => "FTLP",
            EventCode::Retirement => "RTMT",
            EventCode::DrsEnabled => "DRSE",
            EventCode::DrsDisabled => "DRSD",
            EventCode::TeamMateInPits => "TMPT",
            EventCode::ChequeredFlag => "CHQF",
            EventCode::RaceWinner => "RCWN",
            EventCode::PenaltyIssued => "PENA",
            EventCode::SpeedTrap => "SPTP",
        }
    }

    /// Whether the code carries a sub-record in the details region.
    pub const fn has_payload(self) -> bool {
        matches!(
            self,
            EventCode::FastestLap
                | EventCode::Retirement
                | EventCode::TeamMateInPits
                | EventCode::RaceWinner
                | EventCode::PenaltyIssued
                | EventCode::SpeedTrap
        )
    }

    pub const fn short_description(self) -> &'static str {
        match self {
            EventCode::SessionStarted => "Session Started",
            EventCode::SessionEnded => "Session Ended",
            EventCode::FastestLap => "Fastest Lap",
            EventCode::Retirement => "Retirement",
            EventCode::DrsEnabled => "DRS enabled",
            EventCode::DrsDisabled => "DRS disabled",
            EventCode::TeamMateInPits => "Team mate in pits",
            EventCode::ChequeredFlag => "Chequered flag",
            EventCode::RaceWinner => "Race Winner",
            EventCode::PenaltyIssued => "Penalty issued",
            EventCode::SpeedTrap => "Speed trap triggered",
        }
    }

    pub const fn long_description(self) -> &'static str {
        match self {
            EventCode::SessionStarted => "Sent when the session starts",
            EventCode::SessionEnded => "Sent when the session ends",
            EventCode::FastestLap => "When a driver achieves the fastest lap",
            EventCode::Retirement => "When a driver retires",
            EventCode::DrsEnabled => "Race control have enabled DRS",
            EventCode::DrsDisabled => "Race control have disabled DRS",
            EventCode::TeamMateInPits => "Your team mate has entered the pits",
            EventCode::ChequeredFlag => "The chequered flag has been waved",
            EventCode::RaceWinner => "The race winner is announced",
            EventCode::PenaltyIssued => "A penalty has been issued",
            EventCode::SpeedTrap => "Speed trap has been triggered",
        }
    }
}

impl fmt::Display for EventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct FastestLap {
        pub vehicle_idx: u8,
        /// Seconds
        pub lap_time: f32,
    }
}

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct Penalty {
        /// See [`crate::lookup::penalty_type_name`]
        pub penalty_type: u8,
        /// See [`crate::lookup::infringement_type_name`]
        pub infringement_type: u8,
        /// Car the penalty is applied to
        pub vehicle_idx: u8,
        /// Other car involved
        pub other_vehicle_idx: u8,
        /// Time gained, or time spent doing the action, in seconds
        pub time: u8,
        pub lap_num: u8,
        pub places_gained: u8,
    }
}

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct RaceWinner {
        pub vehicle_idx: u8,
    }
}

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct Retirement {
        pub vehicle_idx: u8,
    }
}

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct SpeedTrap {
        pub vehicle_idx: u8,
        /// Kilometres per hour
        pub speed: f32,
    }
}

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct TeamMateInPits {
        pub vehicle_idx: u8,
    }
}

/// Event details, selected by the event code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EventDetails {
    SessionStarted,
    SessionEnded,
    FastestLap(FastestLap),
    Retirement(Retirement),
    DrsEnabled,
    DrsDisabled,
    TeamMateInPits(TeamMateInPits),
    ChequeredFlag,
    RaceWinner(RaceWinner),
    Penalty(Penalty),
    SpeedTrap(SpeedTrap),
}

impl EventDetails {
    /// Decode the details region for `code`.
    ///
    /// `payload` is the region following the code; only the active sub-record's bytes
    /// are read.
    pub fn decode(code: EventCode, payload: &[u8]) -> Result<Self> {
        let mut reader = ByteReader::new(payload);
        let details = match code {
            EventCode::SessionStarted => EventDetails::SessionStarted,
            EventCode::SessionEnded => EventDetails::SessionEnded,
            EventCode::FastestLap => EventDetails::FastestLap(FastestLap::decode(&mut reader)?),
            EventCode::Retirement => EventDetails::Retirement(Retirement::decode(&mut reader)?),
            EventCode::DrsEnabled => EventDetails::DrsEnabled,
            EventCode::DrsDisabled => EventDetails::DrsDisabled,
            EventCode::TeamMateInPits => {
                EventDetails::TeamMateInPits(TeamMateInPits::decode(&mut reader)?)
            }
            EventCode::ChequeredFlag => EventDetails::ChequeredFlag,
            EventCode::RaceWinner => EventDetails::RaceWinner(RaceWinner::decode(&mut reader)?),
            EventCode::PenaltyIssued => EventDetails::Penalty(Penalty::decode(&mut reader)?),
            EventCode::SpeedTrap => EventDetails::SpeedTrap(SpeedTrap::decode(&mut reader)?),
        };
        Ok(details)
    }

    pub fn code(&self) -> EventCode {
        match self {
            EventDetails::SessionStarted => EventCode::SessionStarted,
            EventDetails::SessionEnded => EventCode::SessionEnded,
            EventDetails::FastestLap(_) => EventCode::FastestLap,
            EventDetails::Retirement(_) => EventCode::Retirement,
            EventDetails::DrsEnabled => EventCode::DrsEnabled,
            EventDetails::DrsDisabled => EventCode::DrsDisabled,
            EventDetails::TeamMateInPits(_) => EventCode::TeamMateInPits,
            EventDetails::ChequeredFlag => EventCode::ChequeredFlag,
            EventDetails::RaceWinner(_) => EventCode::RaceWinner,
            EventDetails::Penalty(_) => EventCode::PenaltyIssued,
            EventDetails::SpeedTrap(_) => EventCode::SpeedTrap,
        }
    }

    /// Write the details region, zero-padded to its full width.
    pub fn encode(&self, writer: &mut ByteWriter) {
        let start = writer.len();
        match self {
            EventDetails::FastestLap(data) => data.encode(writer),
            EventDetails::Retirement(data) => data.encode(writer),
            EventDetails::TeamMateInPits(data) => data.encode(writer),
            EventDetails::RaceWinner(data) => data.encode(writer),
            EventDetails::Penalty(data) => data.encode(writer),
            EventDetails::SpeedTrap(data) => data.encode(writer),
            EventDetails::SessionStarted
            | EventDetails::SessionEnded
            | EventDetails::DrsEnabled
            | EventDetails::DrsDisabled
            | EventDetails::ChequeredFlag => {}
        }
        writer.pad(EVENT_DETAILS_SIZE - (writer.len() - start));
    }
}

/// Event packet: header, code and details.
///
/// The code is not stored separately; [`EventDetails::code`] recovers it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacketEventData {
    pub header: PacketHeader,
    pub details: EventDetails,
}

impl PacketEventData {
    pub fn code(&self) -> EventCode {
        self.details.code()
    }
}

impl WireFormat for PacketEventData {
    const SIZE: usize = PacketHeader::SIZE + 4 + EVENT_DETAILS_SIZE;

    fn decode(reader: &mut ByteReader<'_>) -> Result<Self> {
        let header = PacketHeader::decode(reader)?;
        let code = EventCode::from_wire(reader.take::<4>()?)?;
        let payload = reader.take_slice(EVENT_DETAILS_SIZE)?;
        let details = EventDetails::decode(code, payload)?;
        Ok(Self { header, details })
    }

    fn encode(&self, writer: &mut ByteWriter) {
        self.header.encode(writer);
        writer.put(self.code().as_bytes());
        self.details.encode(writer);
    }
}

impl Layout for PacketEventData {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { name: "header", size: PacketHeader::SIZE },
        FieldSpec { name: "event_string_code", size: 4 },
        FieldSpec { name: "event_details", size: EVENT_DETAILS_SIZE },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_region_follows_code() {
        assert_eq!(PacketEventData::offset_of("event_string_code"), Some(24));
        assert_eq!(PacketEventData::offset_of("event_details"), Some(28));
    }

    #[test]
    fn sub_records_fit_the_details_region() {
        let sizes = [
            <FastestLap as WireFormat>::SIZE,
            <Penalty as WireFormat>::SIZE,
            <RaceWinner as WireFormat>::SIZE,
            <Retirement as WireFormat>::SIZE,
            <SpeedTrap as WireFormat>::SIZE,
            <TeamMateInPits as WireFormat>::SIZE,
        ];
        assert_eq!(sizes, [5, 7, 1, 1, 5, 1]);
        assert!(sizes.iter().all(|&size| size <= EVENT_DETAILS_SIZE));
        assert_eq!(<PacketEventData as WireFormat>::SIZE, 35);
    }

    #[test]
    fn codes_map_both_ways() -> Result<()> {
        for code in EventCode::ALL {
            assert_eq!(EventCode::from_wire(*code.as_bytes())?, code);
            assert_eq!(code.as_str().as_bytes(), code.as_bytes());
        }
        Ok(())
    }

    #[test]
    fn five_codes_have_no_payload() {
        let without: Vec<_> = EventCode::ALL
            .into_iter()
            .filter(|c| !c.has_payload())
            .map(EventCode::as_str)
            .collect();
        assert_eq!(without, vec!["SSTA", "SEND", "DRSE", "DRSD", "CHQF"]);
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(
            EventCode::from_wire(*b"ssta"),
            Err(DecodeError::UnknownEventCode { code: *b"ssta" })
        );
    }

    #[test]
    fn penalty_reads_all_seven_bytes() -> Result<()> {
        let details = EventDetails::decode(EventCode::PenaltyIssued, &[4, 17, 2, 9, 5, 12, 1])?;
        assert_eq!(
            details,
            EventDetails::Penalty(Penalty {
                penalty_type: 4,
                infringement_type: 17,
                vehicle_idx: 2,
                other_vehicle_idx: 9,
                time: 5,
                lap_num: 12,
                places_gained: 1,
            })
        );
        Ok(())
    }

    #[test]
    fn trailing_region_bytes_are_ignored() -> Result<()> {
        let region = [6, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF];
        let details = EventDetails::decode(EventCode::RaceWinner, &region)?;
        assert_eq!(details, EventDetails::RaceWinner(RaceWinner { vehicle_idx: 6 }));

        let details = EventDetails::decode(EventCode::ChequeredFlag, &[0xFF; EVENT_DETAILS_SIZE])?;
        assert_eq!(details, EventDetails::ChequeredFlag);
        Ok(())
    }

    #[test]
    fn encode_zero_pads_region() {
        let packet = PacketEventData {
            header: PacketHeader::default(),
            details: EventDetails::SpeedTrap(SpeedTrap { vehicle_idx: 11, speed: 331.5 }),
        };
        let bytes = packet.to_bytes();
        assert_eq!(bytes.len(), 35);
        assert_eq!(&bytes[24..28], b"SPTP");
        assert_eq!(bytes[28], 11);
        assert_eq!(&bytes[29..33], &331.5f32.to_le_bytes());
        assert_eq!(&bytes[33..35], &[0, 0]);
    }

    #[test]
    fn descriptions() {
        assert_eq!(EventCode::FastestLap.short_description(), "Fastest Lap");
        assert_eq!(
            EventCode::ChequeredFlag.long_description(),
            "The chequered flag has been waved"
        );
        assert_eq!(EventCode::SpeedTrap.to_string(), "SPTP");
    }
}
