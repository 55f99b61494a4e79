//! Packet layouts for the F1 2020 UDP telemetry format
//!
//! One module per packet kind. Each record is declared once with its fields in wire
//! order; sizes, offsets, decoding and encoding all derive from that declaration.
//!
//! | Id | Kind                  | Size |
//! |----|-----------------------|------|
//! | 0  | Motion                | 1464 |
//! | 1  | Session               | 251  |
//! | 2  | Lap Data              | 1190 |
//! | 3  | Event                 | 35   |
//! | 4  | Participants          | 1213 |
//! | 5  | Car Setups            | 1102 |
//! | 6  | Car Telemetry         | 1307 |
//! | 7  | Car Status            | 1344 |
//! | 8  | Final Classification  | 839  |
//! | 9  | Lobby Info            | 1169 |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::wire::WireFormat;

pub mod car_setups;
pub mod car_status;
pub mod car_telemetry;
pub mod event;
pub mod final_classification;
pub mod header;
pub mod lap_data;
pub mod lobby_info;
pub mod motion;
pub mod participants;
pub mod session;

pub use car_setups::{CarSetupData, PacketCarSetupData};
pub use car_status::{CarStatusData, PacketCarStatusData};
pub use car_telemetry::{CarTelemetryData, PacketCarTelemetryData};
pub use event::{
    EventCode, EventDetails, FastestLap, PacketEventData, Penalty, RaceWinner, Retirement,
    SpeedTrap, TeamMateInPits,
};
pub use final_classification::{FinalClassificationData, PacketFinalClassificationData};
pub use header::{HEADER_SIZE, PACKET_FORMAT_2020, PACKET_VERSION_1, PacketHeader};
pub use lap_data::{LapData, PacketLapData};
pub use lobby_info::{LobbyInfoData, PacketLobbyInfoData};
pub use motion::{CarMotionData, PacketMotionData};
pub use participants::{PacketParticipantsData, ParticipantData};
pub use session::{MarshalZone, PacketSessionData, WeatherForecastSample};

/// Packet type, from the header's `packet_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum PacketKind {
    Motion = 0,
    Session = 1,
    LapData = 2,
    Event = 3,
    Participants = 4,
    CarSetups = 5,
    CarTelemetry = 6,
    CarStatus = 7,
    FinalClassification = 8,
    LobbyInfo = 9,
}

impl PacketKind {
    pub const ALL: [PacketKind; 10] = [
        PacketKind::Motion,
        PacketKind::Session,
        PacketKind::LapData,
        PacketKind::Event,
        PacketKind::Participants,
        PacketKind::CarSetups,
        PacketKind::CarTelemetry,
        PacketKind::CarStatus,
        PacketKind::FinalClassification,
        PacketKind::LobbyInfo,
    ];

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub const fn short_description(self) -> &'static str {
        match self {
            PacketKind::Motion => "Motion",
            PacketKind::Session => "Session",
            PacketKind::LapData => "Lap Data",
            PacketKind::Event => "Event",
            PacketKind::Participants => "Participants",
            PacketKind::CarSetups => "Car Setups",
            PacketKind::CarTelemetry => "Car Telemetry",
            PacketKind::CarStatus => "Car Status",
            PacketKind::FinalClassification => "Final Classification",
            PacketKind::LobbyInfo => "Lobby information",
        }
    }

    pub const fn long_description(self) -> &'static str {
        match self {
            PacketKind::Motion => {
                "Contains all motion data for player's car – only sent while player is in control"
            }
            PacketKind::Session => "Data about the session – track, time left",
            PacketKind::LapData => "Data about all the lap times of cars in the session",
            PacketKind::Event => "Various notable events that happen during a session",
            PacketKind::Participants => {
                "List of participants in the session, mostly relevant for multiplayer"
            }
            PacketKind::CarSetups => "Packet detailing car setups for cars in the race",
            PacketKind::CarTelemetry => "Telemetry data for all cars",
            PacketKind::CarStatus => "Status data for all cars such as damage",
            PacketKind::FinalClassification => {
                "Final classification confirmation at the end of a race"
            }
            PacketKind::LobbyInfo => "Information about players in a multiplayer lobby",
        }
    }
}

impl TryFrom<u8> for PacketKind {
    type Error = u8;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        PacketKind::ALL.get(usize::from(id)).copied().ok_or(id)
    }
}

impl fmt::Display for PacketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_description())
    }
}

/// A fully decoded telemetry packet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Packet {
    Motion(PacketMotionData),
    Session(PacketSessionData),
    LapData(PacketLapData),
    Event(PacketEventData),
    Participants(PacketParticipantsData),
    CarSetups(PacketCarSetupData),
    CarTelemetry(PacketCarTelemetryData),
    CarStatus(PacketCarStatusData),
    FinalClassification(PacketFinalClassificationData),
    LobbyInfo(PacketLobbyInfoData),
}

impl Packet {
    pub fn header(&self) -> &PacketHeader {
        match self {
            Packet::Motion(p) => &p.header,
            Packet::Session(p) => &p.header,
            Packet::LapData(p) => &p.header,
            Packet::Event(p) => &p.header,
            Packet::Participants(p) => &p.header,
            Packet::CarSetups(p) => &p.header,
            Packet::CarTelemetry(p) => &p.header,
            Packet::CarStatus(p) => &p.header,
            Packet::FinalClassification(p) => &p.header,
            Packet::LobbyInfo(p) => &p.header,
        }
    }

    /// Kind of the decoded record, independent of the header's `packet_id`.
    pub fn kind(&self) -> PacketKind {
        match self {
            Packet::Motion(_) => PacketKind::Motion,
            Packet::Session(_) => PacketKind::Session,
            Packet::LapData(_) => PacketKind::LapData,
            Packet::Event(_) => PacketKind::Event,
            Packet::Participants(_) => PacketKind::Participants,
            Packet::CarSetups(_) => PacketKind::CarSetups,
            Packet::CarTelemetry(_) => PacketKind::CarTelemetry,
            Packet::CarStatus(_) => PacketKind::CarStatus,
            Packet::FinalClassification(_) => PacketKind::FinalClassification,
            Packet::LobbyInfo(_) => PacketKind::LobbyInfo,
        }
    }

    /// Encode back to wire bytes. The header is written as stored.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Packet::Motion(p) => p.to_bytes(),
            Packet::Session(p) => p.to_bytes(),
            Packet::LapData(p) => p.to_bytes(),
            Packet::Event(p) => p.to_bytes(),
            Packet::Participants(p) => p.to_bytes(),
            Packet::CarSetups(p) => p.to_bytes(),
            Packet::CarTelemetry(p) => p.to_bytes(),
            Packet::CarStatus(p) => p.to_bytes(),
            Packet::FinalClassification(p) => p.to_bytes(),
            Packet::LobbyInfo(p) => p.to_bytes(),
        }
    }
}
