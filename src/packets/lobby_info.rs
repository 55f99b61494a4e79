//! Lobby info packet (id 9), sent while in a multiplayer lobby

use serde::{Deserialize, Serialize};

use super::PacketHeader;
use super::participants::NAME_SIZE;
use crate::types::{FixedString, MAX_CARS, ReadyStatus};
use crate::wire::wire_struct;

/// `team_id` value when no team is selected yet.
pub const NO_TEAM_SELECTED: u8 = 255;

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct LobbyInfoData {
        /// 1 AI, 0 human
        pub ai_controlled: u8,
        /// 255 if no team is selected
        pub team_id: u8,
        pub nationality: u8,
        pub name: FixedString<NAME_SIZE>,
        pub ready_status: u8,
    }
}

impl LobbyInfoData {
    pub fn ready_status(&self) -> ReadyStatus {
        ReadyStatus::from_raw(self.ready_status)
    }

    pub fn has_team(&self) -> bool {
        self.team_id != NO_TEAM_SELECTED
    }
}

wire_struct! {
    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct PacketLobbyInfoData {
        pub header: PacketHeader,
        pub num_players: u8,
        pub lobby_players: [LobbyInfoData; MAX_CARS],
    }
}

impl PacketLobbyInfoData {
    /// Players in the lobby, clamped to the array length.
    pub fn players(&self) -> &[LobbyInfoData] {
        &self.lobby_players[..usize::from(self.num_players).min(MAX_CARS)]
    }
}
