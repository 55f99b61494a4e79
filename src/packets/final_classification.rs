//! Final classification packet (id 8), sent once at the end of a race

use serde::{Deserialize, Serialize};

use super::PacketHeader;
use crate::types::{MAX_CARS, ResultStatus};
use crate::wire::wire_struct;

/// Number of tyre stint slots per car.
pub const MAX_TYRE_STINTS: usize = 8;

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct FinalClassificationData {
        pub position: u8,
        pub num_laps: u8,
        pub grid_position: u8,
        pub points: u8,
        pub num_pit_stops: u8,
        pub result_status: u8,
        /// Seconds
        pub best_lap_time: f32,
        /// Seconds, without penalties
        pub total_race_time: f64,
        /// Seconds
        pub penalties_time: u8,
        pub num_penalties: u8,
        pub num_tyre_stints: u8,
        pub tyre_stints_actual: [u8; MAX_TYRE_STINTS],
        pub tyre_stints_visual: [u8; MAX_TYRE_STINTS],
    }
}

impl FinalClassificationData {
    pub fn result_status(&self) -> ResultStatus {
        ResultStatus::from_raw(self.result_status)
    }

    /// Race time with penalties added.
    pub fn total_time_with_penalties(&self) -> f64 {
        self.total_race_time + f64::from(self.penalties_time)
    }

    /// Actual compounds of the stints driven, clamped to the array length.
    pub fn stints_actual(&self) -> &[u8] {
        &self.tyre_stints_actual[..usize::from(self.num_tyre_stints).min(MAX_TYRE_STINTS)]
    }
}

wire_struct! {
    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct PacketFinalClassificationData {
        pub header: PacketHeader,
        pub num_cars: u8,
        pub classification_data: [FinalClassificationData; MAX_CARS],
    }
}

impl PacketFinalClassificationData {
    pub fn player_car(&self) -> Option<&FinalClassificationData> {
        self.classification_data.get(usize::from(self.header.player_car_index))
    }

    /// Classified cars, clamped to the array length.
    pub fn classified(&self) -> &[FinalClassificationData] {
        &self.classification_data[..usize::from(self.num_cars).min(MAX_CARS)]
    }
}
