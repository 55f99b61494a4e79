//! Lap data packet (id 2)

use serde::{Deserialize, Serialize};

use super::PacketHeader;
use crate::types::{DriverStatus, MAX_CARS, PitStatus, ResultStatus};
use crate::wire::wire_struct;

wire_struct! {
    /// Lap timing for one car
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct LapData {
        /// Seconds
        pub last_lap_time: f32,
        /// Seconds
        pub current_lap_time: f32,
        pub sector1_time_in_ms: u16,
        pub sector2_time_in_ms: u16,
        /// Best lap time of the session in seconds
        pub best_lap_time: f32,
        pub best_lap_num: u8,
        pub best_lap_sector1_time_in_ms: u16,
        pub best_lap_sector2_time_in_ms: u16,
        pub best_lap_sector3_time_in_ms: u16,
        pub best_overall_sector1_time_in_ms: u16,
        pub best_overall_sector1_lap_num: u8,
        pub best_overall_sector2_time_in_ms: u16,
        pub best_overall_sector2_lap_num: u8,
        pub best_overall_sector3_time_in_ms: u16,
        pub best_overall_sector3_lap_num: u8,
        /// Metres around the current lap, negative before the line is crossed
        pub lap_distance: f32,
        /// Metres travelled in the session, negative before the line is crossed
        pub total_distance: f32,
        /// Seconds
        pub safety_car_delta: f32,
        pub car_position: u8,
        pub current_lap_num: u8,
        pub pit_status: u8,
        /// 0 = sector 1, 1 = sector 2, 2 = sector 3
        pub sector: u8,
        /// 0 valid, 1 invalid
        pub current_lap_invalid: u8,
        /// Accumulated time penalties in seconds
        pub penalties: u8,
        pub grid_position: u8,
        pub driver_status: u8,
        pub result_status: u8,
    }
}

impl LapData {
    pub fn pit_status(&self) -> PitStatus {
        PitStatus::from_raw(self.pit_status)
    }

    pub fn driver_status(&self) -> DriverStatus {
        DriverStatus::from_raw(self.driver_status)
    }

    pub fn result_status(&self) -> ResultStatus {
        ResultStatus::from_raw(self.result_status)
    }

    pub fn is_current_lap_invalid(&self) -> bool {
        self.current_lap_invalid != 0
    }
}

wire_struct! {
    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct PacketLapData {
        pub header: PacketHeader,
        pub lap_data: [LapData; MAX_CARS],
    }
}

impl PacketLapData {
    pub fn player_car(&self) -> Option<&LapData> {
        self.lap_data.get(usize::from(self.header.player_car_index))
    }
}
