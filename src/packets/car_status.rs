//! Car status packet (id 7)

use serde::{Deserialize, Serialize};

use super::PacketHeader;
use crate::types::{ErsDeployMode, FuelMix, MAX_CARS, ZoneFlag};
use crate::wire::wire_struct;

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct CarStatusData {
        /// 0 (off) to 2 (high)
        pub traction_control: u8,
        /// 0 (off) or 1 (on)
        pub anti_lock_brakes: u8,
        pub fuel_mix: u8,
        /// Percentage
        pub front_brake_bias: u8,
        pub pit_limiter_status: u8,
        pub fuel_in_tank: f32,
        pub fuel_capacity: f32,
        /// Value shown on the MFD
        pub fuel_remaining_laps: f32,
        pub max_rpm: u16,
        pub idle_rpm: u16,
        pub max_gears: u8,
        /// 0 not allowed, 1 allowed; the game documents -1 as unknown but sends it unsigned
        pub drs_allowed: u8,
        /// 0 if DRS is not available, otherwise metres until it is
        pub drs_activation_distance: u16,
        /// Percentage
        pub tyres_wear: [u8; 4],
        pub actual_tyre_compound: u8,
        pub visual_tyre_compound: u8,
        pub tyres_age_laps: u8,
        /// Percentage
        pub tyres_damage: [u8; 4],
        pub front_left_wing_damage: u8,
        pub front_right_wing_damage: u8,
        pub rear_wing_damage: u8,
        /// 0 OK, 1 fault
        pub drs_fault: u8,
        pub engine_damage: u8,
        pub gear_box_damage: u8,
        pub vehicle_fia_flags: i8,
        /// Joules
        pub ers_store_energy: f32,
        pub ers_deploy_mode: u8,
        pub ers_harvested_this_lap_mguk: f32,
        pub ers_harvested_this_lap_mguh: f32,
        pub ers_deployed_this_lap: f32,
    }
}

impl CarStatusData {
    pub fn fuel_mix(&self) -> FuelMix {
        FuelMix::from_raw(self.fuel_mix)
    }

    pub fn ers_deploy_mode(&self) -> ErsDeployMode {
        ErsDeployMode::from_raw(self.ers_deploy_mode)
    }

    pub fn vehicle_fia_flag(&self) -> ZoneFlag {
        ZoneFlag::from_raw(self.vehicle_fia_flags)
    }

    pub fn is_pit_limiter_on(&self) -> bool {
        self.pit_limiter_status != 0
    }
}

wire_struct! {
    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct PacketCarStatusData {
        pub header: PacketHeader,
        pub car_status_data: [CarStatusData; MAX_CARS],
    }
}

impl PacketCarStatusData {
    pub fn player_car(&self) -> Option<&CarStatusData> {
        self.car_status_data.get(usize::from(self.header.player_car_index))
    }
}
