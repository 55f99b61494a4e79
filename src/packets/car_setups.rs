//! Car setups packet (id 5)
//!
//! In multiplayer sessions other players' setups are sent zeroed.

use serde::{Deserialize, Serialize};

use super::PacketHeader;
use crate::types::MAX_CARS;
use crate::wire::wire_struct;

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct CarSetupData {
        pub front_wing: u8,
        pub rear_wing: u8,
        /// Differential adjustment on throttle (percentage)
        pub on_throttle: u8,
        /// Differential adjustment off throttle (percentage)
        pub off_throttle: u8,
        pub front_camber: f32,
        pub rear_camber: f32,
        pub front_toe: f32,
        pub rear_toe: f32,
        pub front_suspension: u8,
        pub rear_suspension: u8,
        pub front_anti_roll_bar: u8,
        pub rear_anti_roll_bar: u8,
        pub front_suspension_height: u8,
        pub rear_suspension_height: u8,
        /// Percentage
        pub brake_pressure: u8,
        /// Percentage
        pub brake_bias: u8,
        /// PSI
        pub rear_left_tyre_pressure: f32,
        pub rear_right_tyre_pressure: f32,
        pub front_left_tyre_pressure: f32,
        pub front_right_tyre_pressure: f32,
        pub ballast: u8,
        pub fuel_load: f32,
    }
}

wire_struct! {
    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct PacketCarSetupData {
        pub header: PacketHeader,
        pub car_setups: [CarSetupData; MAX_CARS],
    }
}

impl PacketCarSetupData {
    pub fn player_car(&self) -> Option<&CarSetupData> {
        self.car_setups.get(usize::from(self.header.player_car_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{Layout, WireFormat};

    #[test]
    fn layout_sizes() {
        assert_eq!(<CarSetupData as WireFormat>::SIZE, 49);
        assert_eq!(<PacketCarSetupData as WireFormat>::SIZE, 1102);
        assert_eq!(CarSetupData::offset_of("front_suspension"), Some(20));
        assert_eq!(CarSetupData::offset_of("rear_left_tyre_pressure"), Some(28));
        assert_eq!(CarSetupData::offset_of("fuel_load"), Some(45));
    }
}
