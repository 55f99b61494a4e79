//! Car telemetry packet (id 6)

use serde::{Deserialize, Serialize};

use super::PacketHeader;
use crate::lookup;
use crate::types::{ButtonStatus, MAX_CARS, Wheel};
use crate::wire::wire_struct;

/// `mfd_panel_index` value when the MFD is closed.
pub const MFD_CLOSED: u8 = 255;

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct CarTelemetryData {
        /// Kilometres per hour
        pub speed: u16,
        /// 0.0 to 1.0
        pub throttle: f32,
        /// -1.0 (full lock left) to 1.0 (full lock right)
        pub steer: f32,
        /// 0.0 to 1.0
        pub brake: f32,
        /// 0 to 100
        pub clutch: u8,
        /// 1-8, N=0, R=-1
        pub gear: i8,
        pub engine_rpm: u16,
        /// 0 off, 1 on
        pub drs: u8,
        pub rev_lights_percent: u8,
        /// Celsius
        pub brakes_temperature: [u16; 4],
        /// Celsius
        pub tyres_surface_temperature: [u8; 4],
        /// Celsius
        pub tyres_inner_temperature: [u8; 4],
        /// Celsius
        pub engine_temperature: u16,
        /// PSI
        pub tyres_pressure: [f32; 4],
        /// See [`crate::lookup::surface_type_name`]
        pub surface_type: [u8; 4],
    }
}

impl CarTelemetryData {
    pub fn is_drs_open(&self) -> bool {
        self.drs != 0
    }

    /// Surface under one wheel.
    pub fn surface_name(&self, wheel: Wheel) -> Option<&'static str> {
        lookup::surface_type_name(self.surface_type[wheel.index()])
    }
}

wire_struct! {
    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct PacketCarTelemetryData {
        pub header: PacketHeader,
        pub car_telemetry_data: [CarTelemetryData; MAX_CARS],
        /// Bit flags of the buttons currently pressed, see [`crate::ButtonFlag`]
        pub button_status: u32,
        /// Index of the open MFD panel, 255 when closed
        pub mfd_panel_index: u8,
        pub mfd_panel_index_secondary_player: u8,
        /// Suggested gear for the player (1-8), 0 if none
        pub suggested_gear: i8,
    }
}

impl PacketCarTelemetryData {
    pub fn player_car(&self) -> Option<&CarTelemetryData> {
        self.car_telemetry_data.get(usize::from(self.header.player_car_index))
    }

    pub fn buttons(&self) -> ButtonStatus {
        ButtonStatus::new(self.button_status)
    }

    pub fn is_mfd_open(&self) -> bool {
        self.mfd_panel_index != MFD_CLOSED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ButtonFlag;
    use crate::wire::{Layout, WireFormat};

    #[test]
    fn layout_sizes() {
        assert_eq!(<CarTelemetryData as WireFormat>::SIZE, 58);
        assert_eq!(<PacketCarTelemetryData as WireFormat>::SIZE, 1307);
        assert_eq!(CarTelemetryData::offset_of("brakes_temperature"), Some(20));
        assert_eq!(CarTelemetryData::offset_of("surface_type"), Some(54));
        assert_eq!(PacketCarTelemetryData::offset_of("button_status"), Some(24 + 22 * 58));
        assert_eq!(PacketCarTelemetryData::offset_of("suggested_gear"), Some(1306));
    }

    #[test]
    fn helpers_read_raw_fields() {
        let mut packet = PacketCarTelemetryData {
            button_status: 0x0200 | 0x0008,
            mfd_panel_index: MFD_CLOSED,
            ..Default::default()
        };
        packet.car_telemetry_data[0].surface_type = [0, 1, 4, 7];
        packet.car_telemetry_data[0].drs = 1;

        let buttons: Vec<_> = packet.buttons().pressed().collect();
        assert_eq!(buttons, vec![ButtonFlag::Square, ButtonFlag::L1]);
        assert!(!packet.is_mfd_open());

        let car = packet.player_car().copied().unwrap_or_default();
        assert!(car.is_drs_open());
        assert_eq!(car.surface_name(Wheel::RearLeft), Some("Tarmac"));
        assert_eq!(car.surface_name(Wheel::FrontLeft), Some("Gravel"));
        assert_eq!(car.surface_name(Wheel::FrontRight), Some("Grass"));
    }
}
