//! Motion packet (id 0)
//!
//! Physics data for every car, plus extra suspension and wheel data for the player's car
//! only. Wheel arrays use the order rear-left, rear-right, front-left, front-right.

use serde::{Deserialize, Serialize};

use super::PacketHeader;
use crate::types::MAX_CARS;
use crate::wire::wire_struct;

/// Scale of the packed direction components.
const DIRECTION_SCALE: f32 = 32767.0;

wire_struct! {
    /// Motion data for one car
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct CarMotionData {
        pub world_position_x: f32,
        pub world_position_y: f32,
        pub world_position_z: f32,
        pub world_velocity_x: f32,
        pub world_velocity_y: f32,
        pub world_velocity_z: f32,
        /// Forward direction, normalised and scaled by 32767
        pub world_forward_dir_x: i16,
        pub world_forward_dir_y: i16,
        pub world_forward_dir_z: i16,
        /// Right direction, normalised and scaled by 32767
        pub world_right_dir_x: i16,
        pub world_right_dir_y: i16,
        pub world_right_dir_z: i16,
        pub g_force_lateral: f32,
        pub g_force_longitudinal: f32,
        pub g_force_vertical: f32,
        /// Radians
        pub yaw: f32,
        /// Radians
        pub pitch: f32,
        /// Radians
        pub roll: f32,
    }
}

impl CarMotionData {
    /// World-space forward unit vector.
    pub fn forward_dir(&self) -> [f32; 3] {
        [
            f32::from(self.world_forward_dir_x) / DIRECTION_SCALE,
            f32::from(self.world_forward_dir_y) / DIRECTION_SCALE,
            f32::from(self.world_forward_dir_z) / DIRECTION_SCALE,
        ]
    }

    /// World-space right unit vector.
    pub fn right_dir(&self) -> [f32; 3] {
        [
            f32::from(self.world_right_dir_x) / DIRECTION_SCALE,
            f32::from(self.world_right_dir_y) / DIRECTION_SCALE,
            f32::from(self.world_right_dir_z) / DIRECTION_SCALE,
        ]
    }
}

wire_struct! {
    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct PacketMotionData {
        pub header: PacketHeader,
        pub car_motion_data: [CarMotionData; MAX_CARS],
        pub suspension_position: [f32; 4],
        pub suspension_velocity: [f32; 4],
        pub suspension_acceleration: [f32; 4],
        /// Speed of each wheel
        pub wheel_speed: [f32; 4],
        /// Slip ratio for each wheel
        pub wheel_slip: [f32; 4],
        pub local_velocity_x: f32,
        pub local_velocity_y: f32,
        pub local_velocity_z: f32,
        pub angular_velocity_x: f32,
        pub angular_velocity_y: f32,
        pub angular_velocity_z: f32,
        pub angular_acceleration_x: f32,
        pub angular_acceleration_y: f32,
        pub angular_acceleration_z: f32,
        /// Current front wheels angle in radians
        pub front_wheels_angle: f32,
    }
}

impl PacketMotionData {
    pub fn player_car(&self) -> Option<&CarMotionData> {
        self.car_motion_data.get(usize::from(self.header.player_car_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{Layout, WireFormat};

    #[test]
    fn layout_sizes() {
        assert_eq!(<CarMotionData as WireFormat>::SIZE, 60);
        assert_eq!(<PacketMotionData as WireFormat>::SIZE, 1464);
        assert_eq!(CarMotionData::offset_of("world_forward_dir_x"), Some(24));
        assert_eq!(CarMotionData::offset_of("g_force_lateral"), Some(36));
        assert_eq!(PacketMotionData::offset_of("suspension_position"), Some(24 + 22 * 60));
        assert_eq!(PacketMotionData::offset_of("front_wheels_angle"), Some(1460));
    }

    #[test]
    fn directions_are_normalised() {
        let car = CarMotionData {
            world_forward_dir_x: 32767,
            world_forward_dir_y: 0,
            world_forward_dir_z: -32767,
            world_right_dir_x: 16384,
            ..Default::default()
        };
        assert_eq!(car.forward_dir(), [1.0, 0.0, -1.0]);
        let right = car.right_dir();
        assert!((right[0] - 0.5).abs() < 1e-4);
        assert_eq!(right[1], 0.0);
    }

    #[test]
    fn player_car_follows_header_index() {
        let mut packet = PacketMotionData::default();
        packet.header.player_car_index = 3;
        packet.car_motion_data[3].yaw = 1.25;
        assert_eq!(packet.player_car().map(|car| car.yaw), Some(1.25));

        packet.header.player_car_index = 255;
        assert!(packet.player_car().is_none());
    }
}
