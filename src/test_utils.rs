//! Packet builders shared by unit tests, integration tests and benches
//!
//! Two flavours: zero-filled wire buffers with a valid header (the smallest input each
//! layout accepts) and fully populated records where every field carries a distinct
//! non-default value.

#![cfg(any(test, feature = "benchmark"))]

use crate::packets::{
    CarMotionData, CarSetupData, CarStatusData, CarTelemetryData, EventCode, EventDetails,
    FastestLap, FinalClassificationData, LapData, LobbyInfoData, MarshalZone, Packet,
    PacketCarSetupData, PacketCarStatusData, PacketCarTelemetryData, PacketEventData,
    PacketFinalClassificationData, PacketHeader, PacketKind, PacketLapData, PacketLobbyInfoData,
    PacketMotionData, PacketParticipantsData, PacketSessionData, ParticipantData, Penalty,
    WeatherForecastSample,
};
use crate::registry;
use crate::types::FixedString;
use crate::wire::WireFormat;

/// Header for `kind` with the registered format and version and fixed session values.
pub fn build_header(kind: PacketKind) -> PacketHeader {
    PacketHeader {
        packet_format: 2020,
        game_major_version: 1,
        game_minor_version: 18,
        packet_version: 1,
        packet_id: kind.id(),
        session_uid: 0x5EED_F1F1_2020_0001,
        session_time: 321.5,
        frame_identifier: 9_001,
        player_car_index: 0,
        secondary_player_car_index: 255,
    }
}

/// Exact-size buffer for `kind`: header from [`build_header`], zeroes after it.
///
/// Event packets get the `SSTA` code so the buffer stays decodable.
pub fn zeroed_packet(kind: PacketKind) -> Vec<u8> {
    let size = registry::schema_for(kind).size();
    let mut buf = build_header(kind).to_bytes();
    buf.resize(size, 0);
    if kind == PacketKind::Event {
        buf[24..28].copy_from_slice(EventCode::SessionStarted.as_bytes());
    }
    buf
}

/// 35-byte event datagram with a raw code and details region.
///
/// `details` is copied to the start of the 7-byte region; longer input is truncated.
pub fn event_packet(code: [u8; 4], details: &[u8]) -> Vec<u8> {
    let mut buf = build_header(PacketKind::Event).to_bytes();
    buf.extend_from_slice(&code);
    let mut region = [0u8; 7];
    let len = details.len().min(region.len());
    region[..len].copy_from_slice(&details[..len]);
    buf.extend_from_slice(&region);
    buf
}

/// Populated packet of `kind` with non-default values in every field.
pub fn sample_packet(kind: PacketKind) -> Packet {
    let mut header = build_header(kind);
    header.player_car_index = 7;
    match kind {
        PacketKind::Motion => Packet::Motion(PacketMotionData {
            header,
            car_motion_data: std::array::from_fn(|i| sample_car_motion(i as u8)),
            suspension_position: [1.0, 2.0, 3.0, 4.0],
            suspension_velocity: [-1.5, -2.5, 3.5, 4.5],
            suspension_acceleration: [10.0, 20.0, 30.0, 40.0],
            wheel_speed: [80.25, 80.5, 81.0, 81.25],
            wheel_slip: [0.01, 0.02, 0.03, 0.04],
            local_velocity_x: 0.5,
            local_velocity_y: -0.25,
            local_velocity_z: 72.0,
            angular_velocity_x: 0.125,
            angular_velocity_y: -0.125,
            angular_velocity_z: 0.0625,
            angular_acceleration_x: 1.5,
            angular_acceleration_y: -1.5,
            angular_acceleration_z: 2.5,
            front_wheels_angle: -0.2,
        }),
        PacketKind::Session => Packet::Session(PacketSessionData {
            header,
            weather: 3,
            track_temperature: 31,
            air_temperature: -2,
            total_laps: 58,
            track_length: 5303,
            session_type: 10,
            track_id: 26,
            formula: 2,
            session_time_left: 6120,
            session_duration: 7200,
            pit_speed_limit: 80,
            game_paused: 1,
            is_spectating: 1,
            spectator_car_index: 12,
            sli_pro_native_support: 1,
            num_marshal_zones: 17,
            marshal_zones: std::array::from_fn(|i| MarshalZone {
                zone_start: i as f32 / 21.0,
                zone_flag: (i % 6) as i8 - 1,
            }),
            safety_car_status: 2,
            network_game: 1,
            num_weather_forecast_samples: 5,
            weather_forecast_samples: std::array::from_fn(|i| WeatherForecastSample {
                session_type: (i % 13) as u8,
                time_offset: (i * 5) as u8,
                weather: (i % 6) as u8,
                track_temperature: 20 + i as i8,
                air_temperature: -(i as i8),
            }),
        }),
        PacketKind::LapData => Packet::LapData(PacketLapData {
            header,
            lap_data: std::array::from_fn(|i| sample_lap(i as u8)),
        }),
        PacketKind::Event => Packet::Event(PacketEventData {
            header,
            details: EventDetails::Penalty(Penalty {
                penalty_type: 4,
                infringement_type: 27,
                vehicle_idx: 7,
                other_vehicle_idx: 3,
                time: 5,
                lap_num: 41,
                places_gained: 2,
            }),
        }),
        PacketKind::Participants => Packet::Participants(PacketParticipantsData {
            header,
            num_active_cars: 20,
            participants: std::array::from_fn(|i| sample_participant(i as u8)),
        }),
        PacketKind::CarSetups => Packet::CarSetups(PacketCarSetupData {
            header,
            car_setups: std::array::from_fn(|i| sample_setup(i as u8)),
        }),
        PacketKind::CarTelemetry => Packet::CarTelemetry(PacketCarTelemetryData {
            header,
            car_telemetry_data: std::array::from_fn(|i| sample_telemetry(i as u8)),
            button_status: 0x0401,
            mfd_panel_index: 3,
            mfd_panel_index_secondary_player: 255,
            suggested_gear: 6,
        }),
        PacketKind::CarStatus => Packet::CarStatus(PacketCarStatusData {
            header,
            car_status_data: std::array::from_fn(|i| sample_status(i as u8)),
        }),
        PacketKind::FinalClassification => {
            Packet::FinalClassification(PacketFinalClassificationData {
                header,
                num_cars: 20,
                classification_data: std::array::from_fn(|i| sample_classification(i as u8)),
            })
        }
        PacketKind::LobbyInfo => Packet::LobbyInfo(PacketLobbyInfoData {
            header,
            num_players: 14,
            lobby_players: std::array::from_fn(|i| LobbyInfoData {
                ai_controlled: (i % 2) as u8,
                team_id: i as u8,
                nationality: 1 + i as u8,
                name: FixedString::new(&format!("Lobby Player {i}")),
                ready_status: (i % 3) as u8,
            }),
        }),
    }
}

/// Fastest-lap event for vehicle 7 at 91.234 s.
pub fn fastest_lap_event() -> PacketEventData {
    PacketEventData {
        header: build_header(PacketKind::Event),
        details: EventDetails::FastestLap(FastestLap { vehicle_idx: 7, lap_time: 91.234 }),
    }
}

fn sample_car_motion(i: u8) -> CarMotionData {
    let f = f32::from(i);
    CarMotionData {
        world_position_x: 100.0 + f,
        world_position_y: 2.5 + f,
        world_position_z: -300.0 - f,
        world_velocity_x: 40.0 + f,
        world_velocity_y: 0.5,
        world_velocity_z: -40.0 - f,
        world_forward_dir_x: 23170,
        world_forward_dir_y: -1 - i16::from(i),
        world_forward_dir_z: -23170,
        world_right_dir_x: 23170,
        world_right_dir_y: 2 + i16::from(i),
        world_right_dir_z: 23170,
        g_force_lateral: 1.25 + f,
        g_force_longitudinal: -3.5,
        g_force_vertical: 1.0 + f / 10.0,
        yaw: 0.75,
        pitch: -0.01 * f,
        roll: 0.02,
    }
}

fn sample_lap(i: u8) -> LapData {
    let f = f32::from(i);
    LapData {
        last_lap_time: 91.5 + f,
        current_lap_time: 45.25 + f,
        sector1_time_in_ms: 28_000 + u16::from(i),
        sector2_time_in_ms: 31_000 + u16::from(i),
        best_lap_time: 90.125 + f,
        best_lap_num: 12 + i,
        best_lap_sector1_time_in_ms: 27_900,
        best_lap_sector2_time_in_ms: 30_800,
        best_lap_sector3_time_in_ms: 31_400,
        best_overall_sector1_time_in_ms: 27_850,
        best_overall_sector1_lap_num: 14,
        best_overall_sector2_time_in_ms: 30_700,
        best_overall_sector2_lap_num: 15,
        best_overall_sector3_time_in_ms: 31_300,
        best_overall_sector3_lap_num: 16,
        lap_distance: 2500.5 + f,
        total_distance: 100_000.0 + f,
        safety_car_delta: -1.5,
        car_position: 1 + i,
        current_lap_num: 30,
        pit_status: i % 3,
        sector: i % 3,
        current_lap_invalid: i % 2,
        penalties: 5,
        grid_position: 22 - i,
        driver_status: i % 5,
        result_status: 2 + i % 5,
    }
}

fn sample_participant(i: u8) -> ParticipantData {
    ParticipantData {
        ai_controlled: i % 2,
        driver_id: 30 + i,
        team_id: i % 10,
        race_number: 2 + i,
        nationality: 1 + i,
        name: FixedString::new(&format!("Driver {i}")),
        your_telemetry: 1,
    }
}

fn sample_setup(i: u8) -> CarSetupData {
    let f = f32::from(i);
    CarSetupData {
        front_wing: 3 + i % 8,
        rear_wing: 4 + i % 7,
        on_throttle: 60 + i,
        off_throttle: 55,
        front_camber: -3.0 + f / 100.0,
        rear_camber: -1.5,
        front_toe: 0.05,
        rear_toe: 0.2 + f / 100.0,
        front_suspension: 5,
        rear_suspension: 4,
        front_anti_roll_bar: 6,
        rear_anti_roll_bar: 3,
        front_suspension_height: 2,
        rear_suspension_height: 6,
        brake_pressure: 95 + i % 5,
        brake_bias: 55,
        rear_left_tyre_pressure: 21.5,
        rear_right_tyre_pressure: 21.75,
        front_left_tyre_pressure: 23.0,
        front_right_tyre_pressure: 23.25,
        ballast: 6,
        fuel_load: 40.0 + f,
    }
}

fn sample_telemetry(i: u8) -> CarTelemetryData {
    let f = f32::from(i);
    CarTelemetryData {
        speed: 280 + u16::from(i),
        throttle: 0.75,
        steer: -0.125 * f / 22.0,
        brake: 0.25,
        clutch: 10,
        gear: 7 - (i % 9) as i8,
        engine_rpm: 11_000 + u16::from(i),
        drs: i % 2,
        rev_lights_percent: 90,
        brakes_temperature: [500, 510, 620, 630 + u16::from(i)],
        tyres_surface_temperature: [95, 96, 101, 102],
        tyres_inner_temperature: [100, 101, 105, 106],
        engine_temperature: 110,
        tyres_pressure: [21.5, 21.6, 23.1, 23.2],
        surface_type: [0, 1, 4, i % 12],
    }
}

fn sample_status(i: u8) -> CarStatusData {
    let f = f32::from(i);
    CarStatusData {
        traction_control: i % 3,
        anti_lock_brakes: 1,
        fuel_mix: i % 4,
        front_brake_bias: 56,
        pit_limiter_status: 1,
        fuel_in_tank: 35.5 - f,
        fuel_capacity: 110.0,
        fuel_remaining_laps: 1.25,
        max_rpm: 13_000,
        idle_rpm: 4_000,
        max_gears: 8,
        drs_allowed: 1,
        drs_activation_distance: 250,
        tyres_wear: [10, 11, 12, 13 + i],
        actual_tyre_compound: 18,
        visual_tyre_compound: 17,
        tyres_age_laps: 9 + i,
        tyres_damage: [4, 5, 6, 7],
        front_left_wing_damage: 10,
        front_right_wing_damage: 20,
        rear_wing_damage: 5,
        drs_fault: 1,
        engine_damage: 12,
        gear_box_damage: 8,
        vehicle_fia_flags: 3,
        ers_store_energy: 4_000_000.0 - f,
        ers_deploy_mode: 1 + i % 5,
        ers_harvested_this_lap_mguk: 120_000.0,
        ers_harvested_this_lap_mguh: 80_000.0,
        ers_deployed_this_lap: 150_000.0 + f,
    }
}

fn sample_classification(i: u8) -> FinalClassificationData {
    FinalClassificationData {
        position: 1 + i,
        num_laps: 58,
        grid_position: 22 - i,
        points: 25u8.saturating_sub(i),
        num_pit_stops: 1 + i % 3,
        result_status: 3,
        best_lap_time: 88.5 + f32::from(i),
        total_race_time: 5_400.25 + f64::from(i),
        penalties_time: i % 10,
        num_penalties: i % 3,
        num_tyre_stints: 2,
        tyre_stints_actual: [18, 17, 16, 0, 0, 0, 0, i],
        tyre_stints_visual: [17, 16, 0, 0, 0, 0, 0, 22 - i],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_packets_have_registered_sizes() {
        for kind in PacketKind::ALL {
            assert_eq!(zeroed_packet(kind).len(), registry::schema_for(kind).size());
        }
    }

    #[test]
    fn samples_encode_to_registered_sizes() {
        for kind in PacketKind::ALL {
            let packet = sample_packet(kind);
            assert_eq!(packet.kind(), kind);
            assert_eq!(packet.encode().len(), registry::schema_for(kind).size());
        }
    }

    #[test]
    fn event_packet_pads_region() {
        let buf = event_packet(*b"RCWN", &[9]);
        assert_eq!(buf.len(), 35);
        assert_eq!(&buf[28..], &[9, 0, 0, 0, 0, 0, 0]);
    }
}
