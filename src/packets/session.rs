//! Session packet (id 1)

use serde::{Deserialize, Serialize};

use super::PacketHeader;
use crate::types::{Formula, SafetyCarStatus, SessionType, Weather, ZoneFlag};
use crate::wire::wire_struct;

/// Number of marshal zone slots.
pub const MAX_MARSHAL_ZONES: usize = 21;

/// Number of weather forecast slots.
pub const MAX_WEATHER_SAMPLES: usize = 20;

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct MarshalZone {
        /// Fraction (0..1) of the lap where the zone starts
        pub zone_start: f32,
        /// -1 invalid/unknown, 0 none, 1 green, 2 blue, 3 yellow, 4 red
        pub zone_flag: i8,
    }
}

impl MarshalZone {
    pub fn flag(&self) -> ZoneFlag {
        ZoneFlag::from_raw(self.zone_flag)
    }
}

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct WeatherForecastSample {
        pub session_type: u8,
        /// Minutes ahead the forecast is for
        pub time_offset: u8,
        pub weather: u8,
        /// Degrees celsius
        pub track_temperature: i8,
        /// Degrees celsius
        pub air_temperature: i8,
    }
}

impl WeatherForecastSample {
    pub fn weather(&self) -> Weather {
        Weather::from_raw(self.weather)
    }

    pub fn session_type(&self) -> SessionType {
        SessionType::from_raw(self.session_type)
    }
}

wire_struct! {
    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct PacketSessionData {
        pub header: PacketHeader,
        pub weather: u8,
        pub track_temperature: i8,
        pub air_temperature: i8,
        pub total_laps: u8,
        /// Metres
        pub track_length: u16,
        pub session_type: u8,
        /// -1 for unknown, see [`crate::lookup::track_name`]
        pub track_id: i8,
        pub formula: u8,
        /// Seconds
        pub session_time_left: u16,
        /// Seconds
        pub session_duration: u16,
        /// Kilometres per hour
        pub pit_speed_limit: u8,
        pub game_paused: u8,
        pub is_spectating: u8,
        pub spectator_car_index: u8,
        pub sli_pro_native_support: u8,
        pub num_marshal_zones: u8,
        pub marshal_zones: [MarshalZone; MAX_MARSHAL_ZONES],
        pub safety_car_status: u8,
        /// 0 offline, 1 online
        pub network_game: u8,
        pub num_weather_forecast_samples: u8,
        pub weather_forecast_samples: [WeatherForecastSample; MAX_WEATHER_SAMPLES],
    }
}

impl PacketSessionData {
    pub fn weather(&self) -> Weather {
        Weather::from_raw(self.weather)
    }

    pub fn session_type(&self) -> SessionType {
        SessionType::from_raw(self.session_type)
    }

    pub fn formula(&self) -> Formula {
        Formula::from_raw(self.formula)
    }

    pub fn safety_car_status(&self) -> SafetyCarStatus {
        SafetyCarStatus::from_raw(self.safety_car_status)
    }

    /// Marshal zones in use, clamped to the array length.
    pub fn active_marshal_zones(&self) -> &[MarshalZone] {
        let count = usize::from(self.num_marshal_zones).min(MAX_MARSHAL_ZONES);
        &self.marshal_zones[..count]
    }

    /// Forecast samples in use, clamped to the array length.
    pub fn active_weather_forecast(&self) -> &[WeatherForecastSample] {
        let count = usize::from(self.num_weather_forecast_samples).min(MAX_WEATHER_SAMPLES);
        &self.weather_forecast_samples[..count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{Layout, WireFormat};

    #[test]
    fn layout_sizes() {
        assert_eq!(<MarshalZone as WireFormat>::SIZE, 5);
        assert_eq!(<WeatherForecastSample as WireFormat>::SIZE, 5);
        assert_eq!(<PacketSessionData as WireFormat>::SIZE, 251);
        assert_eq!(PacketSessionData::offset_of("track_length"), Some(28));
        assert_eq!(PacketSessionData::offset_of("marshal_zones"), Some(43));
        assert_eq!(PacketSessionData::offset_of("safety_car_status"), Some(148));
        assert_eq!(PacketSessionData::offset_of("weather_forecast_samples"), Some(151));
    }

    #[test]
    fn active_slices_respect_counts() {
        let mut packet = PacketSessionData {
            num_marshal_zones: 3,
            num_weather_forecast_samples: 200,
            ..Default::default()
        };
        packet.marshal_zones[2].zone_flag = 3;
        assert_eq!(packet.active_marshal_zones().len(), 3);
        assert_eq!(packet.active_marshal_zones()[2].flag(), ZoneFlag::Yellow);
        assert_eq!(packet.active_weather_forecast().len(), MAX_WEATHER_SAMPLES);
    }

    #[test]
    fn coded_fields_have_typed_views() {
        let packet = PacketSessionData {
            weather: 3,
            session_type: 10,
            formula: 2,
            safety_car_status: 2,
            ..Default::default()
        };
        assert_eq!(packet.weather(), Weather::LightRain);
        assert_eq!(packet.session_type(), SessionType::Race);
        assert_eq!(packet.formula(), Formula::F2);
        assert_eq!(packet.safety_car_status(), SafetyCarStatus::Virtual);
    }
}
