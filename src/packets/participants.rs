//! Participants packet (id 4)

use serde::{Deserialize, Serialize};

use super::PacketHeader;
use crate::lookup;
use crate::types::{FixedString, MAX_CARS};
use crate::wire::wire_struct;

/// Width of participant and lobby name fields.
pub const NAME_SIZE: usize = 48;

wire_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct ParticipantData {
        /// 1 AI, 0 human
        pub ai_controlled: u8,
        pub driver_id: u8,
        pub team_id: u8,
        pub race_number: u8,
        pub nationality: u8,
        /// UTF-8, NUL-terminated, truncated with an ellipsis if too long
        pub name: FixedString<NAME_SIZE>,
        /// 0 restricted, 1 public
        pub your_telemetry: u8,
    }
}

impl ParticipantData {
    pub fn is_ai_controlled(&self) -> bool {
        self.ai_controlled != 0
    }

    pub fn driver_name(&self) -> Option<&'static str> {
        lookup::driver_name(self.driver_id)
    }

    pub fn team_name(&self) -> Option<&'static str> {
        lookup::team_name(self.team_id)
    }

    pub fn nationality_name(&self) -> Option<&'static str> {
        lookup::nationality_name(self.nationality)
    }
}

wire_struct! {
    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct PacketParticipantsData {
        pub header: PacketHeader,
        pub num_active_cars: u8,
        pub participants: [ParticipantData; MAX_CARS],
    }
}

impl PacketParticipantsData {
    pub fn player_car(&self) -> Option<&ParticipantData> {
        self.participants.get(usize::from(self.header.player_car_index))
    }

    /// Participants in use, clamped to the array length.
    pub fn active(&self) -> &[ParticipantData] {
        let count = usize::from(self.num_active_cars).min(MAX_CARS);
        &self.participants[..count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{Layout, WireFormat};

    #[test]
    fn layout_sizes() {
        assert_eq!(<ParticipantData as WireFormat>::SIZE, 54);
        assert_eq!(<PacketParticipantsData as WireFormat>::SIZE, 1213);
        assert_eq!(ParticipantData::offset_of("name"), Some(5));
        assert_eq!(ParticipantData::offset_of("your_telemetry"), Some(53));
        assert_eq!(PacketParticipantsData::offset_of("participants"), Some(25));
    }

    #[test]
    fn lookups_resolve_ids() {
        let driver = ParticipantData {
            driver_id: 34,
            team_id: 1,
            nationality: 10,
            name: FixedString::new("KAUFMANN"),
            ..Default::default()
        };
        assert_eq!(driver.driver_name(), Some("Wilhelm Kaufmann"));
        assert_eq!(driver.team_name(), Some("Ferrari"));
        assert_eq!(driver.nationality_name(), Some("British"));
        assert_eq!(driver.name.as_str(), "KAUFMANN");
        assert!(!driver.is_ai_controlled());
    }

    #[test]
    fn active_is_clamped() {
        let packet = PacketParticipantsData { num_active_cars: 40, ..Default::default() };
        assert_eq!(packet.active().len(), MAX_CARS);
    }
}
