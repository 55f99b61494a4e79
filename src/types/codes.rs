//! Typed views of coded telemetry fields
//!
//! Records keep these fields as their raw integers so decode never fails on an
//! out-of-range code. The enums here are for presentation: values the game documents
//! map to a named variant, anything else lands in `Unknown(raw)`.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $raw:ty {
            $( $variant:ident = $value:literal => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $variant, )+
            Unknown($raw),
        }

        impl $name {
            pub fn from_raw(raw: $raw) -> Self {
                match raw {
                    $( $value => $name::$variant, )+
                    other => $name::Unknown(other),
                }
            }

            pub fn raw(self) -> $raw {
                match self {
                    $( $name::$variant => $value, )+
                    $name::Unknown(other) => other,
                }
            }

            pub fn description(self) -> &'static str {
                match self {
                    $( $name::$variant => $text, )+
                    $name::Unknown(_) => "Unknown",
                }
            }
        }

        impl From<$raw> for $name {
            fn from(raw: $raw) -> Self {
                Self::from_raw(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $name::Unknown(raw) => write!(f, "Unknown ({raw})"),
                    known => f.write_str(known.description()),
                }
            }
        }
    };
}

coded_enum! {
    /// Current or forecast weather
    pub enum Weather: u8 {
        Clear = 0 => "Clear",
        LightCloud = 1 => "Light cloud",
        Overcast = 2 => "Overcast",
        LightRain = 3 => "Light rain",
        HeavyRain = 4 => "Heavy rain",
        Storm = 5 => "Storm",
    }
}

coded_enum! {
    pub enum SessionType: u8 {
        Unspecified = 0 => "Unknown",
        Practice1 = 1 => "P1",
        Practice2 = 2 => "P2",
        Practice3 = 3 => "P3",
        ShortPractice = 4 => "Short P",
        Qualifying1 = 5 => "Q1",
        Qualifying2 = 6 => "Q2",
        Qualifying3 = 7 => "Q3",
        ShortQualifying = 8 => "Short Q",
        OneShotQualifying = 9 => "OSQ",
        Race = 10 => "R",
        Race2 = 11 => "R2",
        TimeTrial = 12 => "Time Trial",
    }
}

coded_enum! {
    pub enum Formula: u8 {
        F1Modern = 0 => "F1 Modern",
        F1Classic = 1 => "F1 Classic",
        F2 = 2 => "F2",
        F1Generic = 3 => "F1 Generic",
    }
}

coded_enum! {
    pub enum SafetyCarStatus: u8 {
        None = 0 => "No safety car",
        Full = 1 => "Full safety car",
        Virtual = 2 => "Virtual safety car",
        FormationLap = 3 => "Formation lap safety car",
    }
}

coded_enum! {
    /// Marshal zone flag, also used for `vehicle_fia_flags`
    pub enum ZoneFlag: i8 {
        Invalid = -1 => "Invalid/unknown",
        None = 0 => "None",
        Green = 1 => "Green",
        Blue = 2 => "Blue",
        Yellow = 3 => "Yellow",
        Red = 4 => "Red",
    }
}

coded_enum! {
    pub enum PitStatus: u8 {
        None = 0 => "None",
        Pitting = 1 => "Pitting",
        InPitArea = 2 => "In pit area",
    }
}

coded_enum! {
    pub enum DriverStatus: u8 {
        InGarage = 0 => "In garage",
        FlyingLap = 1 => "Flying lap",
        InLap = 2 => "In lap",
        OutLap = 3 => "Out lap",
        OnTrack = 4 => "On track",
    }
}

coded_enum! {
    pub enum ResultStatus: u8 {
        Invalid = 0 => "Invalid",
        Inactive = 1 => "Inactive",
        Active = 2 => "Active",
        Finished = 3 => "Finished",
        Disqualified = 4 => "Disqualified",
        NotClassified = 5 => "Not classified",
        Retired = 6 => "Retired",
    }
}

coded_enum! {
    /// Lobby readiness
    pub enum ReadyStatus: u8 {
        NotReady = 0 => "Not ready",
        Ready = 1 => "Ready",
        Spectating = 2 => "Spectating",
    }
}

coded_enum! {
    pub enum ErsDeployMode: u8 {
        None = 0 => "None",
        Low = 1 => "Low",
        Medium = 2 => "Medium",
        High = 3 => "High",
        Overtake = 4 => "Overtake",
        Hotlap = 5 => "Hotlap",
    }
}

coded_enum! {
    pub enum FuelMix: u8 {
        Lean = 0 => "Lean",
        Standard = 1 => "Standard",
        Rich = 2 => "Rich",
        Max = 3 => "Max",
    }
}
