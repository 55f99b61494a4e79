//! Value types shared across packet records

mod button;
mod codes;
mod fixed_string;

pub use button::{ButtonFlag, ButtonStatus};
pub use codes::{
    DriverStatus, ErsDeployMode, Formula, FuelMix, PitStatus, ReadyStatus, ResultStatus,
    SafetyCarStatus, SessionType, Weather, ZoneFlag,
};
pub use fixed_string::FixedString;

/// Number of car slots in every per-car array.
pub const MAX_CARS: usize = 22;

/// Wheel arrays are ordered rear-left, rear-right, front-left, front-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Wheel {
    RearLeft = 0,
    RearRight = 1,
    FrontLeft = 2,
    FrontRight = 3,
}

impl Wheel {
    pub const ALL: [Wheel; 4] =
        [Wheel::RearLeft, Wheel::RearRight, Wheel::FrontLeft, Wheel::FrontRight];

    /// Index into a four-element wheel array.
    pub const fn index(self) -> usize {
        self as usize
    }
}
