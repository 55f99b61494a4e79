//! Controller button bitfield carried by the car telemetry packet

use serde::{Deserialize, Serialize};

/// Bit masks for the `button_status` field of the car telemetry packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum ButtonFlag {
    Cross = 0x0001,
    Triangle = 0x0002,
    Circle = 0x0004,
    Square = 0x0008,
    DPadLeft = 0x0010,
    DPadRight = 0x0020,
    DPadUp = 0x0040,
    DPadDown = 0x0080,
    Options = 0x0100,
    L1 = 0x0200,
    R1 = 0x0400,
    L2 = 0x0800,
    R2 = 0x1000,
    LeftStickClick = 0x2000,
    RightStickClick = 0x4000,
}

impl ButtonFlag {
    /// All flags in ascending mask order.
    pub const ALL: [ButtonFlag; 15] = [
        ButtonFlag::Cross,
        ButtonFlag::Triangle,
        ButtonFlag::Circle,
        ButtonFlag::Square,
        ButtonFlag::DPadLeft,
        ButtonFlag::DPadRight,
        ButtonFlag::DPadUp,
        ButtonFlag::DPadDown,
        ButtonFlag::Options,
        ButtonFlag::L1,
        ButtonFlag::R1,
        ButtonFlag::L2,
        ButtonFlag::R2,
        ButtonFlag::LeftStickClick,
        ButtonFlag::RightStickClick,
    ];

    pub const fn mask(self) -> u32 {
        self as u32
    }

    /// Button name covering both PlayStation and Xbox controllers.
    pub const fn description(self) -> &'static str {
        match self {
            ButtonFlag::Cross => "Cross or A",
            ButtonFlag::Triangle => "Triangle or Y",
            ButtonFlag::Circle => "Circle or B",
            ButtonFlag::Square => "Square or X",
            ButtonFlag::DPadLeft => "D-pad Left",
            ButtonFlag::DPadRight => "D-pad Right",
            ButtonFlag::DPadUp => "D-pad Up",
            ButtonFlag::DPadDown => "D-pad Down",
            ButtonFlag::Options => "Options or Menu",
            ButtonFlag::L1 => "L1 or LB",
            ButtonFlag::R1 => "R1 or RB",
            ButtonFlag::L2 => "L2 or LT",
            ButtonFlag::R2 => "R2 or RT",
            ButtonFlag::LeftStickClick => "Left Stick Click",
            ButtonFlag::RightStickClick => "Right Stick Click",
        }
    }

    /// Look up the flag for a single-bit mask.
    pub fn from_mask(mask: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.mask() == mask)
    }
}

/// Typed view of the raw `button_status` word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ButtonStatus(pub u32);

impl ButtonStatus {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Check if a button is held.
    pub fn is_pressed(&self, flag: ButtonFlag) -> bool {
        (self.0 & flag.mask()) != 0
    }

    /// Held buttons, in ascending mask order. Bits without a named flag are skipped.
    pub fn pressed(&self) -> impl Iterator<Item = ButtonFlag> + '_ {
        ButtonFlag::ALL.into_iter().filter(|flag| self.is_pressed(*flag))
    }

    /// Get the raw u32 value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ButtonStatus {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
