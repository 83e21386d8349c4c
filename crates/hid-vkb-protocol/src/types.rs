//! Value types for VKB LED configurations.

use crate::{TERMINATOR_LIGHT_ID, VkbLedError, VkbLedResult};
use serde::{Deserialize, Serialize};

/// Maximum per-channel brightness. VKB uses 0-7 for R, G, and B.
pub const MAX_CHANNEL: u8 = 7;

/// One independently controllable light on the stick.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LightId {
    /// Bi-color (blue/red) LED in the base.
    Base,
    /// Single-color (red) LED under the top hat.
    Hat,
    /// Full RGB LED.
    Rgb,
}

impl LightId {
    pub const ALL: [LightId; 3] = [LightId::Base, LightId::Hat, LightId::Rgb];

    /// Wire id transmitted in byte 0 of a config entry.
    pub const fn wire_id(self) -> u8 {
        match self {
            LightId::Base => 0,
            LightId::Rgb => 10,
            LightId::Hat => 11,
        }
    }

    /// Inverse of [`wire_id`](Self::wire_id). The terminator id (99) is not
    /// a light and maps to `None` like any other unknown id.
    pub const fn from_wire(id: u8) -> Option<LightId> {
        match id {
            0 => Some(LightId::Base),
            10 => Some(LightId::Rgb),
            11 => Some(LightId::Hat),
            _ => None,
        }
    }
}

/// How color1/color2 are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorMode {
    #[default]
    Color1 = 0,
    Color2 = 1,
    /// Alternate color1 -> color2.
    Color1Then2 = 2,
    /// Alternate color2 -> color1.
    Color2Then1 = 3,
    /// Both colors at once.
    Both = 4,
}

impl ColorMode {
    pub const fn wire(self) -> u8 {
        self as u8
    }

    pub const fn from_wire(value: u8) -> Option<ColorMode> {
        match value {
            0 => Some(ColorMode::Color1),
            1 => Some(ColorMode::Color2),
            2 => Some(ColorMode::Color1Then2),
            3 => Some(ColorMode::Color2Then1),
            4 => Some(ColorMode::Both),
            _ => None,
        }
    }
}

/// Steady/blink behavior of a light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlinkMode {
    #[default]
    Off = 0,
    Constant = 1,
    Slow = 2,
    Fast = 3,
    UltraFast = 4,
}

impl BlinkMode {
    pub const fn wire(self) -> u8 {
        self as u8
    }

    pub const fn from_wire(value: u8) -> Option<BlinkMode> {
        match value {
            0 => Some(BlinkMode::Off),
            1 => Some(BlinkMode::Constant),
            2 => Some(BlinkMode::Slow),
            3 => Some(BlinkMode::Fast),
            4 => Some(BlinkMode::UltraFast),
            _ => None,
        }
    }
}

/// An RGB triple with 3-bit channels. Construction validates the 0-7 range;
/// out-of-range brightness is rejected, never silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color3 {
    r: u8,
    g: u8,
    b: u8,
}

impl Color3 {
    /// All channels dark.
    pub const OFF: Color3 = Color3 { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> VkbLedResult<Color3> {
        for (channel, value) in [("red", r), ("green", g), ("blue", b)] {
            if value > MAX_CHANNEL {
                return Err(VkbLedError::InvalidBrightness { channel, value });
            }
        }
        Ok(Color3 { r, g, b })
    }

    /// Construct from 3-bit wire fields. Masked values cannot exceed 7.
    pub(crate) const fn from_wire(r: u8, g: u8, b: u8) -> Color3 {
        Color3 {
            r: r & MAX_CHANNEL,
            g: g & MAX_CHANNEL,
            b: b & MAX_CHANNEL,
        }
    }

    pub const fn r(self) -> u8 {
        self.r
    }

    pub const fn g(self) -> u8 {
        self.g
    }

    pub const fn b(self) -> u8 {
        self.b
    }
}

impl TryFrom<[u8; 3]> for Color3 {
    type Error = VkbLedError;

    fn try_from(rgb: [u8; 3]) -> VkbLedResult<Color3> {
        Color3::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<Color3> for [u8; 3] {
    fn from(c: Color3) -> [u8; 3] {
        [c.r, c.g, c.b]
    }
}

/// Full visual configuration of one light: the 4-byte wire entry in typed
/// form. Equality is structural across all fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightConfig {
    pub light: LightId,
    pub color_mode: ColorMode,
    pub blink_mode: BlinkMode,
    pub color1: Color3,
    pub color2: Color3,
}

impl LightConfig {
    pub fn new(
        light: LightId,
        color_mode: ColorMode,
        blink_mode: BlinkMode,
        color1: Color3,
        color2: Color3,
    ) -> LightConfig {
        LightConfig {
            light,
            color_mode,
            blink_mode,
            color1,
            color2,
        }
    }

    /// An all-off configuration for the given light.
    pub const fn off(light: LightId) -> LightConfig {
        LightConfig {
            light,
            color_mode: ColorMode::Color1,
            blink_mode: BlinkMode::Off,
            color1: Color3::OFF,
            color2: Color3::OFF,
        }
    }
}
