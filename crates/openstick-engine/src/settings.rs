//! Static user settings and their translation into LED configurations.
//!
//! These mirror the values a user enters in the host application's per-light
//! settings (1-based mode numbers, 0-7 brightness). Validation happens here,
//! at construction time; the wire layer never sees out-of-range values.

use hid_vkb_protocol::{
    BlinkMode, Color3, ColorMode, LightConfig, LightId, VkbLedError, VkbLedResult,
};
use openstick_activation::{ModeChange, ModeName, TriggerEvent, TriggerId};
use serde::{Deserialize, Serialize};

fn blink_from_setting(value: u8) -> VkbLedResult<BlinkMode> {
    // Settings use the wire numbering directly but 0 (off) is not a choice.
    match value {
        1..=4 => BlinkMode::from_wire(value).ok_or(VkbLedError::InvalidBlinkMode(value)),
        _ => Err(VkbLedError::InvalidBlinkMode(value)),
    }
}

/// Base LED: a blue/red bi-color lamp. Color mode is 1-based:
/// 1 = blue, 2 = red, 3 = blue/red, 4 = red/blue, 5 = blue & red.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseLedSettings {
    pub color_mode: u8,
    pub blink_mode: u8,
    pub blue_brightness: u8,
    pub red_brightness: u8,
}

impl Default for BaseLedSettings {
    fn default() -> Self {
        BaseLedSettings {
            color_mode: 1,
            blink_mode: 1,
            blue_brightness: 7,
            red_brightness: 7,
        }
    }
}

impl BaseLedSettings {
    pub fn light_config(&self) -> VkbLedResult<LightConfig> {
        if !(1..=5).contains(&self.color_mode) {
            return Err(VkbLedError::InvalidColorMode(self.color_mode));
        }
        let blink_mode = blink_from_setting(self.blink_mode)?;

        // A constant blink cannot alternate, so the alternating modes
        // collapse to showing both colors at once.
        let color_mode = if blink_mode == BlinkMode::Constant
            && (self.color_mode == 3 || self.color_mode == 4)
        {
            ColorMode::Both
        } else {
            ColorMode::from_wire(self.color_mode - 1)
                .ok_or(VkbLedError::InvalidColorMode(self.color_mode))?
        };

        // The bi-color lamp is driven through the first channel of each
        // color slot: blue via color1, red via color2.
        let blue = Color3::new(self.blue_brightness, 0, 0)?;
        let red = Color3::new(self.red_brightness, 0, 0)?;
        let (color1, color2) = match color_mode {
            ColorMode::Color1 => (blue, Color3::OFF),
            ColorMode::Color2 => (red, Color3::OFF),
            _ => (blue, red),
        };

        Ok(LightConfig {
            light: LightId::Base,
            color_mode,
            blink_mode,
            color1,
            color2,
        })
    }

    /// The base lamp goes dark when nothing claims it.
    pub fn default_config(&self) -> LightConfig {
        LightConfig::off(LightId::Base)
    }
}

/// Hat LED: single red lamp, blink mode plus brightness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HatLedSettings {
    pub blink_mode: u8,
    pub red_brightness: u8,
}

impl Default for HatLedSettings {
    fn default() -> Self {
        HatLedSettings {
            blink_mode: 1,
            red_brightness: 7,
        }
    }
}

impl HatLedSettings {
    pub fn light_config(&self) -> VkbLedResult<LightConfig> {
        Ok(LightConfig {
            light: LightId::Hat,
            color_mode: ColorMode::Color1,
            blink_mode: blink_from_setting(self.blink_mode)?,
            color1: Color3::new(self.red_brightness, 0, 0)?,
            color2: Color3::OFF,
        })
    }

    pub fn default_config(&self) -> LightConfig {
        LightConfig::off(LightId::Hat)
    }
}

/// RGB LED: full two-color configuration plus the restore color shown when
/// no trigger claims the light. Color mode is 1-based:
/// 1 = color1, 2 = color2, 3 = color1->2, 4 = color2->1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbLedSettings {
    pub color_mode: u8,
    pub blink_mode: u8,
    pub color1: [u8; 3],
    pub color2: [u8; 3],
    pub default_color: [u8; 3],
}

impl Default for RgbLedSettings {
    fn default() -> Self {
        RgbLedSettings {
            color_mode: 1,
            blink_mode: 1,
            color1: [0, 0, 0],
            color2: [0, 0, 0],
            default_color: [0, 3, 5],
        }
    }
}

impl RgbLedSettings {
    pub fn light_config(&self) -> VkbLedResult<LightConfig> {
        if !(1..=4).contains(&self.color_mode) {
            return Err(VkbLedError::InvalidColorMode(self.color_mode));
        }
        Ok(LightConfig {
            light: LightId::Rgb,
            color_mode: ColorMode::from_wire(self.color_mode - 1)
                .ok_or(VkbLedError::InvalidColorMode(self.color_mode))?,
            blink_mode: blink_from_setting(self.blink_mode)?,
            color1: Color3::try_from(self.color1)?,
            color2: Color3::try_from(self.color2)?,
        })
    }

    /// The RGB lamp restores to a steady default color, not to dark.
    pub fn default_config(&self) -> VkbLedResult<LightConfig> {
        Ok(LightConfig {
            light: LightId::Rgb,
            color_mode: ColorMode::Color1,
            blink_mode: BlinkMode::Constant,
            color1: Color3::try_from(self.default_color)?,
            color2: Color3::OFF,
        })
    }
}

/// All three lights' settings, as supplied by the host application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedSettings {
    pub base: BaseLedSettings,
    pub hat: HatLedSettings,
    pub rgb: RgbLedSettings,
}

impl LedSettings {
    pub fn light_config(&self, light: LightId) -> VkbLedResult<LightConfig> {
        match light {
            LightId::Base => self.base.light_config(),
            LightId::Hat => self.hat.light_config(),
            LightId::Rgb => self.rgb.light_config(),
        }
    }

    pub fn default_config(&self, light: LightId) -> VkbLedResult<LightConfig> {
        match light {
            LightId::Base => Ok(self.base.default_config()),
            LightId::Hat => Ok(self.hat.default_config()),
            LightId::Rgb => self.rgb.default_config(),
        }
    }
}

/// One configured trigger: everything needed to turn a raw press/release
/// into a [`TriggerEvent`]. Built once at setup from static configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerBinding {
    pub trigger: TriggerId,
    pub mode: ModeName,
    pub while_pressed: bool,
    pub changes_mode: ModeChange,
    pub config: LightConfig,
    pub default_config: LightConfig,
}

impl TriggerBinding {
    pub fn event(&self, is_pressed: bool) -> TriggerEvent {
        TriggerEvent {
            trigger: self.trigger.clone(),
            light: self.config.light,
            mode: self.mode.clone(),
            is_pressed,
            while_pressed: self.while_pressed,
            changes_mode: self.changes_mode,
            config: self.config,
            default_config: self.default_config,
        }
    }
}
