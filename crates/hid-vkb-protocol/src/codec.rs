//! 4-byte wire codec for a single LED config.
//!
//! Byte 0 is the light id. Bytes 1-3 carry eight 3-bit fields packed
//! most-significant-field-first as `color_mode, blink_mode, color2.b,
//! color2.g, color2.r, color1.b, color1.g, color1.r`, with the 3-byte group
//! byte-swapped before transmission (little-endian on the wire). The device
//! firmware expects this exact layout; a deviation sets wrong colors or
//! blink speed without any error from the device.

use crate::types::{BlinkMode, Color3, ColorMode, LightConfig, LightId};
use crate::{TERMINATOR_LIGHT_ID, VkbLedError, VkbLedResult};

/// Wire size of one config entry.
pub const ENTRY_LEN: usize = 4;

/// The all-zero entry appended last in every transmitted report. Works
/// around a firmware defect where read-back reports a zero blink mode for
/// the final entry; it has no visual effect.
pub const TERMINATOR_ENTRY: [u8; ENTRY_LEN] = [TERMINATOR_LIGHT_ID, 0, 0, 0];

/// Encode one config into its 4-byte wire entry.
pub fn encode(config: &LightConfig) -> [u8; ENTRY_LEN] {
    let packed = pack_fields(config);
    [
        config.light.wire_id(),
        packed as u8,
        (packed >> 8) as u8,
        (packed >> 16) as u8,
    ]
}

/// Decode a 4-byte wire entry. Exact inverse of [`encode`].
pub fn decode(bytes: &[u8]) -> VkbLedResult<LightConfig> {
    if bytes.len() != ENTRY_LEN {
        return Err(VkbLedError::MalformedConfig(format!(
            "expected {ENTRY_LEN}-byte entry, got {}",
            bytes.len()
        )));
    }

    let light = LightId::from_wire(bytes[0]).ok_or(VkbLedError::UnknownLight(bytes[0]))?;

    let packed =
        u32::from(bytes[1]) | (u32::from(bytes[2]) << 8) | (u32::from(bytes[3]) << 16);

    let color_mode_raw = ((packed >> 21) & 0x7) as u8;
    let blink_mode_raw = ((packed >> 18) & 0x7) as u8;
    let color_mode = ColorMode::from_wire(color_mode_raw)
        .ok_or(VkbLedError::InvalidColorMode(color_mode_raw))?;
    let blink_mode = BlinkMode::from_wire(blink_mode_raw)
        .ok_or(VkbLedError::InvalidBlinkMode(blink_mode_raw))?;

    let color2 = Color3::from_wire(
        ((packed >> 9) & 0x7) as u8,
        ((packed >> 12) & 0x7) as u8,
        ((packed >> 15) & 0x7) as u8,
    );
    let color1 = Color3::from_wire(
        (packed & 0x7) as u8,
        ((packed >> 3) & 0x7) as u8,
        ((packed >> 6) & 0x7) as u8,
    );

    Ok(LightConfig {
        light,
        color_mode,
        blink_mode,
        color1,
        color2,
    })
}

/// Pack the eight 3-bit fields into the 24-bit group, MSB field first.
fn pack_fields(config: &LightConfig) -> u32 {
    (u32::from(config.color_mode.wire()) << 21)
        | (u32::from(config.blink_mode.wire()) << 18)
        | (u32::from(config.color2.b()) << 15)
        | (u32::from(config.color2.g()) << 12)
        | (u32::from(config.color2.r()) << 9)
        | (u32::from(config.color1.b()) << 6)
        | (u32::from(config.color1.g()) << 3)
        | u32::from(config.color1.r())
}
