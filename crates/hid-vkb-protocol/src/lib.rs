//! VKB Gladiator HID LED protocol: config encoding, report assembly, and checksums.
//!
//! This crate is intentionally I/O-free. It provides pure functions and types
//! for the fixed-length LED feature report so encoding can be tested and
//! fuzzed without hardware or OS-level HID plumbing. Device access lives in
//! `openstick-engine`.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod checksum;
pub mod codec;
pub mod ids;
pub mod report;
pub mod types;

// Flat re-exports so callers can use `hid_vkb_protocol::Foo`.
pub use checksum::crc16;
pub use codec::{TERMINATOR_ENTRY, decode, encode};
pub use ids::{
    LED_REPORT_ID, LED_REPORT_LEN, LED_SET_OPCODE, MAX_LIGHT_CONFIGS, TERMINATOR_LIGHT_ID,
    VKB_VENDOR_ID, product_ids,
};
pub use report::{build_report, parse_report};
pub use types::{BlinkMode, Color3, ColorMode, LightConfig, LightId, MAX_CHANNEL};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VkbLedError {
    #[error("brightness {value} out of range for {channel} channel (0-{MAX_CHANNEL})")]
    InvalidBrightness { channel: &'static str, value: u8 },

    #[error("malformed LED config: {0}")]
    MalformedConfig(String),

    #[error("unknown light id: {0}")]
    UnknownLight(u8),

    #[error("color mode {0} out of range")]
    InvalidColorMode(u8),

    #[error("blink mode {0} out of range")]
    InvalidBlinkMode(u8),

    #[error("can only set a maximum of {MAX_LIGHT_CONFIGS} LED configs, got {0}")]
    TooManyConfigs(usize),

    #[error("report checksum mismatch: expected {expected:#06x}, computed {actual:#06x}")]
    ChecksumMismatch { expected: u16, actual: u16 },

    #[error("report overflows fixed length: {len} > {LED_REPORT_LEN}")]
    ReportOverflow { len: usize },
}

pub type VkbLedResult<T> = Result<T, VkbLedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VkbLedError::UnknownLight(42);
        assert_eq!(format!("{err}"), "unknown light id: 42");

        let err = VkbLedError::TooManyConfigs(7);
        assert_eq!(
            format!("{err}"),
            "can only set a maximum of 4 LED configs, got 7"
        );
    }
}
