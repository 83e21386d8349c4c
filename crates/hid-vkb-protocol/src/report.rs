//! Assembly and parsing of the fixed-length LED feature report.
//!
//! Wire layout, 129 bytes total:
//! `[opcode 0x59 0xA5 0x0A][checksum u16 LE][nonce 2][count 1]`
//! `[count x 4-byte entries, last always the terminator][zero padding]`

use crate::checksum::report_checksum;
use crate::codec::{ENTRY_LEN, TERMINATOR_ENTRY, decode, encode};
use crate::ids::{LED_REPORT_LEN, LED_SET_OPCODE, MAX_LIGHT_CONFIGS};
use crate::types::LightConfig;
use crate::{VkbLedError, VkbLedResult};

/// Offset of the count byte within the report.
const COUNT_OFFSET: usize = 7;

/// Build the full 129-byte set command for the given visible configs.
///
/// The terminator entry is appended automatically; callers pass only real
/// configs, at most [`MAX_LIGHT_CONFIGS`]. The nonce is caller-supplied so
/// this crate stays deterministic; it does not participate in the checksum.
pub fn build_report(configs: &[LightConfig], nonce: [u8; 2]) -> VkbLedResult<Vec<u8>> {
    if configs.len() > MAX_LIGHT_CONFIGS {
        return Err(VkbLedError::TooManyConfigs(configs.len()));
    }

    let count = configs.len() + 1;
    let mut payload = Vec::with_capacity(1 + count * ENTRY_LEN);
    payload.push(count as u8);
    for config in configs {
        payload.extend_from_slice(&encode(config));
    }
    payload.extend_from_slice(&TERMINATOR_ENTRY);

    let checksum = report_checksum(&payload, count);

    let mut cmd = Vec::with_capacity(LED_REPORT_LEN);
    cmd.extend_from_slice(&LED_SET_OPCODE);
    cmd.extend_from_slice(&checksum.to_le_bytes());
    cmd.extend_from_slice(&nonce);
    cmd.extend_from_slice(&payload);
    if cmd.len() > LED_REPORT_LEN {
        return Err(VkbLedError::ReportOverflow { len: cmd.len() });
    }
    cmd.resize(LED_REPORT_LEN, 0);
    Ok(cmd)
}

/// Parse a read-back LED report into its real configs.
///
/// A device that has never been written returns a report without the opcode
/// prefix; that parses as the empty set rather than an error. The terminator
/// entry is validated against the checksum but not returned. Read-back of
/// the last real entry is unreliable on this firmware (its blink mode reads
/// as zero), which is why the terminator exists at all.
pub fn parse_report(data: &[u8]) -> VkbLedResult<Vec<LightConfig>> {
    if data.len() < COUNT_OFFSET + 1 {
        return Err(VkbLedError::MalformedConfig(format!(
            "report too short: {} bytes",
            data.len()
        )));
    }
    if data[..3] != LED_SET_OPCODE {
        return Ok(Vec::new());
    }

    let expected = u16::from_le_bytes([data[3], data[4]]);
    let count = usize::from(data[COUNT_OFFSET]);
    if count == 0 {
        return Err(VkbLedError::MalformedConfig(
            "entry count 0 (missing terminator)".to_string(),
        ));
    }
    if count > MAX_LIGHT_CONFIGS + 1 {
        return Err(VkbLedError::TooManyConfigs(count - 1));
    }

    let entries_end = COUNT_OFFSET + 1 + count * ENTRY_LEN;
    let payload = data
        .get(COUNT_OFFSET..entries_end)
        .ok_or_else(|| {
            VkbLedError::MalformedConfig(format!(
                "truncated report: need {entries_end} bytes, got {}",
                data.len()
            ))
        })?;

    let actual = report_checksum(payload, count);
    if actual != expected {
        return Err(VkbLedError::ChecksumMismatch { expected, actual });
    }

    // Skip the count byte, decode all entries but the terminator.
    payload[1..]
        .chunks_exact(ENTRY_LEN)
        .take(count - 1)
        .map(decode)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BlinkMode, Color3, ColorMode, LightId};

    const NONCE: [u8; 2] = [0xDE, 0xAD];

    fn rgb_config(r: u8, g: u8, b: u8) -> LightConfig {
        LightConfig {
            light: LightId::Rgb,
            color_mode: ColorMode::Color1,
            blink_mode: BlinkMode::Constant,
            color1: Color3::new(r, g, b).expect("valid color"),
            color2: Color3::OFF,
        }
    }

    #[test]
    fn test_report_is_exactly_fixed_length() {
        for n in 0..=MAX_LIGHT_CONFIGS {
            let configs: Vec<_> = (0..n).map(|_| rgb_config(1, 2, 3)).collect();
            let report = build_report(&configs, NONCE).expect("build");
            assert_eq!(report.len(), LED_REPORT_LEN);
        }
    }

    #[test]
    fn test_report_layout() {
        let report = build_report(&[rgb_config(0, 3, 5)], NONCE).expect("build");

        assert_eq!(&report[..3], &LED_SET_OPCODE);
        assert_eq!(&report[5..7], &NONCE);
        assert_eq!(report[COUNT_OFFSET], 2);
        assert_eq!(&report[8..12], &[10, 0x58, 0x01, 0x04]);
        assert_eq!(&report[12..16], &TERMINATOR_ENTRY);
        assert!(report[16..].iter().all(|&b| b == 0), "zero padding");
    }

    #[test]
    fn test_terminator_always_last() {
        let configs = vec![rgb_config(1, 1, 1), LightConfig::off(LightId::Base)];
        let report = build_report(&configs, NONCE).expect("build");
        let last_entry = 8 + 2 * 4;
        assert_eq!(&report[last_entry..last_entry + 4], &TERMINATOR_ENTRY);
    }

    #[test]
    fn test_too_many_configs() {
        let configs: Vec<_> = (0..5).map(|_| rgb_config(1, 1, 1)).collect();
        assert_eq!(
            build_report(&configs, NONCE),
            Err(VkbLedError::TooManyConfigs(5))
        );
    }

    #[test]
    fn test_checksum_ignores_nonce() {
        let a = build_report(&[rgb_config(2, 2, 2)], [0x00, 0x00]).expect("build");
        let b = build_report(&[rgb_config(2, 2, 2)], [0xFF, 0xFF]).expect("build");
        assert_eq!(a[3..5], b[3..5], "checksum must not depend on the nonce");
        assert_ne!(a[5..7], b[5..7]);
    }

    #[test]
    fn test_parse_round_trips_build() {
        let configs = vec![
            rgb_config(0, 3, 5),
            LightConfig {
                light: LightId::Base,
                color_mode: ColorMode::Both,
                blink_mode: BlinkMode::Slow,
                color1: Color3::new(7, 0, 0).expect("valid color"),
                color2: Color3::new(5, 0, 0).expect("valid color"),
            },
        ];
        let report = build_report(&configs, NONCE).expect("build");
        assert_eq!(parse_report(&report).expect("parse"), configs);
    }

    #[test]
    fn test_parse_unset_device_is_empty() {
        // Before the first set command the report does not carry the opcode.
        let blank = vec![0u8; LED_REPORT_LEN];
        assert_eq!(parse_report(&blank).expect("parse"), Vec::new());
    }

    #[test]
    fn test_parse_rejects_corrupted_entry() {
        let mut report = build_report(&[rgb_config(1, 2, 3)], NONCE).expect("build");
        report[9] ^= 0xFF;
        assert!(matches!(
            parse_report(&report),
            Err(VkbLedError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_short_buffer() {
        assert!(matches!(
            parse_report(&[0x59, 0xA5]),
            Err(VkbLedError::MalformedConfig(_))
        ));
    }
}
