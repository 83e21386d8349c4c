//! Property-based tests for the LED config codec and report builder.
//!
//! Covers codec round-trip fidelity over the full valid input space, the
//! fixed report-size invariant, and nonce-independence of the checksum.

use hid_vkb_protocol::{
    BlinkMode, Color3, ColorMode, LED_REPORT_LEN, LightConfig, LightId, MAX_LIGHT_CONFIGS,
    build_report, decode, encode,
};
use proptest::prelude::*;

fn arb_light() -> impl Strategy<Value = LightId> {
    prop_oneof![
        Just(LightId::Base),
        Just(LightId::Hat),
        Just(LightId::Rgb),
    ]
}

fn arb_color() -> impl Strategy<Value = Color3> {
    (0u8..=7, 0u8..=7, 0u8..=7).prop_map(|(r, g, b)| {
        Color3::new(r, g, b).unwrap_or(Color3::OFF)
    })
}

fn arb_config() -> impl Strategy<Value = LightConfig> {
    (arb_light(), 0u8..=4, 0u8..=4, arb_color(), arb_color()).prop_map(
        |(light, cm, bm, color1, color2)| LightConfig {
            light,
            color_mode: ColorMode::from_wire(cm).unwrap_or(ColorMode::Color1),
            blink_mode: BlinkMode::from_wire(bm).unwrap_or(BlinkMode::Off),
            color1,
            color2,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// decode(encode(c)) == c for every valid config.
    #[test]
    fn prop_codec_round_trip(config in arb_config()) {
        let encoded = encode(&config);
        let decoded = decode(&encoded);
        prop_assert_eq!(decoded, Ok(config));
    }

    /// The wire id is always byte 0 and the packed group stays in 3 bytes.
    #[test]
    fn prop_entry_structure(config in arb_config()) {
        let encoded = encode(&config);
        prop_assert_eq!(encoded[0], config.light.wire_id());
        // The color-mode field occupies the top 3 bits of the MSB byte and
        // never exceeds its wire range.
        prop_assert!(encoded[3] >> 5 <= 4);
    }

    /// Reports are always exactly 129 bytes for every accepted config count.
    #[test]
    fn prop_report_fixed_size(
        configs in prop::collection::vec(arb_config(), 0..=MAX_LIGHT_CONFIGS),
        nonce in prop::array::uniform2(any::<u8>()),
    ) {
        let report = build_report(&configs, nonce);
        prop_assert!(report.is_ok());
        if let Ok(report) = report {
            prop_assert_eq!(report.len(), LED_REPORT_LEN);
        }
    }

    /// Identical configs yield identical checksums regardless of nonce.
    #[test]
    fn prop_checksum_nonce_independent(
        configs in prop::collection::vec(arb_config(), 1..=MAX_LIGHT_CONFIGS),
        nonce_a in prop::array::uniform2(any::<u8>()),
        nonce_b in prop::array::uniform2(any::<u8>()),
    ) {
        let a = build_report(&configs, nonce_a);
        let b = build_report(&configs, nonce_b);
        prop_assert!(a.is_ok() && b.is_ok());
        if let (Ok(a), Ok(b)) = (a, b) {
            prop_assert_eq!(&a[3..5], &b[3..5]);
        }
    }
}
