//! USB identifiers and LED feature-report constants for VKB Gladiator sticks.

/// VKBsim USB vendor id.
pub const VKB_VENDOR_ID: u16 = 0x231D;

/// Known product ids that expose the 0x59 LED feature report.
pub mod product_ids {
    /// VKBsim Gladiator EVO R.
    pub const GLADIATOR_EVO_R: u16 = 0x0200;
}

/// HID feature-report id of the LED control report. Doubles as the first
/// opcode byte, so the assembled command is sent to the device unchanged.
pub const LED_REPORT_ID: u8 = 0x59;

/// Fixed length of the LED feature report, report id included.
pub const LED_REPORT_LEN: usize = 129;

/// Operation code prefix of the LED set command.
pub const LED_SET_OPCODE: [u8; 3] = [0x59, 0xA5, 0x0A];

/// Maximum number of real (non-terminator) configs per report. One more
/// slot is always consumed by the terminator entry.
pub const MAX_LIGHT_CONFIGS: usize = 4;

/// Reserved wire id of the terminator entry.
pub const TERMINATOR_LIGHT_ID: u8 = 99;
