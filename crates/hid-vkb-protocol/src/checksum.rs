//! Transmission checksum for the LED set command.
//!
//! The firmware uses a reflected CRC-16 (polynomial 0xA001, init 0xFFFF, no
//! final xor) over the count byte and the entry bytes, emitted little-endian
//! in the report header.

/// CRC initial value.
pub const CRC_INIT: u16 = 0xFFFF;

/// Reflected CRC-16 polynomial.
pub const CRC_POLY: u16 = 0xA001;

/// Bytewise reflected CRC-16 over `data`.
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc = CRC_INIT;
    for &byte in data {
        crc ^= u16::from(byte);
        for _ in 0..8 {
            let lsb = crc & 1;
            crc >>= 1;
            if lsb != 0 {
                crc ^= CRC_POLY;
            }
        }
    }
    crc
}

/// Checksum of a report payload as the firmware computes it: the first
/// `(count + 1) * 3` bytes starting at the count byte, where `count` is the
/// number of entries including the terminator. The stride covers less than
/// the full entry run. A terminator-only payload is shorter than the stride,
/// so the window is clamped to the payload.
pub(crate) fn report_checksum(payload: &[u8], count: usize) -> u16 {
    let window = ((count + 1) * 3).min(payload.len());
    crc16(&payload[..window])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc16_known_vector() {
        // Standard CRC-16/MODBUS check value.
        assert_eq!(crc16(b"123456789"), 0x4B37);
    }

    #[test]
    fn test_crc16_empty_is_init() {
        assert_eq!(crc16(&[]), CRC_INIT);
    }

    #[test]
    fn test_crc16_deterministic() {
        let data = [0x03, 0x00, 0x07, 0x00, 0x24, 10, 0x58, 0x01, 0x04];
        assert_eq!(crc16(&data), crc16(&data));
    }

    #[test]
    fn test_report_checksum_window() {
        // count=2 entries: the window is exactly 9 of the 9 payload bytes.
        let payload = [0x02, 1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(report_checksum(&payload, 2), crc16(&payload));

        // A longer payload only feeds the first (count+1)*3 bytes.
        let padded = [0x02, 1, 2, 3, 4, 5, 6, 7, 8, 0xAA, 0xBB];
        assert_eq!(report_checksum(&padded, 2), crc16(&payload));
    }
}
