//! hidapi-backed transport for the physical stick.
//!
//! The device is an exclusive-access scoped resource: every operation opens
//! it, performs exactly one feature-report call, and closes it again (the
//! handle drops on all paths, including errors). Nothing holds the device
//! across events.

use crate::transport::{LedTransport, TransportError};
use hid_vkb_protocol::{LED_REPORT_ID, LED_REPORT_LEN, VKB_VENDOR_ID, product_ids};
use hidapi::HidApi;
use tracing::{debug, trace};

/// Transport addressing one VKB stick by vendor/product id.
#[derive(Debug, Clone)]
pub struct VkbHidTransport {
    vendor_id: u16,
    product_id: u16,
}

impl VkbHidTransport {
    /// Transport for the Gladiator EVO R.
    pub fn new() -> VkbHidTransport {
        VkbHidTransport::with_ids(VKB_VENDOR_ID, product_ids::GLADIATOR_EVO_R)
    }

    pub fn with_ids(vendor_id: u16, product_id: u16) -> VkbHidTransport {
        VkbHidTransport {
            vendor_id,
            product_id,
        }
    }

    fn open(&self) -> Result<hidapi::HidDevice, TransportError> {
        let api = HidApi::new().map_err(|e| TransportError::Io(e.to_string()))?;
        let device = api
            .open(self.vendor_id, self.product_id)
            .map_err(|_| TransportError::Unavailable)?;
        trace!(
            vendor_id = format_args!("{:#06x}", self.vendor_id),
            product_id = format_args!("{:#06x}", self.product_id),
            "opened VKB device"
        );
        Ok(device)
    }
}

impl Default for VkbHidTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl LedTransport for VkbHidTransport {
    fn send_report(&mut self, data: &[u8]) -> Result<(), TransportError> {
        let device = self.open()?;
        device
            .send_feature_report(data)
            .map_err(|e| TransportError::Io(e.to_string()))?;
        debug!(len = data.len(), "sent LED feature report");
        Ok(())
    }

    fn read_report(&mut self) -> Result<Vec<u8>, TransportError> {
        let device = self.open()?;
        let mut buf = [0u8; LED_REPORT_LEN];
        buf[0] = LED_REPORT_ID;
        let n = device
            .get_feature_report(&mut buf)
            .map_err(|e| TransportError::Io(e.to_string()))?;
        debug!(len = n, "read LED feature report");
        Ok(buf.get(..n).unwrap_or(&buf).to_vec())
    }
}
