//! Wiring for VKB Gladiator LED control: the event controller, the hidapi
//! device transport, and translation of static user settings into LED
//! configurations.
//!
//! Processing is single-threaded and event-at-a-time: each input event is
//! applied to the activation stack and, when the visible configuration of a
//! light changes, the full visible set is re-encoded and sent to the device
//! in one feature report. A missing device is a normal idle condition, not
//! an error: state keeps accumulating and transmission resumes on the next
//! event once the stick is back.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod controller;
pub mod hid;
pub mod settings;
pub mod transport;

pub use controller::{EngineError, EngineResult, LedController};
pub use hid::VkbHidTransport;
pub use settings::{
    BaseLedSettings, HatLedSettings, LedSettings, RgbLedSettings, TriggerBinding,
};
pub use transport::{LedTransport, TransportError};
