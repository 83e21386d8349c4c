//! Layered activation state for VKB LED control.
//!
//! Multiple input triggers may contend for the same light. Each qualifying
//! press appends a layer to an ordered log; the most recently appended layer
//! for a (light, mode) scope governs the light, and removing a layer
//! restores whatever is underneath, down to the light's default config.
//!
//! Everything here is pure and single-threaded: one event in, an updated
//! store plus an optional "set this light" effect out. Transmission lives in
//! `openstick-engine`.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod engine;
pub mod store;
pub mod types;

pub use engine::{LightUpdate, TriggerEvent, apply_event};
pub use store::ActivationStore;
pub use types::{ActivationLayer, LayerId, ModeChange, ModeName, TriggerId};
