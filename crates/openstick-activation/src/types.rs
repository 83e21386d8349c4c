//! Identity and layer types for the activation log.

use hid_vkb_protocol::{LightConfig, LightId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one physical button instance: the owning device plus its
/// control index on that device.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TriggerId {
    pub device: String,
    pub control: u32,
}

impl TriggerId {
    pub fn new(device: impl Into<String>, control: u32) -> TriggerId {
        TriggerId {
            device: device.into(),
            control,
        }
    }
}

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.device, self.control)
    }
}

/// An externally managed operating-mode name ("Default", "Air", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModeName(pub String);

impl ModeName {
    pub fn new(name: impl Into<String>) -> ModeName {
        ModeName(name.into())
    }
}

impl From<&str> for ModeName {
    fn from(name: &str) -> ModeName {
        ModeName(name.to_string())
    }
}

impl fmt::Display for ModeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a trigger also switches the active operating mode, and how.
/// Matched exhaustively everywhere; there is no string fall-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModeChange {
    #[default]
    None,
    /// Flips between two modes; the trigger's on/off state is
    /// mode-independent.
    Toggle,
    /// Steps through a mode ring; activate/deactivate is resolved by the
    /// event producer.
    Cycle,
}

impl ModeChange {
    /// True for triggers whose layers outlive a single mode.
    pub const fn is_mode_changing(self) -> bool {
        !matches!(self, ModeChange::None)
    }
}

/// Monotonic append sequence number; doubles as layer identity and as the
/// recency order ("most recent" never consults wall-clock time).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct LayerId(pub u64);

/// One trigger's current claim on a light under an operating mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationLayer {
    pub id: LayerId,
    pub trigger: TriggerId,
    pub light: LightId,
    pub mode: ModeName,
    pub config: LightConfig,
}
