//! The activation state machine: (store, event) -> (store', optional effect).

use crate::store::ActivationStore;
use crate::types::{ModeChange, ModeName, TriggerId};
use hid_vkb_protocol::{LightConfig, LightId};
use serde::{Deserialize, Serialize};

/// One resolved input event. The event producer has already mapped raw
/// human input to these fields; the engine never interprets raw input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerEvent {
    pub trigger: TriggerId,
    pub light: LightId,
    /// Operating mode active when the event fired.
    pub mode: ModeName,
    pub is_pressed: bool,
    /// True: light only while the button is held. False: press toggles
    /// on/off and releases are ignored.
    pub while_pressed: bool,
    pub changes_mode: ModeChange,
    /// Configuration this trigger puts on the light.
    pub config: LightConfig,
    /// Fallback when the light's activation log for the scope empties.
    pub default_config: LightConfig,
}

/// Effect of an event: set `light` to `config` on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightUpdate {
    pub light: LightId,
    pub config: LightConfig,
}

enum Intent {
    Activate,
    Deactivate,
}

/// Apply one event to the store. Returns the transmit effect when the
/// event changed the affected light's visible configuration; `None` for
/// every no-op combination (e.g. a release with no owned layer).
pub fn apply_event(store: &mut ActivationStore, event: &TriggerEvent) -> Option<LightUpdate> {
    // Mode-changing triggers are re-armed across mode boundaries, so both
    // their ownership lookup and their recency comparison ignore the mode.
    let scope = match event.changes_mode {
        ModeChange::None => Some(&event.mode),
        ModeChange::Toggle | ModeChange::Cycle => None,
    };
    let owned = store.find(&event.trigger, event.light, scope).map(|l| l.id);

    let intent = if event.while_pressed {
        if event.is_pressed {
            Intent::Activate
        } else {
            Intent::Deactivate
        }
    } else if event.is_pressed {
        if owned.is_some() {
            Intent::Deactivate
        } else {
            Intent::Activate
        }
    } else {
        // Release of a toggle-style trigger.
        return None;
    };

    match intent {
        Intent::Activate => {
            if event.changes_mode.is_mode_changing() {
                // A mode-switch trigger sheds any layer it still owns for
                // this light, regardless of the mode recorded on it.
                if let Some(stale) = store.find(&event.trigger, event.light, None).map(|l| l.id)
                {
                    let _ = store.remove(stale);
                }
            } else if owned.is_some() {
                // Repeated press while held; nothing to do.
                return None;
            }

            let _ = store.append(
                event.trigger.clone(),
                event.light,
                event.mode.clone(),
                event.config,
            );
            // The fresh append is necessarily the most recent layer in scope.
            Some(LightUpdate {
                light: event.light,
                config: event.config,
            })
        }
        Intent::Deactivate => {
            let layer_id = owned?;
            let was_top = store
                .most_recent(event.light, scope)
                .is_some_and(|top| top.id == layer_id);
            let _ = store.remove(layer_id);

            if !was_top {
                // A lower layer was discarded; visibility is unchanged.
                return None;
            }
            let config = store
                .most_recent(event.light, scope)
                .map_or(event.default_config, |top| top.config);
            Some(LightUpdate {
                light: event.light,
                config,
            })
        }
    }
}
