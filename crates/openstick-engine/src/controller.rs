//! The event controller: activation stack in, feature reports out.

use crate::transport::{LedTransport, TransportError};
use hid_vkb_protocol::{LightConfig, LightId, VkbLedError, build_report, parse_report};
use openstick_activation::{ActivationStore, LightUpdate, TriggerEvent, apply_event};
use rand::Rng;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, trace, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("LED protocol error: {0}")]
    Protocol(#[from] VkbLedError),

    #[error("device transport error: {0}")]
    Transport(#[from] TransportError),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Owns the activation store and the device transport; processes one event
/// to completion before the next (no internal locking, none needed).
pub struct LedController<T: LedTransport> {
    store: ActivationStore,
    transport: T,
    /// Last visible configuration per light; the transmitted set.
    displayed: BTreeMap<LightId, LightConfig>,
}

impl<T: LedTransport> LedController<T> {
    pub fn new(transport: T) -> LedController<T> {
        LedController {
            store: ActivationStore::new(),
            transport,
            displayed: BTreeMap::new(),
        }
    }

    /// Apply one resolved input event. When the affected light's visible
    /// configuration changes, the full visible set is re-encoded and sent
    /// in one report.
    ///
    /// An unavailable device degrades to a recorded-but-untransmitted state
    /// change: the stack stays authoritative and the next successful send
    /// carries the current picture. Any other failure aborts only this
    /// transmission; the stack is never rolled back or corrupted.
    pub fn handle_event(&mut self, event: &TriggerEvent) -> EngineResult<Option<LightUpdate>> {
        let Some(update) = apply_event(&mut self.store, event) else {
            trace!(trigger = %event.trigger, "event was a no-op");
            return Ok(None);
        };
        self.displayed.insert(update.light, update.config);

        match self.transmit() {
            Ok(()) => Ok(Some(update)),
            Err(EngineError::Transport(TransportError::Unavailable)) => {
                debug!(
                    light = ?update.light,
                    "device unavailable, state recorded without transmission"
                );
                Ok(Some(update))
            }
            Err(e) => {
                warn!(light = ?update.light, error = %e, "LED transmission failed");
                Err(e)
            }
        }
    }

    /// Read and decode the device's current LED report. Read-back of the
    /// last real entry is unreliable on this firmware; prefer the
    /// controller's own state where possible.
    pub fn read_lights(&mut self) -> EngineResult<Vec<LightConfig>> {
        let data = self.transport.read_report()?;
        Ok(parse_report(&data)?)
    }

    /// Drop all layers and forget the displayed set, e.g. at startup.
    pub fn reset(&mut self) {
        self.store.clear();
        self.displayed.clear();
    }

    pub fn store(&self) -> &ActivationStore {
        &self.store
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    fn transmit(&mut self) -> EngineResult<()> {
        let configs: Vec<LightConfig> = self.displayed.values().copied().collect();
        let nonce: [u8; 2] = rand::rng().random();
        let report = build_report(&configs, nonce)?;
        self.transport.send_report(&report)?;
        debug!(lights = configs.len(), "transmitted LED report");
        Ok(())
    }
}
