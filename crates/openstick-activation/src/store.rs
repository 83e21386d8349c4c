//! The append-ordered activation log.
//!
//! Conceptually one log scoped per (light, mode) pair, physically a single
//! shared sequence filtered by those fields. Append order is the only
//! ordering; ties cannot occur because appends are sequential.

use crate::types::{ActivationLayer, LayerId, ModeName, TriggerId};
use hid_vkb_protocol::{LightConfig, LightId};

/// Ordered log of [`ActivationLayer`] records. Exclusively owned and
/// mutated by the activation engine.
#[derive(Debug, Default)]
pub struct ActivationStore {
    layers: Vec<ActivationLayer>,
    next_seq: u64,
}

impl ActivationStore {
    pub fn new() -> ActivationStore {
        ActivationStore::default()
    }

    /// Append a new layer and return its identity.
    pub fn append(
        &mut self,
        trigger: TriggerId,
        light: LightId,
        mode: ModeName,
        config: LightConfig,
    ) -> LayerId {
        let id = LayerId(self.next_seq);
        self.next_seq += 1;
        self.layers.push(ActivationLayer {
            id,
            trigger,
            light,
            mode,
            config,
        });
        id
    }

    /// The most recently appended layer for a light, optionally narrowed to
    /// one mode.
    pub fn most_recent(
        &self,
        light: LightId,
        mode: Option<&ModeName>,
    ) -> Option<&ActivationLayer> {
        self.layers
            .iter()
            .rev()
            .find(|layer| layer.light == light && mode.is_none_or(|m| &layer.mode == m))
    }

    /// The layer owned by a trigger for a light, optionally narrowed to one
    /// mode. A trigger owns at most one layer per light, so the newest match
    /// is the only match in practice.
    pub fn find(
        &self,
        trigger: &TriggerId,
        light: LightId,
        mode: Option<&ModeName>,
    ) -> Option<&ActivationLayer> {
        self.layers.iter().rev().find(|layer| {
            &layer.trigger == trigger
                && layer.light == light
                && mode.is_none_or(|m| &layer.mode == m)
        })
    }

    /// Remove a layer by identity, returning it if it existed.
    pub fn remove(&mut self, id: LayerId) -> Option<ActivationLayer> {
        let index = self.layers.iter().position(|layer| layer.id == id)?;
        Some(self.layers.remove(index))
    }

    /// Drop every layer, e.g. at controller setup.
    pub fn clear(&mut self) {
        self.layers.clear();
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layers in append order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ActivationLayer> {
        self.layers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hid_vkb_protocol::{BlinkMode, Color3, ColorMode};

    fn config(light: LightId, r: u8) -> LightConfig {
        LightConfig {
            light,
            color_mode: ColorMode::Color1,
            blink_mode: BlinkMode::Constant,
            color1: Color3::new(r, 0, 0).expect("valid color"),
            color2: Color3::OFF,
        }
    }

    fn trigger(n: u32) -> TriggerId {
        TriggerId::new("stick", n)
    }

    #[test]
    fn test_append_assigns_increasing_ids() {
        let mut store = ActivationStore::new();
        let a = store.append(trigger(1), LightId::Rgb, "Air".into(), config(LightId::Rgb, 1));
        let b = store.append(trigger(2), LightId::Rgb, "Air".into(), config(LightId::Rgb, 2));
        assert!(b > a);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_most_recent_respects_mode_filter() {
        let mut store = ActivationStore::new();
        store.append(trigger(1), LightId::Rgb, "Air".into(), config(LightId::Rgb, 1));
        store.append(trigger(2), LightId::Rgb, "Ground".into(), config(LightId::Rgb, 2));

        let air = ModeName::from("Air");
        let top = store.most_recent(LightId::Rgb, Some(&air)).expect("layer");
        assert_eq!(top.trigger, trigger(1));

        let any = store.most_recent(LightId::Rgb, None).expect("layer");
        assert_eq!(any.trigger, trigger(2));

        assert!(store.most_recent(LightId::Base, None).is_none());
    }

    #[test]
    fn test_find_and_remove() {
        let mut store = ActivationStore::new();
        let id = store.append(trigger(1), LightId::Hat, "Air".into(), config(LightId::Hat, 3));

        let found = store
            .find(&trigger(1), LightId::Hat, None)
            .expect("owned layer");
        assert_eq!(found.id, id);
        assert!(store.find(&trigger(1), LightId::Rgb, None).is_none());

        let removed = store.remove(id).expect("removed");
        assert_eq!(removed.id, id);
        assert!(store.remove(id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut store = ActivationStore::new();
        let a = store.append(trigger(1), LightId::Rgb, "Air".into(), config(LightId::Rgb, 1));
        let _ = store.remove(a);
        let b = store.append(trigger(1), LightId::Rgb, "Air".into(), config(LightId::Rgb, 1));
        assert!(b > a);
    }
}
