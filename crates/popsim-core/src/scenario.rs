//! Scenario records and the ordered per-model store.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::GrowthModel;
use crate::palette::DEFAULT_PALETTE;

/// Store-unique scenario identity, issued by a monotonic counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(u64);

impl ScenarioId {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user-defined parameter set. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario<M> {
    pub id: ScenarioId,
    pub params: M,
    /// Palette slot stamped at creation; never reassigned.
    pub color_index: usize,
}

/// Ordered collection of scenarios for one model.
///
/// Insertion order is display order. Colors are stamped from the store length
/// at insertion time, so removing an earlier scenario never recolors the rest.
#[derive(Debug, Clone)]
pub struct ScenarioStore<M> {
    scenarios: Vec<Scenario<M>>,
    next_id: u64,
    palette_len: usize,
}

impl<M: GrowthModel> Default for ScenarioStore<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: GrowthModel> ScenarioStore<M> {
    /// Store sized for the default eight-color palette.
    pub fn new() -> Self {
        Self::with_palette_len(DEFAULT_PALETTE.len())
    }

    /// Store whose color indices wrap at `palette_len` (clamped to at least 1).
    pub fn with_palette_len(palette_len: usize) -> Self {
        Self {
            scenarios: Vec::new(),
            next_id: 1,
            palette_len: palette_len.max(1),
        }
    }

    /// Append a scenario and return a copy of the stored record.
    pub fn add(&mut self, params: M) -> Scenario<M> {
        let id = ScenarioId::new(self.next_id);
        self.next_id += 1;
        let scenario = Scenario {
            id,
            params,
            color_index: self.scenarios.len() % self.palette_len,
        };
        debug!(
            model = %M::KIND,
            id = %id,
            color_index = scenario.color_index,
            "added scenario"
        );
        self.scenarios.push(scenario.clone());
        scenario
    }

    /// Remove the scenario with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: ScenarioId) -> Option<Scenario<M>> {
        let position = self.scenarios.iter().position(|s| s.id == id);
        match position {
            Some(idx) => {
                debug!(model = %M::KIND, id = %id, "removed scenario");
                Some(self.scenarios.remove(idx))
            }
            None => {
                debug!(model = %M::KIND, id = %id, "remove ignored: no such scenario");
                None
            }
        }
    }

    /// Drop every scenario. The id counter keeps running.
    pub fn clear(&mut self) {
        debug!(model = %M::KIND, count = self.scenarios.len(), "cleared scenarios");
        self.scenarios.clear();
    }

    /// Scenarios in insertion order.
    pub fn list(&self) -> &[Scenario<M>] {
        &self.scenarios
    }

    pub fn get(&self, id: ScenarioId) -> Option<&Scenario<M>> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Longest simulated window across the store, or `None` when empty.
    pub fn max_time(&self) -> Option<u32> {
        self.scenarios.iter().map(|s| s.params.time_max()).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExponentialParams, LogisticParams};

    fn logistic(p0: f64) -> LogisticParams {
        LogisticParams::new(p0, 0.5, 1000.0, 20)
    }

    #[test]
    fn add_appends_in_order_with_fresh_ids() {
        let mut store = ScenarioStore::new();
        let a = store.add(logistic(10.0));
        let b = store.add(logistic(20.0));
        assert_ne!(a.id, b.id);
        let ids: Vec<_> = store.list().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
        assert_eq!(store.get(b.id).unwrap().params.p0, 20.0);
    }

    #[test]
    fn remove_keeps_colors_and_order_of_the_rest() {
        let mut store = ScenarioStore::new();
        let a = store.add(logistic(1.0));
        let b = store.add(logistic(2.0));
        let c = store.add(logistic(3.0));

        let removed = store.remove(a.id).unwrap();
        assert_eq!(removed.id, a.id);
        assert!(store.get(a.id).is_none());

        let remaining: Vec<_> = store.list().iter().map(|s| (s.id, s.color_index)).collect();
        assert_eq!(remaining, vec![(b.id, 1), (c.id, 2)]);
    }

    #[test]
    fn color_is_stamped_from_current_length() {
        let mut store = ScenarioStore::new();
        let a = store.add(logistic(1.0));
        store.add(logistic(2.0));
        store.remove(a.id);
        // one scenario left, so the next one gets slot 1 again
        let c = store.add(logistic(3.0));
        assert_eq!(c.color_index, 1);
    }

    #[test]
    fn ninth_scenario_wraps_to_first_color() {
        let mut store: ScenarioStore<ExponentialParams> = ScenarioStore::new();
        let added: Vec<_> = (0..9)
            .map(|i| store.add(ExponentialParams::new(10.0 + i as f64, 0.3, 5)))
            .collect();
        assert_eq!(added[8].color_index, added[0].color_index);
        assert_eq!(added[7].color_index, 7);
    }

    #[test]
    fn removing_unknown_id_is_a_no_op() {
        let mut store = ScenarioStore::new();
        store.add(logistic(1.0));
        assert!(store.remove(ScenarioId::new(999)).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_is_idempotent_and_ids_stay_unique() {
        let mut store = ScenarioStore::new();
        let a = store.add(logistic(1.0));
        store.clear();
        assert!(store.list().is_empty());
        store.clear();
        assert!(store.is_empty());
        let b = store.add(logistic(1.0));
        assert_ne!(a.id, b.id);
        assert_eq!(b.color_index, 0);
    }

    #[test]
    fn max_time_tracks_longest_window() {
        let mut store = ScenarioStore::new();
        assert_eq!(store.max_time(), None);
        store.add(LogisticParams::new(10.0, 0.5, 1000.0, 5));
        store.add(LogisticParams::new(10.0, 0.5, 1000.0, 12));
        assert_eq!(store.max_time(), Some(12));
    }
}
