use std::collections::BTreeMap;

use crate::model::day_key::DayKey;

/// Per-day step counts. Absence of a key means "no steps recorded", so a
/// lookup never yields zero — stored values are always positive, which the
/// tracker enforces before writing.
#[derive(Debug, Clone, Default)]
pub struct StepLedger {
    steps_by_day: BTreeMap<DayKey, u32>,
}

impl StepLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: DayKey) -> Option<u32> {
        self.steps_by_day.get(&key).copied()
    }

    /// Overwrite semantics: any previous value for the day is discarded.
    pub fn set(&mut self, key: DayKey, steps: u32) {
        self.steps_by_day.insert(key, steps);
    }

    /// Accumulate semantics: adds to the existing entry, or inserts.
    pub fn add(&mut self, key: DayKey, steps: u32) {
        let entry = self.steps_by_day.entry(key).or_insert(0);
        *entry = entry.saturating_add(steps);
    }

    pub fn iter(&self) -> impl Iterator<Item = (DayKey, u32)> + '_ {
        self.steps_by_day.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.steps_by_day.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps_by_day.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_day_is_none() {
        let ledger = StepLedger::new();
        assert_eq!(ledger.get(DayKey::new(0, 1)), None);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let mut ledger = StepLedger::new();
        let key = DayKey::new(3, 10);
        ledger.set(key, 3400);
        ledger.set(key, 1200);
        assert_eq!(ledger.get(key), Some(1200));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_add_accumulates() {
        let mut ledger = StepLedger::new();
        let key = DayKey::new(3, 10);
        ledger.add(key, 3400);
        ledger.add(key, 600);
        assert_eq!(ledger.get(key), Some(4000));
    }
}
