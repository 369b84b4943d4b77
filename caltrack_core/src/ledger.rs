//! Append-only intake ledger for one tracking session.

use crate::{IntakeEntry, MacroTotals};
use serde::{Deserialize, Serialize};

/// Ordered record of logged intake entries
///
/// Entries can only be appended. Totals are recomputed from the entries
/// on every call and never cached.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IntakeLedger {
    entries: Vec<IntakeEntry>,
}

impl IntakeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to the end of the ledger
    pub fn append(&mut self, entry: IntakeEntry) {
        tracing::debug!(
            "Logged {} '{}' ({} kcal) as entry {}",
            entry.kind,
            entry.item,
            entry.calories,
            self.entries.len() + 1
        );
        self.entries.push(entry);
    }

    /// Sum each dimension over all entries (all zero when empty)
    pub fn totals(&self) -> MacroTotals {
        self.entries.iter().map(MacroTotals::from).sum()
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[IntakeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IntakeKind;

    fn entry(item: &str, calories: f64, carbs: f64, protein: f64, fat: f64) -> IntakeEntry {
        IntakeEntry {
            kind: IntakeKind::Food,
            item: item.into(),
            calories,
            carbs_g: carbs,
            protein_g: protein,
            fat_g: fat,
        }
    }

    #[test]
    fn test_empty_ledger_totals_are_zero() {
        let ledger = IntakeLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.totals(), MacroTotals::zero());
    }

    #[test]
    fn test_totals_sum_each_field() {
        let mut ledger = IntakeLedger::new();
        ledger.append(entry("oats", 300.0, 54.0, 10.0, 5.0));
        ledger.append(entry("milk", 120.0, 12.0, 8.0, 4.5));

        let totals = ledger.totals();
        assert_eq!(totals.calories, 420.0);
        assert_eq!(totals.carbs_g, 66.0);
        assert_eq!(totals.protein_g, 18.0);
        assert_eq!(totals.fat_g, 9.5);
    }

    #[test]
    fn test_append_is_additive() {
        let mut ledger = IntakeLedger::new();
        ledger.append(entry("rice", 200.0, 45.0, 4.0, 0.5));
        let before = ledger.totals();

        let extra = entry("chicken", 165.0, 0.0, 31.0, 3.6);
        ledger.append(extra.clone());
        let after = ledger.totals();

        assert_eq!(after.calories, before.calories + extra.calories);
        assert_eq!(after.carbs_g, before.carbs_g + extra.carbs_g);
        assert_eq!(after.protein_g, before.protein_g + extra.protein_g);
        assert_eq!(after.fat_g, before.fat_g + extra.fat_g);
    }

    #[test]
    fn test_totals_is_repeatable() {
        let mut ledger = IntakeLedger::new();
        ledger.append(entry("apple", 95.0, 25.0, 0.5, 0.3));
        assert_eq!(ledger.totals(), ledger.totals());
    }

    #[test]
    fn test_insertion_order_and_empty_item() {
        let mut ledger = IntakeLedger::new();
        ledger.append(entry("first", 1.0, 0.0, 0.0, 0.0));
        ledger.append(entry("", 2.0, 0.0, 0.0, 0.0));

        let items: Vec<_> = ledger.entries().iter().map(|e| e.item.as_str()).collect();
        assert_eq!(items, vec!["first", ""]);
        assert_eq!(ledger.len(), 2);
    }
}
