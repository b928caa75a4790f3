use crate::reporting::domain::ComponentRecord;
use std::collections::HashSet;

/// SelectionState - The set of component names excluded from a report
///
/// Scoped to a single milestone: the owning session replaces it with a
/// fresh empty state on every milestone change. Never persisted.
#[derive(Debug, Default)]
pub struct SelectionState {
    excluded: HashSet<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all exclusions. Called exactly once per milestone change,
    /// including the initial milestone selection.
    pub fn reset(&mut self) {
        self.excluded.clear();
    }

    /// Excludes `name` if it is currently included, re-includes it
    /// otherwise. Toggling twice restores the original state.
    ///
    /// Names absent from the current catalog are accepted silently; they
    /// have no visible effect unless a component with that name appears.
    pub fn toggle(&mut self, name: &str) {
        if !self.excluded.remove(name) {
            self.excluded.insert(name.to_string());
        }
    }

    /// Query only, no side effects
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }

    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }

    /// Returns the sub-sequence of `catalog` whose names are not excluded,
    /// preserving the catalog's original relative order.
    pub fn visible_components(&self, catalog: &[ComponentRecord]) -> Vec<ComponentRecord> {
        catalog
            .iter()
            .filter(|record| !self.is_excluded(&record.name))
            .cloned()
            .collect()
    }
}
