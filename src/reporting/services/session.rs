use crate::ports::outbound::CatalogLookup;
use crate::reporting::domain::ComponentRecord;
use crate::reporting::services::SelectionState;

/// MilestoneSession - Coordinates milestone selection and selection state
///
/// On every milestone change the session performs a catalog lookup and
/// replaces the selection state with a fresh empty one, so exclusions
/// never leak between milestones. An unknown milestone identifier yields
/// an empty catalog, not an error.
pub struct MilestoneSession<'a, C: CatalogLookup> {
    lookup: &'a C,
    milestone: Option<String>,
    catalog: Vec<ComponentRecord>,
    selection: SelectionState,
}

impl<'a, C: CatalogLookup> MilestoneSession<'a, C> {
    pub fn new(lookup: &'a C) -> Self {
        Self {
            lookup,
            milestone: None,
            catalog: Vec::new(),
            selection: SelectionState::new(),
        }
    }

    /// Selects a milestone: looks up its component catalog and resets the
    /// selection state. Called for the initial selection as well.
    pub fn select_milestone(&mut self, milestone: &str) {
        self.catalog = self.lookup.lookup(milestone);
        self.milestone = Some(milestone.to_string());
        self.selection = SelectionState::new();
    }

    /// The currently selected milestone, if any
    pub fn milestone(&self) -> Option<&str> {
        self.milestone.as_deref()
    }

    /// The full catalog for the current milestone, in lookup order
    pub fn catalog(&self) -> &[ComponentRecord] {
        &self.catalog
    }

    /// Flips the exclusion state of `name` in the current selection
    pub fn toggle(&mut self, name: &str) {
        self.selection.toggle(name);
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.selection.is_excluded(name)
    }

    pub fn excluded_count(&self) -> usize {
        self.selection.excluded_count()
    }

    /// The catalog minus excluded components, catalog order preserved
    pub fn visible_components(&self) -> Vec<ComponentRecord> {
        self.selection.visible_components(&self.catalog)
    }
}
