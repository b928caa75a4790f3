use crate::reporting::domain::ComponentRecord;

/// CatalogLookup port for resolving milestone component catalogs
///
/// This port abstracts the milestone/component data source (a static
/// catalog, a file, or eventually a real tracking service) so the report
/// projector never depends on where the data comes from.
pub trait CatalogLookup {
    /// Returns the ordered component records attached to a milestone.
    ///
    /// Total over the identifier space: an unknown milestone yields an
    /// empty catalog, never an error.
    fn lookup(&self, milestone: &str) -> Vec<ComponentRecord>;

    /// All known milestone identifiers, in display order
    fn milestones(&self) -> Vec<String>;
}

impl CatalogLookup for Box<dyn CatalogLookup> {
    fn lookup(&self, milestone: &str) -> Vec<ComponentRecord> {
        (**self).lookup(milestone)
    }

    fn milestones(&self) -> Vec<String> {
        (**self).milestones()
    }
}
