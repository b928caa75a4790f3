mod mock_catalog;
mod mock_notifier;

pub use mock_catalog::{component_record, MockCatalog};
pub use mock_notifier::MockNotifier;
