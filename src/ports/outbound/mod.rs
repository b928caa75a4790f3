/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (catalog source, file system,
/// console, etc.).
pub mod catalog;
pub mod formatter;
pub mod notifier;
pub mod sink;

pub use catalog::CatalogLookup;
pub use formatter::ReportFormatter;
pub use notifier::Notifier;
pub use sink::DeliverySink;
