use crate::adapters::outbound::filesystem::{FileSystemSink, StdoutSink};
use crate::ports::outbound::DeliverySink;
use std::path::PathBuf;

/// Sink type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkType {
    Stdout,
    Directory(PathBuf),
}

/// Factory for creating delivery sinks
///
/// This factory encapsulates the creation logic for the sink
/// implementations: reports go to a directory when one is configured and
/// to stdout otherwise.
pub struct SinkFactory;

impl SinkFactory {
    /// Creates a sink instance for the specified type
    ///
    /// # Arguments
    /// * `sink_type` - The type of sink to create
    ///
    /// # Returns
    /// A boxed DeliverySink trait object appropriate for the type
    pub fn create(sink_type: SinkType) -> Box<dyn DeliverySink> {
        match sink_type {
            SinkType::Stdout => Box::new(StdoutSink::new()),
            SinkType::Directory(dir) => Box::new(FileSystemSink::new(dir)),
        }
    }
}
