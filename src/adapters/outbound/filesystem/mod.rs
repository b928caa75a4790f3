/// Filesystem adapters for report delivery
mod file_sink;

pub use file_sink::{FileSystemSink, StdoutSink};
