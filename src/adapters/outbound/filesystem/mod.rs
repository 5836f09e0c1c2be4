/// Filesystem adapters for file I/O operations
mod file_writer;
mod saved_report_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use saved_report_reader::SavedReportReader;
