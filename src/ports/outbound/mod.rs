/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (processes, file system, console).
pub mod dependency_tree_source;
pub mod graph_formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use dependency_tree_source::DependencyTreeSource;
pub use graph_formatter::GraphFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
