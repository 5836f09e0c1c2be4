use crate::dependency_graph::domain::{DependencyGraph, ReportMetadata};
use crate::shared::Result;

/// GraphFormatter port for rendering a flattened dependency graph
pub trait GraphFormatter {
    /// Formats the graph and run metadata into the output document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, graph: &DependencyGraph, metadata: &ReportMetadata) -> Result<String>;
}
