use crate::shared::Result;
use std::path::Path;

/// DependencyTreeSource port for obtaining a raw dependency tree report
///
/// The report is the text printed by `pipenv graph --json-tree` for a
/// project. Implementations may run the command or replay a saved copy.
pub trait DependencyTreeSource {
    /// Returns the raw tree report for the project
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory containing the Pipfile
    ///
    /// # Errors
    /// Returns an error if:
    /// - The external command cannot be started or exits unsuccessfully
    /// - A saved report cannot be read
    fn read_tree(&self, project_path: &Path) -> Result<String>;

    /// Short human-readable description of where the report comes from
    fn describe(&self) -> String;
}
