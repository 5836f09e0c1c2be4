use crate::ports::outbound::DependencyTreeSource;
use crate::shared::error::DepsError;
use crate::shared::fs_guard;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// SavedReportReader adapter that replays a stored tree report
///
/// Reads a file previously produced with
/// `pipenv graph --json-tree > graph.json`, so a project can be scanned
/// without pipenv installed. The project directory is not consulted.
pub struct SavedReportReader {
    report_path: PathBuf,
}

impl SavedReportReader {
    pub fn new(report_path: PathBuf) -> Self {
        Self { report_path }
    }

    pub fn report_path(&self) -> &Path {
        &self.report_path
    }
}

impl DependencyTreeSource for SavedReportReader {
    fn read_tree(&self, _project_path: &Path) -> Result<String> {
        if !self.report_path.exists() {
            return Err(DepsError::FileReadError {
                path: self.report_path.clone(),
                details: "Saved dependency tree report does not exist".to_string(),
            }
            .into());
        }

        fs_guard::read_guarded(&self.report_path, "dependency tree report").map_err(|e| {
            DepsError::FileReadError {
                path: self.report_path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn describe(&self) -> String {
        self.report_path.display().to_string()
    }
}
