use std::path::PathBuf;

/// GraphRequest - Request DTO for the dependency extraction use case
#[derive(Debug, Clone)]
pub struct GraphRequest {
    /// Path to the project directory containing the Pipfile
    pub project_path: PathBuf,
}

impl GraphRequest {
    pub fn new(project_path: PathBuf) -> Self {
        Self { project_path }
    }
}
