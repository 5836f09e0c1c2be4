use std::path::Path;
use pipenv_deps::prelude::*;

/// Mock DependencyTreeSource for testing
pub struct MockTreeSource {
    pub content: String,
    pub should_fail: bool,
}

impl MockTreeSource {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl DependencyTreeSource for MockTreeSource {
    fn read_tree(&self, project_path: &Path) -> Result<String> {
        if self.should_fail {
            return Err(DepsError::Execution {
                command: "pipenv graph --json-tree".to_string(),
                dir: project_path.to_path_buf(),
                details: "Mock pipenv failure".to_string(),
                troubleshooting: "Ensure that Pipenv is installed correctly.".to_string(),
                link: "https://pipenv.pypa.io".to_string(),
            }
            .into());
        }
        Ok(self.content.clone())
    }

    fn describe(&self) -> String {
        "mock tree source".to_string()
    }
}
