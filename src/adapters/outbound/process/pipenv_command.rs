use crate::ports::outbound::DependencyTreeSource;
use crate::shared::error::DepsError;
use crate::shared::Result;
use std::path::Path;
use std::process::Command;

/// Executable used when none is configured
pub const DEFAULT_PIPENV: &str = "pipenv";

/// Arguments that make pipenv print its dependency tree as JSON
const GRAPH_ARGS: [&str; 2] = ["graph", "--json-tree"];

const PIPENV_DOCS_LINK: &str = "https://pipenv.pypa.io/en/latest/cli.html#graph";

/// PipenvCommand adapter that runs `pipenv graph --json-tree`
///
/// The command runs with the project directory as its working directory and
/// its standard output is returned verbatim.
pub struct PipenvCommand {
    program: String,
}

impl PipenvCommand {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PIPENV)
    }

    /// Uses a specific pipenv executable (name on PATH or full path)
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command_line(&self) -> String {
        format!("{} {}", self.program, GRAPH_ARGS.join(" "))
    }

    fn execution_error(&self, project_path: &Path, details: String) -> DepsError {
        DepsError::Execution {
            command: self.command_line(),
            dir: project_path.to_path_buf(),
            details,
            troubleshooting: format!(
                "Could not run `{}` within the directory `{}`. Try running this command and ensure that Pipenv is installed correctly.",
                self.command_line(),
                project_path.display()
            ),
            link: PIPENV_DOCS_LINK.to_string(),
        }
    }
}

impl Default for PipenvCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyTreeSource for PipenvCommand {
    fn read_tree(&self, project_path: &Path) -> Result<String> {
        let output = Command::new(&self.program)
            .args(GRAPH_ARGS)
            .current_dir(project_path)
            .output()
            .map_err(|e| self.execution_error(project_path, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let details = match stderr.trim() {
                "" => format!("process exited with {}", output.status),
                text => format!("process exited with {}: {}", output.status, text),
            };
            return Err(self.execution_error(project_path, details).into());
        }

        String::from_utf8(output.stdout).map_err(|e| {
            self.execution_error(project_path, format!("output is not valid UTF-8: {}", e))
                .into()
        })
    }

    fn describe(&self) -> String {
        format!("`{}`", self.command_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_program() {
        let command = PipenvCommand::default();
        assert_eq!(command.program(), "pipenv");
        assert_eq!(command.describe(), "`pipenv graph --json-tree`");
    }

    #[test]
    fn test_missing_executable_is_execution_error() {
        let temp_dir = TempDir::new().unwrap();
        let command = PipenvCommand::with_program("pipenv-deps-test-no-such-binary");

        let err = command.read_tree(temp_dir.path()).unwrap_err();
        let deps_err = err.downcast_ref::<DepsError>().unwrap();
        assert!(matches!(deps_err, DepsError::Execution { .. }));

        let display = err.to_string();
        assert!(display.contains("pipenv-deps-test-no-such-binary graph --json-tree"));
        assert!(display.contains("ensure that Pipenv is installed correctly"));
        assert!(display.contains(PIPENV_DOCS_LINK));
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_stdout_in_project_dir() {
        // `echo` stands in for pipenv: it prints its arguments and succeeds.
        let temp_dir = TempDir::new().unwrap();
        let command = PipenvCommand::with_program("echo");

        let output = command.read_tree(temp_dir.path()).unwrap();
        assert_eq!(output.trim(), "graph --json-tree");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_execution_error() {
        let temp_dir = TempDir::new().unwrap();
        let command = PipenvCommand::with_program("false");

        let err = command.read_tree(temp_dir.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DepsError>(),
            Some(DepsError::Execution { .. })
        ));
        assert!(err.to_string().contains("process exited with"));
    }
}
