/// End-to-end tests for the CLI
///
/// Pipenv is never required: tests either replay a saved report with
/// `--input` or point `--pipenv` at a stand-in executable.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn sample_project() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample-project")
}

fn sample_report() -> PathBuf {
    sample_project().join("graph.json")
}

mod exit_code_tests {
    use super::*;

    /// Exit code 0: replaying a saved report
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("pipenv-deps")
            .arg("-p")
            .arg(sample_project())
            .arg("-i")
            .arg(sample_report())
            .assert()
            .code(0);
    }

    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("pipenv-deps").arg("--help").assert().code(0);
    }

    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("pipenv-deps")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("pipenv-deps")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("pipenv-deps")
            .args(["-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - non-existent project path
    #[test]
    fn test_exit_code_nonexistent_path() {
        cargo_bin_cmd!("pipenv-deps")
            .args(["-p", "/nonexistent/path/that/does/not/exist"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Directory does not exist"));
    }

    #[test]
    fn test_exit_code_truncated_report() {
        let truncated =
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/truncated-graph.json");
        cargo_bin_cmd!("pipenv-deps")
            .arg("-p")
            .arg(sample_project())
            .arg("-i")
            .arg(truncated)
            .assert()
            .code(3)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Failed to decode dependency tree"))
            .stderr(predicate::str::contains("Caused by:").count(1));
    }

    #[test]
    fn test_exit_code_missing_pipenv() {
        cargo_bin_cmd!("pipenv-deps")
            .arg("-p")
            .arg(sample_project())
            .args(["--pipenv", "pipenv-deps-test-no-such-binary"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains(
                "ensure that Pipenv is installed correctly",
            ));
    }
}

#[test]
fn test_e2e_json_output() {
    let output = cargo_bin_cmd!("pipenv-deps")
        .arg("-p")
        .arg(sample_project())
        .arg("-i")
        .arg(sample_report())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["metadata"]["tool"]["name"], "pipenv-deps");
    assert_eq!(json["direct"].as_array().unwrap().len(), 2);
    assert_eq!(json["packages"].as_array().unwrap().len(), 10);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Direct dependencies: 2"));
}

#[test]
fn test_e2e_markdown_output_to_file() {
    let out_dir = TempDir::new().unwrap();
    let out_file = out_dir.path().join("deps.md");

    cargo_bin_cmd!("pipenv-deps")
        .arg("-p")
        .arg(sample_project())
        .arg("-i")
        .arg(sample_report())
        .args(["-f", "markdown", "-o"])
        .arg(&out_file)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let markdown = fs::read_to_string(&out_file).unwrap();
    assert!(markdown.starts_with("# Dependency Report"));
    assert!(markdown.contains("| [Flask](https://pypi.org/project/flask/) | 3.0.0 | `==3.0.0` |"));
    assert!(markdown.contains("- Unique packages: 10"));
}

#[test]
fn test_e2e_config_file_sets_format() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("pipenv-deps.config.yml"),
        "format: markdown\nunknown_setting: 1\n",
    )
    .unwrap();

    cargo_bin_cmd!("pipenv-deps")
        .arg("-p")
        .arg(project.path())
        .arg("-i")
        .arg(sample_report())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Dependency Report"))
        .stderr(predicate::str::contains(
            "Unknown config field 'unknown_setting'",
        ));
}

#[test]
fn test_e2e_cli_format_overrides_config() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("pipenv-deps.config.yml"),
        "format: markdown\n",
    )
    .unwrap();

    cargo_bin_cmd!("pipenv-deps")
        .arg("-p")
        .arg(project.path())
        .arg("-i")
        .arg(sample_report())
        .args(["-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn test_e2e_invalid_config_fails() {
    let project = TempDir::new().unwrap();
    let config = project.path().join("custom.yml");
    fs::write(&config, "pipenv: \"\"\n").unwrap();

    cargo_bin_cmd!("pipenv-deps")
        .arg("-p")
        .arg(project.path())
        .arg("-c")
        .arg(&config)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("'pipenv' must not be empty"));
}

#[cfg(unix)]
#[test]
fn test_e2e_pipenv_output_not_json() {
    // `echo` exits 0 but prints "graph --json-tree", which is not a report.
    cargo_bin_cmd!("pipenv-deps")
        .arg("-p")
        .arg(sample_project())
        .args(["--pipenv", "echo"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph --json-tree"))
        .stderr(predicate::str::contains("Failed to decode dependency tree"));
}
