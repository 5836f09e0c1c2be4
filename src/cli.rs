use clap::Parser;
use pipenv_deps::adapters::outbound::process::DEFAULT_PIPENV;
use pipenv_deps::application::dto::OutputFormat;
use pipenv_deps::config::ConfigFile;
use std::path::PathBuf;

/// Extract the dependency graph of a Pipenv project
#[derive(Parser, Debug)]
#[command(name = "pipenv-deps")]
#[command(version)]
#[command(
    about = "Flatten `pipenv graph --json-tree` into a deduplicated dependency graph",
    long_about = None
)]
pub struct Args {
    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Read a saved `pipenv graph --json-tree` report instead of running pipenv
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<String>,

    /// Pipenv executable to run [default: pipenv]
    #[arg(long, value_name = "BIN")]
    pub pipenv: Option<String>,

    /// Config file (defaults to pipenv-deps.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn project_path(&self) -> PathBuf {
        PathBuf::from(self.path.as_deref().unwrap_or("."))
    }

    /// Merges CLI flags with config values; flags win.
    pub fn resolve(&self, config: Option<&ConfigFile>) -> Settings {
        let format = self
            .format
            .or_else(|| config.and_then(ConfigFile::output_format))
            .unwrap_or_default();
        let pipenv = self
            .pipenv
            .clone()
            .or_else(|| config.and_then(|c| c.pipenv.clone()))
            .unwrap_or_else(|| DEFAULT_PIPENV.to_string());
        let output = self
            .output
            .clone()
            .or_else(|| config.and_then(|c| c.output.clone()))
            .map(PathBuf::from);

        Settings {
            format,
            pipenv,
            output,
            input: self.input.as_ref().map(PathBuf::from),
        }
    }
}

/// Effective options after merging CLI flags and the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub pipenv: String,
    pub output: Option<PathBuf>,
    pub input: Option<PathBuf>,
}
