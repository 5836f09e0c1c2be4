mod cli;

use cli::Args;
use owo_colors::OwoColorize;
use pipenv_deps::application::dto::GraphResponse;
use pipenv_deps::config::{discover_config, load_config_from_path};
use pipenv_deps::prelude::*;
use pipenv_deps::shared::fs_guard;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n{} An error occurred:\n", "❌".red());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\n{} {}", "Caused by:".yellow(), cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    let project_path = args.project_path();
    validate_project_path(&project_path)?;

    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(Path::new(path))?),
        None => discover_config(&project_path)?,
    };
    let settings = args.resolve(config.as_ref());

    let request = GraphRequest::new(project_path);
    let response = match settings.input.clone() {
        Some(input) => extract(SavedReportReader::new(input), request)?,
        None => extract(PipenvCommand::with_program(settings.pipenv.as_str()), request)?,
    };

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response.graph, &response.metadata)?;

    let presenter: Box<dyn OutputPresenter> = match settings.output {
        Some(output_path) => Box::new(FileSystemWriter::new(output_path)),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&formatted_output)?;

    Ok(())
}

fn extract<S: DependencyTreeSource>(source: S, request: GraphRequest) -> Result<GraphResponse> {
    ExtractDependenciesUseCase::new(source, StderrProgressReporter::new()).execute(request)
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DepsError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    fs_guard::reject_symlink(path).map_err(|e| DepsError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if !path.is_dir() {
        return Err(DepsError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
