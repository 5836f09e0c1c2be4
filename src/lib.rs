//! pipenv-deps - dependency graph extraction for Pipenv projects
//!
//! Runs (or replays) `pipenv graph --json-tree`, decodes the nested report
//! and flattens it into a deduplicated graph: the project's direct imports
//! plus one record per distinct package with its own immediate imports.
//!
//! # Architecture
//!
//! - **Domain Layer** (`dependency_graph`): tree and graph models, decoding and flattening
//! - **Application Layer** (`application`): the extraction use case and DTOs
//! - **Ports** (`ports`): interfaces for the tree source, formatting, output and progress
//! - **Adapters** (`adapters`): pipenv process, filesystem, formatters, console
//! - **Shared** (`shared`): error types and filesystem guards
//!
//! # Example
//!
//! ```no_run
//! use pipenv_deps::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ExtractDependenciesUseCase::new(
//!     PipenvCommand::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(GraphRequest::new(PathBuf::from(".")))?;
//!
//! let output = JsonFormatter::new().format(&response.graph, &response.metadata)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_graph;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, SavedReportReader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::process::PipenvCommand;
    pub use crate::application::dto::{GraphRequest, GraphResponse, OutputFormat};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::ExtractDependenciesUseCase;
    pub use crate::dependency_graph::domain::{
        DependencyGraph, Ecosystem, Import, PackageId, PackageRecord, ReportMetadata, TreeNode,
    };
    pub use crate::dependency_graph::services::{GraphFlattener, TreeDecoder};
    pub use crate::ports::outbound::{
        DependencyTreeSource, GraphFormatter, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::{DepsError, ExitCode};
    pub use crate::shared::Result;
}
