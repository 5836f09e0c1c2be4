use crate::dependency_graph::domain::{DependencyGraph, Import, ReportMetadata};
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;

/// Direct imports are the roots of the installed tree, not Pipfile entries
const DIRECT_SECTION_INTRO: &str =
    "Top-level packages of the environment: installed packages that no other installed package depends on.\n\n";
const PACKAGE_SECTION_INTRO: &str =
    "Every package reachable from the direct dependencies, with its own dependencies.\n\n";

/// Markdown table header for direct dependencies
const DIRECT_TABLE_HEADER: &str = "| Package | Version | Requested |\n";
const DIRECT_TABLE_SEPARATOR: &str = "|---------|---------|-----------|\n";

/// Markdown table header for the flattened package list
const PACKAGE_TABLE_HEADER: &str = "| Package | Version | Dependencies |\n";
const PACKAGE_TABLE_SEPARATOR: &str = "|---------|---------|--------------|\n";

/// MarkdownFormatter adapter for a human-readable dependency report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Normalize package name for PyPI URL (lowercase, replace _ with -)
    fn normalize_for_pypi(name: &str) -> String {
        name.to_lowercase().replace('_', "-")
    }

    fn package_to_pypi_link(name: &str) -> String {
        format!(
            "[{}](https://pypi.org/project/{}/)",
            Self::escape_markdown_table_cell(name),
            Self::normalize_for_pypi(name)
        )
    }

    fn render_header(output: &mut String, graph: &DependencyGraph, metadata: &ReportMetadata) {
        output.push_str("# Dependency Report\n\n");
        output.push_str(&format!(
            "- Project: `{}`\n- Generated: {} by {} {}\n- Direct dependencies: {}\n- Unique packages: {}\n\n",
            metadata.project_path().display(),
            metadata.timestamp(),
            metadata.tool_name(),
            metadata.tool_version(),
            graph.direct_dependency_count(),
            graph.package_count()
        ));
    }

    fn render_direct(output: &mut String, direct: &[Import]) {
        output.push_str("## Direct Dependencies\n\n");
        output.push_str(DIRECT_SECTION_INTRO);

        if direct.is_empty() {
            output.push_str("*No direct dependencies*\n\n");
            return;
        }

        output.push_str(DIRECT_TABLE_HEADER);
        output.push_str(DIRECT_TABLE_SEPARATOR);
        for import in direct {
            let id = import.resolved();
            let requested = match import.target() {
                "" => "-".to_string(),
                target => format!("`{}`", Self::escape_markdown_table_cell(target)),
            };
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::package_to_pypi_link(id.name()),
                Self::escape_markdown_table_cell(id.version()),
                requested
            ));
        }
        output.push('\n');
    }

    fn render_packages(output: &mut String, graph: &DependencyGraph) {
        output.push_str("## All Packages\n\n");
        output.push_str(PACKAGE_SECTION_INTRO);

        if graph.package_count() == 0 {
            output.push_str("*No packages*\n\n");
            return;
        }

        output.push_str(PACKAGE_TABLE_HEADER);
        output.push_str(PACKAGE_TABLE_SEPARATOR);
        for record in graph.packages().values() {
            let dependencies = if record.imports().is_empty() {
                "-".to_string()
            } else {
                record
                    .imports()
                    .iter()
                    .map(|import| Self::escape_markdown_table_cell(&import.resolved().to_string()))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::package_to_pypi_link(record.id().name()),
                Self::escape_markdown_table_cell(record.id().version()),
                dependencies
            ));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for MarkdownFormatter {
    fn format(&self, graph: &DependencyGraph, metadata: &ReportMetadata) -> Result<String> {
        let mut output = String::new();
        Self::render_header(&mut output, graph, metadata);
        Self::render_direct(&mut output, graph.direct());
        Self::render_packages(&mut output, graph);
        Ok(output)
    }
}
