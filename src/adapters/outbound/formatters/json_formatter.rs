use crate::dependency_graph::domain::{DependencyGraph, Import, PackageRecord, ReportMetadata};
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    metadata: Metadata<'a>,
    direct: Vec<DirectEntry<'a>>,
    packages: Vec<PackageEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    #[serde(rename = "serialNumber")]
    serial_number: &'a str,
    timestamp: &'a str,
    tool: Tool<'a>,
    project: String,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct DirectEntry<'a> {
    locator: String,
    name: &'a str,
    version: &'a str,
    target: &'a str,
}

#[derive(Debug, Serialize)]
struct PackageEntry<'a> {
    locator: String,
    name: &'a str,
    version: &'a str,
    imports: Vec<String>,
}

/// JsonFormatter adapter rendering the graph as a JSON document
///
/// Packages are listed in identity order and reference their imports by
/// locator (`pip+<name>$<version>`), so output is stable across runs apart
/// from the metadata block.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn direct_entry(import: &Import) -> DirectEntry<'_> {
        let id = import.resolved();
        DirectEntry {
            locator: id.locator(),
            name: id.name(),
            version: id.version(),
            target: import.target(),
        }
    }

    fn package_entry(record: &PackageRecord) -> PackageEntry<'_> {
        let id = record.id();
        PackageEntry {
            locator: id.locator(),
            name: id.name(),
            version: id.version(),
            imports: record
                .imports()
                .iter()
                .map(|import| import.resolved().locator())
                .collect(),
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for JsonFormatter {
    fn format(&self, graph: &DependencyGraph, metadata: &ReportMetadata) -> Result<String> {
        let report = Report {
            metadata: Metadata {
                serial_number: metadata.serial_number(),
                timestamp: metadata.timestamp(),
                tool: Tool {
                    name: metadata.tool_name(),
                    version: metadata.tool_version(),
                },
                project: metadata.project_path().display().to_string(),
            },
            direct: graph.direct().iter().map(Self::direct_entry).collect(),
            packages: graph.packages().values().map(Self::package_entry).collect(),
        };

        let mut output = serde_json::to_string_pretty(&report)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON report: {}", e))?;
        output.push('\n');
        Ok(output)
    }
}
