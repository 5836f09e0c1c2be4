use crate::dependency_graph::domain::{DependencyGraph, ReportMetadata};

/// GraphResponse - Response DTO from the dependency extraction use case
#[derive(Debug, Clone)]
pub struct GraphResponse {
    /// Direct dependencies plus the flattened package map
    pub graph: DependencyGraph,
    /// Run metadata (timestamp, tool info, serial number, project)
    pub metadata: ReportMetadata,
}

impl GraphResponse {
    pub fn new(graph: DependencyGraph, metadata: ReportMetadata) -> Self {
        Self { graph, metadata }
    }
}
