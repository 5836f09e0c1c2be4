use crate::application::dto::{GraphRequest, GraphResponse};
use crate::dependency_graph::domain::{DependencyGraph, TreeNode};
use crate::dependency_graph::services::{GraphFlattener, ReportMetadataGenerator, TreeDecoder};
use crate::ports::outbound::{DependencyTreeSource, ProgressReporter};
use crate::shared::Result;

/// ExtractDependenciesUseCase - Core use case for dependency graph extraction
///
/// Obtains the tree report for one project, decodes it and flattens it.
/// Errors from the tree source and the decoder are terminal for the project
/// and are returned unchanged.
///
/// # Type Parameters
/// * `S` - DependencyTreeSource implementation
/// * `PR` - ProgressReporter implementation
pub struct ExtractDependenciesUseCase<S, PR> {
    tree_source: S,
    progress_reporter: PR,
}

impl<S, PR> ExtractDependenciesUseCase<S, PR>
where
    S: DependencyTreeSource,
    PR: ProgressReporter,
{
    /// Creates a new ExtractDependenciesUseCase with injected dependencies
    pub fn new(tree_source: S, progress_reporter: PR) -> Self {
        Self {
            tree_source,
            progress_reporter,
        }
    }

    /// Executes the extraction use case
    pub fn execute(&self, request: GraphRequest) -> Result<GraphResponse> {
        // Step 1: Obtain the raw tree report
        let raw = self.read_tree(&request)?;

        // Step 2: Decode it into a forest
        let forest = self.decode_tree(&raw)?;

        // Step 3: Flatten into the deduplicated graph
        let graph = self.flatten_tree(&forest);

        let metadata = ReportMetadataGenerator::generate_default_metadata(&request.project_path);
        Ok(GraphResponse::new(graph, metadata))
    }

    fn read_tree(&self, request: &GraphRequest) -> Result<String> {
        self.progress_reporter.begin_task(&format!(
            "📖 Reading dependency tree from {} in {}",
            self.tree_source.describe(),
            request.project_path.display()
        ));

        match self.tree_source.read_tree(&request.project_path) {
            Ok(raw) => {
                self.progress_reporter
                    .report_completion("✅ Dependency tree report received");
                Ok(raw)
            }
            Err(e) => {
                self.progress_reporter
                    .report_error("❌ Failed to obtain the dependency tree report");
                Err(e)
            }
        }
    }

    fn decode_tree(&self, raw: &str) -> Result<Vec<TreeNode>> {
        let forest = TreeDecoder::decode(raw)?;

        let positions: usize = forest.iter().map(TreeNode::subtree_size).sum();
        self.progress_reporter.report(&format!(
            "✅ Decoded {} top-level package(s), {} tree position(s)",
            forest.len(),
            positions
        ));

        Ok(forest)
    }

    fn flatten_tree(&self, forest: &[TreeNode]) -> DependencyGraph {
        self.progress_reporter
            .report("📊 Flattening dependency tree...");

        let graph = GraphFlattener::flatten(forest);

        let direct = graph.direct_dependency_count();
        let packages = graph.package_count();
        let edges = graph.edge_count();
        self.progress_reporter
            .report(&format!("   - Direct dependencies: {}", direct));
        self.progress_reporter
            .report(&format!("   - Unique packages: {}", packages));
        self.progress_reporter
            .report(&format!("   - Dependency edges: {}", edges));

        graph
    }
}
