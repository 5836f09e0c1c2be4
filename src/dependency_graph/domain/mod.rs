pub mod dependency_graph;
pub mod import;
pub mod package_id;
pub mod package_record;
pub mod report_metadata;
pub mod tree_node;

pub use dependency_graph::DependencyGraph;
pub use import::Import;
pub use package_id::{Ecosystem, PackageId};
pub use package_record::PackageRecord;
pub use report_metadata::ReportMetadata;
pub use tree_node::TreeNode;
