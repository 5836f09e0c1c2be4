use super::{Import, PackageId, TreeNode};

/// PackageRecord entity: the flattened unit of a [`DependencyGraph`]
///
/// Children are referenced by identity only; their own records live in the
/// graph's package map.
///
/// [`DependencyGraph`]: super::DependencyGraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    id: PackageId,
    imports: Vec<Import>,
}

impl PackageRecord {
    pub fn new(id: PackageId, imports: Vec<Import>) -> Self {
        Self { id, imports }
    }

    /// Builds the record for a tree position: its identity plus one
    /// transitive import per immediate child, in child order
    pub fn from_node(node: &TreeNode) -> Self {
        let imports = node
            .dependencies()
            .iter()
            .map(|child| Import::transitive(child.package_id()))
            .collect();
        Self::new(node.package_id(), imports)
    }

    pub fn id(&self) -> &PackageId {
        &self.id
    }

    pub fn imports(&self) -> &[Import] {
        &self.imports
    }
}
