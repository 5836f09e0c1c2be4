use crate::dependency_graph::domain::{DependencyGraph, Import, PackageId, PackageRecord, TreeNode};
use std::collections::BTreeMap;

/// GraphFlattener service for converting a dependency tree into a graph
///
/// This service contains pure business logic with no I/O. It turns the
/// forest decoded from a tree report (where a package may appear at many
/// positions) into a graph where each package appears exactly once.
///
/// Deduplication is asymmetric and must stay that way for output
/// compatibility:
/// - a top-level entry always (re)writes its own record, so when the same
///   identity is listed at the top level twice the last listing wins;
/// - below the top level the first record written for an identity wins, and
///   a repeated identity is not descended into again.
pub struct GraphFlattener;

type PackageMap = BTreeMap<PackageId, PackageRecord>;

impl GraphFlattener {
    /// Flattens a forest into direct imports plus the deduplicated package map
    pub fn flatten(roots: &[TreeNode]) -> DependencyGraph {
        DependencyGraph::new(Self::direct_imports(roots), Self::transitive_packages(roots))
    }

    /// One import per top-level node, in order, duplicates kept
    fn direct_imports(roots: &[TreeNode]) -> Vec<Import> {
        roots
            .iter()
            .map(|root| Import::direct(root.requested(), root.package_id()))
            .collect()
    }

    fn transitive_packages(roots: &[TreeNode]) -> PackageMap {
        let mut packages = PackageMap::new();

        for root in roots {
            let record = PackageRecord::from_node(root);
            packages.insert(record.id().clone(), record);

            Self::flatten_descendants(root, &mut packages);
        }

        packages
    }

    /// Walks the subtree below `node` in pre-order, left to right, recording
    /// every identity not yet present and skipping the subtrees of those
    /// that are.
    ///
    /// Uses an explicit stack of child iterators so the visiting order is
    /// identical to the recursive walk while nesting depth stays off the
    /// call stack.
    fn flatten_descendants(node: &TreeNode, packages: &mut PackageMap) {
        let mut stack = vec![node.dependencies().iter()];

        while let Some(children) = stack.last_mut() {
            let Some(child) = children.next() else {
                stack.pop();
                continue;
            };

            let id = child.package_id();
            if packages.contains_key(&id) {
                continue;
            }

            packages.insert(id, PackageRecord::from_node(child));
            stack.push(child.dependencies().iter());
        }
    }
}
