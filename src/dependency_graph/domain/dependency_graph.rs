use super::{Import, PackageId, PackageRecord};
use std::collections::BTreeMap;

/// DependencyGraph aggregate representing the flattened dependency structure
///
/// `direct` lists the project's top-level imports exactly as the report
/// listed them (order and duplicates preserved). `packages` holds one record
/// per distinct package reachable from any top-level entry, keyed by
/// identity and iterated in identity order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependencyGraph {
    direct: Vec<Import>,
    packages: BTreeMap<PackageId, PackageRecord>,
}

impl DependencyGraph {
    pub fn new(direct: Vec<Import>, packages: BTreeMap<PackageId, PackageRecord>) -> Self {
        Self { direct, packages }
    }

    pub fn direct(&self) -> &[Import] {
        &self.direct
    }

    pub fn packages(&self) -> &BTreeMap<PackageId, PackageRecord> {
        &self.packages
    }

    pub fn package(&self, id: &PackageId) -> Option<&PackageRecord> {
        self.packages.get(id)
    }

    pub fn contains(&self, id: &PackageId) -> bool {
        self.packages.contains_key(id)
    }

    pub fn direct_dependency_count(&self) -> usize {
        self.direct.len()
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Total number of package-to-package edges across all records
    pub fn edge_count(&self) -> usize {
        self.packages.values().map(|r| r.imports().len()).sum()
    }
}
