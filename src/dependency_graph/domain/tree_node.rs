use serde::{Deserialize, Deserializer};

use super::PackageId;

/// One entry of a `pipenv graph --json-tree` report
///
/// A node owns its children. The same logical package may appear as several
/// distinct nodes at different positions in the tree; flattening is what
/// collapses them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TreeNode {
    #[serde(rename = "package_name")]
    name: String,
    #[serde(rename = "installed_version")]
    version: String,
    /// Requested version constraint; missing and `null` both decode to ""
    #[serde(
        rename = "required_version",
        default,
        deserialize_with = "null_as_default"
    )]
    requested: String,
    #[serde(default, deserialize_with = "null_as_default")]
    dependencies: Vec<TreeNode>,
}

/// Treats an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl TreeNode {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        requested: impl Into<String>,
        dependencies: Vec<TreeNode>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            requested: requested.into(),
            dependencies,
        }
    }

    /// A node without children
    pub fn leaf(
        name: impl Into<String>,
        version: impl Into<String>,
        requested: impl Into<String>,
    ) -> Self {
        Self::new(name, version, requested, Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn requested(&self) -> &str {
        &self.requested
    }

    pub fn dependencies(&self) -> &[TreeNode] {
        &self.dependencies
    }

    /// Identity of the package at this position
    pub fn package_id(&self) -> PackageId {
        PackageId::python(self.name.as_str(), self.version.as_str())
    }

    /// Number of node positions in this subtree, the node itself included
    pub fn subtree_size(&self) -> usize {
        let mut size = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            size += 1;
            pending.extend(node.dependencies.iter());
        }
        size
    }
}

impl Drop for TreeNode {
    // Unlinks children onto a heap stack so dropping a deep chain does not
    // recurse once per level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.dependencies);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.dependencies);
        }
    }
}
