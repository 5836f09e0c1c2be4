use super::PackageId;

/// Import value object: an edge from one package to another
///
/// Only direct (top-level) imports carry a requested version constraint in
/// `target`; edges between packages leave it empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Import {
    target: String,
    resolved: PackageId,
}

impl Import {
    /// A top-level import carrying the originally requested constraint
    pub fn direct(target: impl Into<String>, resolved: PackageId) -> Self {
        Self {
            target: target.into(),
            resolved,
        }
    }

    /// An edge between two packages; no constraint is recorded
    pub fn transitive(resolved: PackageId) -> Self {
        Self {
            target: String::new(),
            resolved,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn resolved(&self) -> &PackageId {
        &self.resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_import_keeps_target() {
        let import = Import::direct("^1.0", PackageId::python("A", "1.0"));
        assert_eq!(import.target(), "^1.0");
        assert_eq!(import.resolved(), &PackageId::python("A", "1.0"));
    }

    #[test]
    fn test_transitive_import_has_empty_target() {
        let import = Import::transitive(PackageId::python("B", "2.0"));
        assert_eq!(import.target(), "");
        assert_eq!(import.resolved().name(), "B");
    }
}
