use std::fmt;

/// Package ecosystem tag carried by every [`PackageId`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ecosystem {
    /// Python packages resolved by Pipenv
    Python,
}

impl Ecosystem {
    /// Short tag used in package locators
    pub fn as_str(&self) -> &'static str {
        match self {
            Ecosystem::Python => "pip",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// PackageId value object: the identity of a package within a graph
///
/// Two tree positions with equal `(ecosystem, name, version)` are the same
/// package and collapse into a single graph entry. The version is the
/// resolved (installed) version, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageId {
    ecosystem: Ecosystem,
    name: String,
    version: String,
}

impl PackageId {
    pub fn new(ecosystem: Ecosystem, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            ecosystem,
            name: name.into(),
            version: version.into(),
        }
    }

    /// Shorthand for a Python package identity
    pub fn python(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(Ecosystem::Python, name, version)
    }

    pub fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Locator string in the form `pip+<name>$<version>`
    pub fn locator(&self) -> String {
        format!("{}+{}${}", self.ecosystem, self.name, self.version)
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}
