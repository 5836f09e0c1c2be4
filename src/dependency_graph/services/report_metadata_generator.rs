use crate::dependency_graph::domain::ReportMetadata;
use chrono::Utc;
use std::path::Path;
use uuid::Uuid;

/// ReportMetadataGenerator service for stamping extraction runs
pub struct ReportMetadataGenerator;

impl ReportMetadataGenerator {
    /// Generates metadata with the current timestamp and a fresh serial number
    pub fn generate_metadata(tool_name: &str, tool_version: &str, project_path: &Path) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let serial_number = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            serial_number,
            project_path.to_path_buf(),
        )
    }

    /// Generates metadata naming this tool and its compile-time version
    pub fn generate_default_metadata(project_path: &Path) -> ReportMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), project_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = ReportMetadataGenerator::generate_metadata("test-tool", "1.0.0", Path::new("."));

        assert_eq!(metadata.tool_name(), "test-tool");
        assert_eq!(metadata.tool_version(), "1.0.0");
        assert!(metadata.serial_number().starts_with("urn:uuid:"));
        assert!(!metadata.timestamp().is_empty());
    }

    #[test]
    fn test_generate_default_metadata() {
        let metadata = ReportMetadataGenerator::generate_default_metadata(Path::new("/proj"));

        assert_eq!(metadata.tool_name(), "pipenv-deps");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(metadata.project_path(), Path::new("/proj"));
    }

    #[test]
    fn test_serial_numbers_are_unique() {
        let a = ReportMetadataGenerator::generate_default_metadata(Path::new("."));
        let b = ReportMetadataGenerator::generate_default_metadata(Path::new("."));
        assert_ne!(a.serial_number(), b.serial_number());
    }
}
