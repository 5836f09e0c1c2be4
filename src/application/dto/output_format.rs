/// Output format for the dependency report
///
/// Shared by the CLI, the config file and the formatter factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON document with direct imports and the flattened package list (default)
    #[default]
    Json,
    /// Human-readable Markdown format
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'markdown'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str_json() {
        let format = OutputFormat::from_str("json").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_output_format_from_str_markdown() {
        let format = OutputFormat::from_str("markdown").unwrap();
        assert_eq!(format, OutputFormat::Markdown);
    }

    #[test]
    fn test_output_format_from_str_md() {
        let format = OutputFormat::from_str("md").unwrap();
        assert_eq!(format, OutputFormat::Markdown);
    }

    #[test]
    fn test_output_format_from_str_case_insensitive() {
        assert_eq!(
            OutputFormat::from_str("JSON").unwrap(),
            OutputFormat::Json
        );
        assert_eq!(
            OutputFormat::from_str("MD").unwrap(),
            OutputFormat::Markdown
        );
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let result = OutputFormat::from_str("invalid");
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("invalid"));
        assert!(error.contains("json"));
        assert!(error.contains("markdown"));
    }

    #[test]
    fn test_output_format_from_str_empty() {
        let result = OutputFormat::from_str("");
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Markdown.to_string(), "markdown");
    }

    #[test]
    fn test_output_format_default_is_json() {
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }

    #[test]
    fn test_output_format_round_trips_through_display() {
        for format in [OutputFormat::Json, OutputFormat::Markdown] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }
}
