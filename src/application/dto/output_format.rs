/// Output format enumeration for the rendered graph
///
/// Shared by the CLI (to parse `--format`) and the formatter factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable report (default)
    #[default]
    Text,
    /// Mermaid diagram text only
    Mermaid,
    /// Standalone HTML page rendering the diagram in a browser
    Html,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "mermaid" | "mmd" | "md" => Ok(OutputFormat::Mermaid),
            "html" => Ok(OutputFormat::Html),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text', 'mermaid' or 'html'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Mermaid => write!(f, "mermaid"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str_text() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("txt").unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_output_format_from_str_mermaid() {
        assert_eq!(
            OutputFormat::from_str("mermaid").unwrap(),
            OutputFormat::Mermaid
        );
        assert_eq!(
            OutputFormat::from_str("mmd").unwrap(),
            OutputFormat::Mermaid
        );
        assert_eq!(OutputFormat::from_str("md").unwrap(), OutputFormat::Mermaid);
    }

    #[test]
    fn test_output_format_from_str_case_insensitive() {
        assert_eq!(OutputFormat::from_str("HTML").unwrap(), OutputFormat::Html);
        assert_eq!(
            OutputFormat::from_str("Mermaid").unwrap(),
            OutputFormat::Mermaid
        );
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let error = OutputFormat::from_str("svg").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("svg"));
        assert!(error.contains("mermaid"));
    }

    #[test]
    fn test_output_format_from_str_empty() {
        assert!(OutputFormat::from_str("").is_err());
    }

    #[test]
    fn test_output_format_display_round_trips() {
        for format in [
            OutputFormat::Text,
            OutputFormat::Mermaid,
            OutputFormat::Html,
        ] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }

    #[test]
    fn test_output_format_default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
