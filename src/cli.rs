use clap::Parser;

use pkg_graph::application::dto::OutputFormat;

/// Build package dependency graphs and render them as Mermaid diagrams
#[derive(Parser, Debug)]
#[command(name = "pkg-graph")]
#[command(version)]
#[command(about = "Build package dependency graphs and render them as Mermaid diagrams", long_about = None)]
pub struct Args {
    /// Path to the project directory searched for a config file (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Path to a config file (YAML, or JSON when the extension is .json)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Package the traversal starts from
    #[arg(short, long, value_name = "PACKAGE")]
    pub start: Option<String>,

    /// Maximum traversal depth (0 lists only the start package's direct dependencies)
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Registry file (JSON, YAML or TOML) mapping package names to their direct dependencies
    #[arg(short, long, value_name = "FILE", conflicts_with = "static_table")]
    pub registry: Option<String>,

    /// Use the built-in static table even when the config enables the registry
    #[arg(long)]
    pub static_table: bool,

    /// List the packages that directly depend on this package
    #[arg(short, long, value_name = "PACKAGE")]
    pub target: Option<String>,

    /// Output format: text, mermaid or html (defaults to text)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_args() {
        let args = Args::try_parse_from(["pkg-graph"]).unwrap();
        assert!(args.path.is_none());
        assert!(args.start.is_none());
        assert!(args.max_depth.is_none());
        assert!(!args.static_table);
        assert!(args.format.is_none());
    }

    #[test]
    fn test_parse_all_short_flags() {
        let args = Args::try_parse_from([
            "pkg-graph",
            "-p",
            "project",
            "-c",
            "custom.yml",
            "-s",
            "requests",
            "-d",
            "2",
            "-r",
            "test_repo.json",
            "-t",
            "six",
            "-f",
            "mermaid",
            "-o",
            "graph.mmd",
        ])
        .unwrap();

        assert_eq!(args.path.as_deref(), Some("project"));
        assert_eq!(args.config.as_deref(), Some("custom.yml"));
        assert_eq!(args.start.as_deref(), Some("requests"));
        assert_eq!(args.max_depth, Some(2));
        assert_eq!(args.registry.as_deref(), Some("test_repo.json"));
        assert_eq!(args.target.as_deref(), Some("six"));
        assert_eq!(args.format, Some(OutputFormat::Mermaid));
        assert_eq!(args.output.as_deref(), Some("graph.mmd"));
    }

    #[test]
    fn test_negative_max_depth_rejected() {
        let result = Args::try_parse_from(["pkg-graph", "--max-depth", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_numeric_max_depth_rejected() {
        let result = Args::try_parse_from(["pkg-graph", "--max-depth", "deep"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = Args::try_parse_from(["pkg-graph", "--format", "svg"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_case_insensitive() {
        let args = Args::try_parse_from(["pkg-graph", "--format", "HTML"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Html));
    }

    #[test]
    fn test_registry_conflicts_with_static_table() {
        let result = Args::try_parse_from([
            "pkg-graph",
            "--registry",
            "test_repo.json",
            "--static-table",
        ]);
        assert!(result.is_err());
    }
}
