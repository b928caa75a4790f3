use clap::Parser;

use crate::application::dto::OutputFormat;

/// Generate deployment reports for release milestones
#[derive(Parser, Debug)]
#[command(name = "deploy-report")]
#[command(version)]
#[command(
    about = "Generate deployment reports for release milestones",
    long_about = None
)]
pub struct Args {
    /// Milestone to report on (e.g., v3.12.0)
    #[arg(short, long, required_unless_present = "list")]
    pub milestone: Option<String>,

    /// Output format: text, markdown or html
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Exclude a component from the report
    /// Can be specified multiple times: -e "auth-service" -e "dashboard-ui"
    #[arg(short = 'e', long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Directory to save the report into (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Path to a YAML catalog file (defaults to the built-in demo catalog)
    #[arg(short, long)]
    pub catalog: Option<String>,

    /// Path to a config file (default: ./deploy-report.config.yml when present)
    #[arg(long)]
    pub config: Option<String>,

    /// List known milestones and exit
    #[arg(short, long)]
    pub list: bool,

    /// Emit the milestone list as JSON (only with --list)
    #[arg(long, requires = "list")]
    pub json: bool,
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
    fn test_parse_minimal_invocation() {
        let args = Args::try_parse_from(["deploy-report", "-m", "v3.12.0"]).unwrap();
        assert_eq!(args.milestone.as_deref(), Some("v3.12.0"));
        assert_eq!(args.format, None);
        assert!(args.exclude.is_empty());
        assert!(!args.list);
    }

    #[test]
    fn test_parse_format_and_exclusions() {
        let args = Args::try_parse_from([
            "deploy-report",
            "-m",
            "v3.12.0",
            "-f",
            "markdown",
            "-e",
            "auth-service",
            "-e",
            "dashboard-ui",
        ])
        .unwrap();
        assert_eq!(args.format, Some(OutputFormat::Markdown));
        assert_eq!(args.exclude, vec!["auth-service", "dashboard-ui"]);
    }

    #[test]
    fn test_parse_invalid_format_rejected() {
        let result = Args::try_parse_from(["deploy-report", "-m", "v3.12.0", "-f", "pdf"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_milestone_required_without_list() {
        let result = Args::try_parse_from(["deploy-report"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_does_not_require_milestone() {
        let args = Args::try_parse_from(["deploy-report", "--list"]).unwrap();
        assert!(args.list);
        assert_eq!(args.milestone, None);
    }

    #[test]
    fn test_json_requires_list() {
        let result = Args::try_parse_from(["deploy-report", "-m", "v3.12.0", "--json"]);
        assert!(result.is_err());

        let args = Args::try_parse_from(["deploy-report", "--list", "--json"]).unwrap();
        assert!(args.json);
    }

    #[test]
    fn test_parse_output_dir_and_catalog() {
        let args = Args::try_parse_from([
            "deploy-report",
            "-m",
            "v3.12.0",
            "-o",
            "/tmp/reports",
            "-c",
            "catalog.yml",
        ])
        .unwrap();
        assert_eq!(args.output_dir.as_deref(), Some("/tmp/reports"));
        assert_eq!(args.catalog.as_deref(), Some("catalog.yml"));
    }
}
