use deploy_report::adapters::outbound::catalog::{StaticCatalog, YamlCatalog};
use deploy_report::adapters::outbound::console::StderrNotifier;
use deploy_report::application::dto::{OutputFormat, ReportRequest};
use deploy_report::application::factories::{SinkFactory, SinkType};
use deploy_report::application::use_cases::GenerateReportUseCase;
use deploy_report::cli::Args;
use deploy_report::config::{self, ConfigFile};
use deploy_report::ports::outbound::{CatalogLookup, Notifier};
use deploy_report::reporting::domain::ReportPayload;
use deploy_report::shared::error::{ExitCode, ReportError};
use deploy_report::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

fn main() {
    let args = Args::parse_args();
    let notifier = StderrNotifier::new();

    match run(args, &notifier) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            // The empty-visible-set guard is a user-facing outcome with
            // its own exit code, not an application failure
            if matches!(
                e.downcast_ref::<ReportError>(),
                Some(ReportError::NoContent { .. })
            ) {
                notifier.failure(&format!("❌ {}", e));
                process::exit(ExitCode::NoContent.as_i32());
            }

            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args, notifier: &StderrNotifier) -> Result<ExitCode> {
    // Load configuration; command-line flags take precedence
    let settings = match &args.config {
        Some(path) => config::load_config_from_path(Path::new(path))?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };

    // Create the catalog adapter (Dependency Injection)
    let catalog_path = args.catalog.clone().map(PathBuf::from).or(settings.catalog.clone());
    let catalog: Box<dyn CatalogLookup> = match catalog_path {
        Some(path) => Box::new(YamlCatalog::from_path(&path)?),
        None => Box::new(StaticCatalog::new()),
    };

    if args.list {
        return list_milestones(catalog.as_ref(), args.json);
    }

    let Some(milestone) = args.milestone.clone() else {
        // clap enforces this already; kept total for library callers
        anyhow::bail!("A milestone is required (use --milestone or --list)");
    };

    let format = resolve_format(&args, &settings)?;
    let excluded = merge_exclusions(&args, &settings);

    // Create use case with injected dependencies
    let use_case = GenerateReportUseCase::new(catalog, StderrNotifier::new());
    let request = ReportRequest::new(milestone, excluded, format);
    let response = use_case.execute(request)?;

    // Deliver the payload
    let sink_type = match args.output_dir.clone().map(PathBuf::from).or(settings.output_dir.clone())
    {
        Some(dir) => SinkType::Directory(dir),
        None => SinkType::Stdout,
    };
    let sink = SinkFactory::create(sink_type);
    match &response.payload {
        ReportPayload::File {
            filename,
            content,
            mime_type,
        } => sink.save(filename, content, mime_type)?,
        ReportPayload::Document { markup } => sink.present(markup)?,
    }

    notifier.success(&format!(
        "✅ Report generated as {} ({} components)",
        response.format.to_string().to_uppercase(),
        response.component_count
    ));

    Ok(ExitCode::Success)
}

/// Resolved output format: CLI flag, then config file, then plain text
fn resolve_format(args: &Args, settings: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = args.format {
        return Ok(format);
    }
    match settings.format.as_deref() {
        Some(value) => {
            OutputFormat::from_str(value).map_err(|message| ReportError::Validation { message }.into())
        }
        None => Ok(OutputFormat::Text),
    }
}

/// Merges CLI and config exclusions, dropping duplicates so an exclusion
/// requested twice stays an exclusion (only interactive toggles flip)
fn merge_exclusions(args: &Args, settings: &ConfigFile) -> Vec<String> {
    let mut excluded: Vec<String> = Vec::new();
    let from_config = settings.exclude_components.iter().flatten();
    for name in args.exclude.iter().chain(from_config) {
        if !excluded.iter().any(|existing| existing == name) {
            excluded.push(name.clone());
        }
    }
    excluded
}

fn list_milestones(catalog: &dyn CatalogLookup, json: bool) -> Result<ExitCode> {
    let milestones = catalog.milestones();
    if json {
        println!("{}", serde_json::to_string_pretty(&milestones)?);
    } else {
        for milestone in &milestones {
            println!("{}", milestone);
        }
    }
    Ok(ExitCode::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args_from(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_resolve_format_prefers_cli_flag() {
        let args = args_from(&["deploy-report", "-m", "v3.12.0", "-f", "html"]);
        let settings = ConfigFile {
            format: Some("markdown".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_format(&args, &settings).unwrap(), OutputFormat::Html);
    }

    #[test]
    fn test_resolve_format_falls_back_to_config() {
        let args = args_from(&["deploy-report", "-m", "v3.12.0"]);
        let settings = ConfigFile {
            format: Some("markdown".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve_format(&args, &settings).unwrap(),
            OutputFormat::Markdown
        );
    }

    #[test]
    fn test_resolve_format_defaults_to_text() {
        let args = args_from(&["deploy-report", "-m", "v3.12.0"]);
        assert_eq!(
            resolve_format(&args, &ConfigFile::default()).unwrap(),
            OutputFormat::Text
        );
    }

    #[test]
    fn test_resolve_format_invalid_config_value() {
        let args = args_from(&["deploy-report", "-m", "v3.12.0"]);
        let settings = ConfigFile {
            format: Some("pdf".to_string()),
            ..Default::default()
        };
        assert!(resolve_format(&args, &settings).is_err());
    }

    #[test]
    fn test_merge_exclusions_deduplicates() {
        let args = args_from(&[
            "deploy-report",
            "-m",
            "v3.12.0",
            "-e",
            "auth-service",
            "-e",
            "dashboard-ui",
        ]);
        let settings = ConfigFile {
            exclude_components: Some(vec![
                "auth-service".to_string(),
                "billing-service".to_string(),
            ]),
            ..Default::default()
        };
        assert_eq!(
            merge_exclusions(&args, &settings),
            vec!["auth-service", "dashboard-ui", "billing-service"]
        );
    }

    #[test]
    fn test_merge_exclusions_empty() {
        let args = args_from(&["deploy-report", "-m", "v3.12.0"]);
        assert!(merge_exclusions(&args, &ConfigFile::default()).is_empty());
    }
}
