mod cli;

use cli::Args;
use pkg_graph::adapters::outbound::console::StderrProgressReporter;
use pkg_graph::application::dto::{GraphRequest, OutputFormat};
use pkg_graph::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType, SourceFactory, SourceType,
};
use pkg_graph::application::use_cases::BuildGraphUseCase;
use pkg_graph::config::{self, ConfigFile, DEFAULT_REGISTRY_FILE};
use pkg_graph::graph_building::domain::{DepthBound, PackageName};
use pkg_graph::ports::outbound::ProgressReporter;
use pkg_graph::shared::error::{ExitCode, GraphError};
use pkg_graph::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

/// Settings for one run after the config file and CLI options are merged
#[derive(Debug)]
struct Settings {
    request: GraphRequest,
    source_type: SourceType,
    format: OutputFormat,
    output: Option<PathBuf>,
}

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    // Validate project directory
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);

    validate_project_path(&project_path)?;

    let config = load_config(&args, &project_path)?;
    let settings = merge_settings(&args, config.as_ref(), &project_path)?;

    // Loading the source is the only fallible step before traversal
    let source = SourceFactory::create(&settings.source_type)?;
    let progress_reporter = StderrProgressReporter::new();
    progress_reporter.report(&format!(
        "🚀 Building dependency graph for '{}' (max_depth={})",
        settings.request.start_package, settings.request.max_depth
    ));

    let use_case = BuildGraphUseCase::new(source, progress_reporter);
    let response = use_case.execute(settings.request);

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Loads the explicit `--config` file, or auto-discovers one in the project directory.
fn load_config(args: &Args, project_path: &Path) -> Result<Option<ConfigFile>> {
    if let Some(config_path) = args.config.as_deref() {
        let path = PathBuf::from(config_path);
        let config = config::load_config_from_path(&path)?;
        eprintln!("📄 Loaded config from: {}", path.display());
        return Ok(Some(config));
    }

    match config::discover_config(project_path)? {
        Some(discovered) => {
            eprintln!(
                "📄 Auto-discovered config file: {}",
                discovered.path.display()
            );
            Ok(Some(discovered.config))
        }
        None => Ok(None),
    }
}

/// Merges CLI options over config values. CLI options win when both are set.
fn merge_settings(
    args: &Args,
    config: Option<&ConfigFile>,
    project_path: &Path,
) -> Result<Settings> {
    let start_package = args
        .start
        .clone()
        .or_else(|| config.and_then(|c| c.package_name.clone()))
        .ok_or_else(|| GraphError::InvalidConfig {
            field: "package_name".to_string(),
            reason: "No start package given. Pass --start or set package_name in the config file"
                .to_string(),
        })?;
    let start_package = non_empty_package("package_name", start_package)?;

    let max_depth = match (args.max_depth, config.and_then(|c| c.max_depth)) {
        (Some(depth), _) => depth,
        (None, Some(depth)) => usize::try_from(depth).map_err(|_| GraphError::InvalidConfig {
            field: "max_depth".to_string(),
            reason: format!("must be an integer >= 0 (got {})", depth),
        })?,
        (None, None) => {
            return Err(GraphError::InvalidConfig {
                field: "max_depth".to_string(),
                reason: "No depth bound given. Pass --max-depth or set max_depth in the config file"
                    .to_string(),
            }
            .into());
        }
    };

    let target_package = args
        .target
        .clone()
        .or_else(|| config.and_then(|c| c.target_package.clone()))
        .map(|target| non_empty_package("target_package", target))
        .transpose()?;

    let source_type = if args.static_table {
        SourceType::StaticTable
    } else if let Some(registry) = args.registry.as_deref() {
        SourceType::Registry(PathBuf::from(registry))
    } else if config.and_then(|c| c.test_mode).unwrap_or(false) {
        let repo_path = config
            .and_then(|c| c.repo_path.as_deref())
            .unwrap_or(DEFAULT_REGISTRY_FILE);
        SourceType::Registry(resolve_config_path(project_path, repo_path))
    } else {
        SourceType::StaticTable
    };

    let format = match (args.format, config.and_then(|c| c.format.as_deref())) {
        (Some(format), _) => format,
        (None, Some(value)) => {
            let parsed = value.parse::<OutputFormat>();
            parsed.map_err(|reason| GraphError::InvalidConfig {
                field: "format".to_string(),
                reason,
            })?
        }
        (None, None) => OutputFormat::default(),
    };

    let output = match (
        args.output.as_deref(),
        config.and_then(|c| c.output.as_deref()),
    ) {
        (Some(output), _) => Some(PathBuf::from(output)),
        (None, Some(output)) => Some(resolve_config_path(project_path, output)),
        (None, None) => None,
    };

    Ok(Settings {
        request: GraphRequest::new(start_package, DepthBound::new(max_depth), target_package),
        source_type,
        format,
        output,
    })
}

fn non_empty_package(field: &str, name: String) -> Result<PackageName> {
    if name.trim().is_empty() {
        return Err(GraphError::InvalidConfig {
            field: field.to_string(),
            reason: "Package name must not be empty".to_string(),
        }
        .into());
    }
    Ok(PackageName::new(name))
}

/// Paths in a config file are relative to the project directory.
fn resolve_config_path(project_path: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_path.join(path)
    }
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(GraphError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| GraphError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(GraphError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(GraphError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
