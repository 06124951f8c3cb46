//! Configuration file support for pkg-graph.
//!
//! A config file is either discovered in the project directory or given
//! explicitly. YAML is the default syntax; files with a `.json` extension are
//! read as JSON, so `config.json` files using `repo_url` keep working.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::error::GraphError;
use crate::shared::security::read_checked_file;
use crate::shared::Result;

/// File names tried, in order, when discovering a config file
pub const CONFIG_FILENAMES: [&str; 2] = ["pkg-graph.config.yml", "config.json"];

/// Registry file used when the registry source is enabled without a path
pub const DEFAULT_REGISTRY_FILE: &str = "test_repo.json";

/// Top-level configuration file schema.
///
/// Every field is optional here; required settings are enforced after the
/// file has been merged with command-line options.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Package the traversal starts from
    pub package_name: Option<String>,
    /// Maximum traversal depth; signed so negative values can be reported clearly
    pub max_depth: Option<i64>,
    /// Use the registry file instead of the built-in table
    #[serde(alias = "use_registry")]
    pub test_mode: Option<bool>,
    /// Registry file path, relative to the project directory
    #[serde(alias = "repo_url")]
    pub repo_path: Option<String>,
    /// Package to look up dependents for
    pub target_package: Option<String>,
    pub format: Option<String>,
    pub output: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// A config file found by [`discover_config`], with the path it came from
#[derive(Debug)]
pub struct DiscoveredConfig {
    pub path: PathBuf,
    pub config: ConfigFile,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_checked_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config: ConfigFile = if is_json {
        serde_json::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid JSON with the expected field types.",
                path.display()
            )
        })?
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML with the expected field types.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<DiscoveredConfig>> {
    for file_name in CONFIG_FILENAMES {
        let path = dir.join(file_name);
        if path.exists() {
            let config = load_config_from_path(&path)?;
            return Ok(Some(DiscoveredConfig { path, config }));
        }
    }
    Ok(None)
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(max_depth) = config.max_depth {
        if max_depth < 0 {
            return Err(GraphError::InvalidConfig {
                field: "max_depth".to_string(),
                reason: format!(
                    "must be an integer >= 0 (got {}). Use 0 to list only the start package's direct dependencies",
                    max_depth
                ),
            }
            .into());
        }
    }

    for (field, value) in [
        ("package_name", &config.package_name),
        ("target_package", &config.target_package),
        ("repo_path", &config.repo_path),
    ] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(GraphError::InvalidConfig {
                field: field.to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
