use crate::graph_building::domain::{AdjacencyMap, PackageName};
use crate::ports::outbound::DependencySource;
use crate::shared::error::GraphError;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::path::{Path, PathBuf};

/// Serialization format of a registry file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryFormat {
    Json,
    Yaml,
    Toml,
}

impl RegistryFormat {
    /// Picks the format from the file extension; unknown extensions are read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yml") | Some("yaml") => RegistryFormat::Yaml,
            Some("toml") => RegistryFormat::Toml,
            _ => RegistryFormat::Json,
        }
    }
}

/// Top-level registry mapping, deserialized in document order.
struct RegistryDocument(AdjacencyMap);

impl<'de> Deserialize<'de> for RegistryDocument {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RegistryVisitor;

        impl<'de> Visitor<'de> for RegistryVisitor {
            type Value = RegistryDocument;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from package name to a list of dependency names")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = AdjacencyMap::new();
                while let Some((name, deps)) = access.next_entry::<String, Vec<String>>()? {
                    // A repeated key keeps its first position and takes the last list.
                    entries.insert(
                        PackageName::from(name),
                        deps.into_iter().map(PackageName::from).collect(),
                    );
                }
                Ok(RegistryDocument(entries))
            }
        }

        deserializer.deserialize_map(RegistryVisitor)
    }
}

/// RegistryFileSource adapter backed by a registry file loaded at construction
///
/// The whole file is read and validated up front; a missing, unsafe or
/// malformed file fails [`RegistryFileSource::load`] with
/// [`GraphError::SourceUnavailable`] so no traversal ever runs against a
/// partially loaded registry.
#[derive(Debug, Clone)]
pub struct RegistryFileSource {
    path: PathBuf,
    entries: AdjacencyMap,
}

impl RegistryFileSource {
    /// Loads a registry file, choosing the parser from its extension
    ///
    /// # Errors
    /// Returns `GraphError::SourceUnavailable` if the file does not exist, is a
    /// symlink or directory, exceeds the size limit, or does not parse as a map
    /// of package name to list of names.
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_checked_file(path, "registry file").map_err(|e| {
            GraphError::SourceUnavailable {
                path: path.to_path_buf(),
                details: format!("{:#}", e),
            }
        })?;

        Self::parse(&content, RegistryFormat::from_path(path), path)
    }

    /// Parses registry content already in memory
    ///
    /// # Errors
    /// Returns `GraphError::SourceUnavailable` if the content is malformed
    pub fn parse(content: &str, format: RegistryFormat, path: &Path) -> Result<Self> {
        let parsed = match format {
            RegistryFormat::Json => {
                serde_json::from_str::<RegistryDocument>(content).map_err(|e| e.to_string())
            }
            RegistryFormat::Yaml => {
                serde_yaml_ng::from_str::<RegistryDocument>(content).map_err(|e| e.to_string())
            }
            RegistryFormat::Toml => {
                toml::from_str::<RegistryDocument>(content).map_err(|e| e.to_string())
            }
        };

        let RegistryDocument(entries) = parsed.map_err(|details| GraphError::SourceUnavailable {
            path: path.to_path_buf(),
            details,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn package_count(&self) -> usize {
        self.entries.len()
    }
}

impl DependencySource for RegistryFileSource {
    fn resolve_direct(&self, package: &PackageName) -> Vec<PackageName> {
        self.entries
            .get(package.as_str())
            .map(|deps| deps.to_vec())
            .unwrap_or_default()
    }

    fn enumerate_all(&self) -> AdjacencyMap {
        self.entries.clone()
    }

    fn can_enumerate(&self) -> bool {
        true
    }

    fn describe(&self) -> String {
        format!(
            "registry file {} ({} packages)",
            self.path.display(),
            self.entries.len()
        )
    }
}
