use crate::adapters::outbound::sources::{RegistryFileSource, StaticTableSource};
use crate::ports::outbound::DependencySource;
use crate::shared::Result;
use std::path::PathBuf;

/// Which dependency source backs a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceType {
    /// Built-in fallback table
    StaticTable,
    /// Registry file at the given path
    Registry(PathBuf),
}

/// Factory for creating dependency sources
///
/// Construction is where backing data is loaded, so a broken registry file
/// fails here, before any traversal starts.
pub struct SourceFactory;

impl SourceFactory {
    /// Creates the dependency source for `source_type`
    ///
    /// # Errors
    /// Returns `GraphError::SourceUnavailable` if a registry file cannot be loaded
    pub fn create(source_type: &SourceType) -> Result<Box<dyn DependencySource>> {
        match source_type {
            SourceType::StaticTable => Ok(Box::new(StaticTableSource::builtin())),
            SourceType::Registry(path) => Ok(Box::new(RegistryFileSource::load(path)?)),
        }
    }
}
