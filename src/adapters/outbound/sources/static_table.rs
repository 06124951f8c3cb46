use crate::graph_building::domain::{AdjacencyMap, PackageName};
use crate::ports::outbound::DependencySource;

/// Builds the fallback table used when no registry file is configured
pub fn builtin_table() -> AdjacencyMap {
    [
        ("requests", vec!["urllib3", "chardet"]),
        ("urllib3", vec!["six"]),
        ("chardet", vec![]),
        ("six", vec![]),
    ]
    .into_iter()
    .map(|(name, deps)| {
        (
            PackageName::from(name),
            deps.into_iter().map(PackageName::from).collect(),
        )
    })
    .collect()
}

/// StaticTableSource adapter answering from an injected in-memory table
///
/// The table is owned by the instance and never mutated, so independent
/// sources (and tests) can use different tables side by side.
///
/// This source does not enumerate its table: reverse lookups against it
/// come back empty.
#[derive(Debug, Clone)]
pub struct StaticTableSource {
    table: AdjacencyMap,
}

impl StaticTableSource {
    pub fn new(table: AdjacencyMap) -> Self {
        Self { table }
    }

    /// Source backed by [`builtin_table`]
    pub fn builtin() -> Self {
        Self::new(builtin_table())
    }
}

impl Default for StaticTableSource {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DependencySource for StaticTableSource {
    fn resolve_direct(&self, package: &PackageName) -> Vec<PackageName> {
        self.table
            .get(package.as_str())
            .map(|deps| deps.to_vec())
            .unwrap_or_default()
    }

    fn describe(&self) -> String {
        format!("static table ({} packages)", self.table.len())
    }
}
