use crate::graph_building::domain::{DependencyGraph, PackageName};

/// Result of a reverse-dependency lookup for one package
#[derive(Debug, Clone)]
pub struct ReverseLookup {
    pub target: PackageName,
    /// Packages listing `target` as a direct dependency, in encounter order
    pub dependents: Vec<PackageName>,
    /// False when the source could not enumerate its data, in which case
    /// `dependents` is empty regardless of the real data
    pub source_enumerable: bool,
}

/// GraphResponse - Output of the graph building use case
///
/// Formatters turn this into text, a Mermaid diagram or an HTML page.
#[derive(Debug, Clone)]
pub struct GraphResponse {
    /// Description of the dependency source that answered the queries
    pub source_description: String,
    /// Direct dependencies of the start package
    pub direct_dependencies: Vec<PackageName>,
    /// Forward graph within the depth bound
    pub graph: DependencyGraph,
    /// Present only when a target package was requested
    pub reverse_lookup: Option<ReverseLookup>,
    /// Mermaid edge-list rendering of `graph`
    pub diagram: String,
}

impl GraphResponse {
    pub fn new(
        source_description: String,
        direct_dependencies: Vec<PackageName>,
        graph: DependencyGraph,
        reverse_lookup: Option<ReverseLookup>,
        diagram: String,
    ) -> Self {
        Self {
            source_description,
            direct_dependencies,
            graph,
            reverse_lookup,
            diagram,
        }
    }
}
