use super::{AdjacencyMap, DepthBound, PackageName};

/// Counters collected while the work stack was drained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Packages expanded (each resolved exactly once)
    pub expanded: usize,
    /// Stack entries discarded because the package was already expanded
    pub skipped_visited: usize,
    /// Stack entries discarded because their depth exceeded the bound
    pub skipped_depth: usize,
    /// Largest number of pending entries on the stack at any point
    pub peak_stack_len: usize,
}

impl TraversalStats {
    /// Total number of stack entries popped during the traversal
    pub fn processed(&self) -> usize {
        self.expanded + self.skipped_visited + self.skipped_depth
    }
}

/// DependencyGraph aggregate: the forward graph produced by one bounded traversal
///
/// Packages appear in visitation order. A package listed here was expanded;
/// packages only reachable beyond the depth bound are absent altogether.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    root: PackageName,
    max_depth: DepthBound,
    adjacency: AdjacencyMap,
    stats: TraversalStats,
}

impl DependencyGraph {
    pub fn new(
        root: PackageName,
        max_depth: DepthBound,
        adjacency: AdjacencyMap,
        stats: TraversalStats,
    ) -> Self {
        Self {
            root,
            max_depth,
            adjacency,
            stats,
        }
    }

    pub fn root(&self) -> &PackageName {
        &self.root
    }

    pub fn max_depth(&self) -> DepthBound {
        self.max_depth
    }

    pub fn adjacency(&self) -> &AdjacencyMap {
        &self.adjacency
    }

    pub fn stats(&self) -> &TraversalStats {
        &self.stats
    }

    pub fn dependencies_of(&self, package: &str) -> Option<&[PackageName]> {
        self.adjacency.get(package)
    }

    pub fn contains(&self, package: &str) -> bool {
        self.adjacency.contains_key(package)
    }

    /// Packages in the order they were expanded
    pub fn packages(&self) -> impl Iterator<Item = &PackageName> {
        self.adjacency.keys()
    }

    pub fn package_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }
}
