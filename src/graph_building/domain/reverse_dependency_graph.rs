use super::{AdjacencyMap, PackageName};

/// Reverse graph: for each package, the packages that list it as a direct dependency
#[derive(Debug, Clone, Default)]
pub struct ReverseDependencyGraph {
    dependents: AdjacencyMap,
}

impl ReverseDependencyGraph {
    pub fn new(dependents: AdjacencyMap) -> Self {
        Self { dependents }
    }

    /// Dependents of `package` in the order they were encountered.
    /// Unknown packages have no dependents.
    pub fn dependents_of(&self, package: &str) -> &[PackageName] {
        self.dependents.get(package).unwrap_or(&[])
    }

    pub fn adjacency(&self) -> &AdjacencyMap {
        &self.dependents
    }

    pub fn package_count(&self) -> usize {
        self.dependents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependents.is_empty()
    }
}
