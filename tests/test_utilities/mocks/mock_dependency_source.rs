use pkg_graph::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock DependencySource for testing
///
/// Answers from an in-memory table and records every `resolve_direct` call.
#[derive(Clone)]
pub struct MockDependencySource {
    pub table: AdjacencyMap,
    pub enumerable: bool,
    pub resolved: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockDependencySource {
    pub fn new() -> Self {
        Self {
            table: AdjacencyMap::new(),
            enumerable: true,
            resolved: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_package(mut self, name: &str, dependencies: &[&str]) -> Self {
        self.table.insert(
            PackageName::from(name),
            dependencies.iter().map(|d| PackageName::from(*d)).collect(),
        );
        self
    }

    /// Behaves like a source that cannot list its packages
    pub fn without_enumeration(mut self) -> Self {
        self.enumerable = false;
        self
    }

    pub fn resolved_packages(&self) -> Vec<String> {
        self.resolved.lock().unwrap().clone()
    }

    pub fn resolve_count(&self, name: &str) -> usize {
        self.resolved
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.as_str() == name)
            .count()
    }
}

impl DependencySource for MockDependencySource {
    fn resolve_direct(&self, package: &PackageName) -> Vec<PackageName> {
        self.resolved
            .lock()
            .unwrap()
            .push(package.as_str().to_string());
        self.table
            .get(package.as_str())
            .map(|deps| deps.to_vec())
            .unwrap_or_default()
    }

    fn enumerate_all(&self) -> AdjacencyMap {
        if self.enumerable {
            self.table.clone()
        } else {
            AdjacencyMap::new()
        }
    }

    fn can_enumerate(&self) -> bool {
        self.enumerable
    }

    fn describe(&self) -> String {
        format!("mock source ({} packages)", self.table.len())
    }
}
