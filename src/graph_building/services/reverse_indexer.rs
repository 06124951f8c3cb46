use crate::graph_building::domain::{AdjacencyMap, ReverseDependencyGraph};

/// ReverseIndexer service for building "who depends on X" lookups
///
/// The input must be the complete dependency data of a source, not a
/// depth-bounded forward graph, otherwise dependents outside the traversal
/// window would be missed.
pub struct ReverseIndexer;

impl ReverseIndexer {
    /// Inverts every edge of `full`
    ///
    /// Dependents are appended in encounter order: packages in the iteration
    /// order of `full`, then dependencies in list order. Each forward edge
    /// contributes exactly one reverse entry, so a dependency listed twice by
    /// the same package yields that package twice.
    pub fn invert(full: &AdjacencyMap) -> ReverseDependencyGraph {
        let mut dependents = AdjacencyMap::new();
        for (package, dependency) in full.edges() {
            dependents.push_target(dependency, package.clone());
        }
        ReverseDependencyGraph::new(dependents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_building::domain::PackageName;

    fn map(entries: &[(&str, &[&str])]) -> AdjacencyMap {
        entries
            .iter()
            .map(|(name, deps)| {
                (
                    PackageName::from(*name),
                    deps.iter().map(|d| PackageName::from(*d)).collect(),
                )
            })
            .collect()
    }

    fn names(graph: &ReverseDependencyGraph, package: &str) -> Vec<String> {
        graph
            .dependents_of(package)
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    #[test]
    fn test_invert_collects_dependents_in_encounter_order() {
        let full = map(&[
            ("requests", &["urllib3", "chardet"]),
            ("botocore", &["urllib3"]),
            ("urllib3", &["six"]),
            ("six", &[]),
        ]);
        let reverse = ReverseIndexer::invert(&full);

        assert_eq!(names(&reverse, "urllib3"), vec!["requests", "botocore"]);
        assert_eq!(names(&reverse, "chardet"), vec!["requests"]);
        assert_eq!(names(&reverse, "six"), vec!["urllib3"]);
        assert!(names(&reverse, "requests").is_empty());
    }

    #[test]
    fn test_invert_key_order_follows_first_encounter() {
        let full = map(&[("a", &["c", "b"]), ("d", &["b"])]);
        let reverse = ReverseIndexer::invert(&full);

        let keys: Vec<&str> = reverse.adjacency().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["c", "b"]);
    }

    #[test]
    fn test_invert_unknown_package_has_no_dependents() {
        let reverse = ReverseIndexer::invert(&map(&[("a", &["b"])]));
        assert!(reverse.dependents_of("zzz").is_empty());
    }

    #[test]
    fn test_invert_empty_map() {
        let reverse = ReverseIndexer::invert(&AdjacencyMap::new());
        assert!(reverse.is_empty());
    }

    #[test]
    fn test_invert_edges_correspond_one_to_one() {
        let full = map(&[
            ("a", &["b", "c", "a"]),
            ("b", &["c"]),
            ("c", &["a", "a"]),
            ("d", &[]),
        ]);
        let reverse = ReverseIndexer::invert(&full);

        // Every forward edge appears as a reverse entry.
        for (package, dependency) in full.edges() {
            assert!(reverse.dependents_of(dependency.as_str()).contains(package));
        }

        // Every reverse entry traces back to a forward edge, with matching multiplicity.
        let mut forward: Vec<(String, String)> = full
            .edges()
            .map(|(p, d)| (p.to_string(), d.to_string()))
            .collect();
        let mut backward: Vec<(String, String)> = reverse
            .adjacency()
            .edges()
            .map(|(d, p)| (p.to_string(), d.to_string()))
            .collect();
        forward.sort();
        backward.sort();
        assert_eq!(forward, backward);
    }
}
