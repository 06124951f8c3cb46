use crate::graph_building::domain::{
    AdjacencyMap, DependencyGraph, DepthBound, PackageName, TraversalStats,
};
use crate::ports::outbound::DependencySource;
use std::collections::HashSet;

/// GraphBuilder service for depth-bounded dependency traversal
///
/// The walk is driven by an explicit LIFO stack of `(package, depth)` entries
/// instead of recursion, so stack growth is bounded by the depth bound times
/// the widest dependency list and is reported in [`TraversalStats`].
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds the forward graph reachable from `start` within `bound` hops
    ///
    /// # Arguments
    /// * `start` - Package the traversal starts from (depth 0)
    /// * `bound` - Deepest discovery depth that is still expanded
    /// * `source` - Oracle answering direct dependencies
    ///
    /// # Returns
    /// A DependencyGraph whose packages are in depth-first, left-to-right
    /// visitation order. Each expanded package is recorded with the list the
    /// source returned, even when that list is empty; packages first reached
    /// beyond the bound are not recorded at all.
    pub fn build<S>(start: &PackageName, bound: DepthBound, source: &S) -> DependencyGraph
    where
        S: DependencySource + ?Sized,
    {
        Self::build_with_progress(start, bound, source, |_, _| {})
    }

    /// Same as [`GraphBuilder::build`], calling `on_step` after every stack pop
    ///
    /// `on_step` receives the running stats and the number of entries still
    /// pending on the stack. The last call always sees an empty stack.
    pub fn build_with_progress<S, F>(
        start: &PackageName,
        bound: DepthBound,
        source: &S,
        mut on_step: F,
    ) -> DependencyGraph
    where
        S: DependencySource + ?Sized,
        F: FnMut(&TraversalStats, usize),
    {
        let mut visited: HashSet<PackageName> = HashSet::new();
        let mut adjacency = AdjacencyMap::new();
        let mut stats = TraversalStats {
            peak_stack_len: 1,
            ..TraversalStats::default()
        };
        let mut stack: Vec<(PackageName, usize)> = vec![(start.clone(), 0)];

        while let Some((package, depth)) = stack.pop() {
            if visited.contains(&package) {
                stats.skipped_visited += 1;
                on_step(&stats, stack.len());
                continue;
            }
            if !bound.admits(depth) {
                stats.skipped_depth += 1;
                on_step(&stats, stack.len());
                continue;
            }

            visited.insert(package.clone());
            let dependencies = source.resolve_direct(&package);

            // Reversed so that popping yields the source's left-to-right order.
            stack.extend(
                dependencies
                    .iter()
                    .rev()
                    .filter(|dependency| !visited.contains(*dependency))
                    .map(|dependency| (dependency.clone(), depth + 1)),
            );
            stats.peak_stack_len = stats.peak_stack_len.max(stack.len());
            stats.expanded += 1;

            adjacency.insert(package, dependencies);
            on_step(&stats, stack.len());
        }

        DependencyGraph::new(start.clone(), bound, adjacency, stats)
    }
}
