use crate::application::dto::{GraphRequest, GraphResponse, ReverseLookup};
use crate::graph_building::domain::PackageName;
use crate::graph_building::services::{DiagramSerializer, GraphBuilder, ReverseIndexer};
use crate::ports::outbound::{DependencySource, ProgressReporter};

/// BuildGraphUseCase - Core use case for dependency graph building
///
/// Sequences the domain services over one dependency source:
/// direct dependencies of the start package, the depth-bounded forward graph,
/// the optional reverse lookup and the diagram text.
///
/// # Type Parameters
/// * `S` - DependencySource implementation
/// * `PR` - ProgressReporter implementation
///
/// The source is loaded before the use case is constructed, so nothing in
/// [`BuildGraphUseCase::execute`] can fail.
pub struct BuildGraphUseCase<S, PR> {
    source: S,
    progress_reporter: PR,
}

impl<S, PR> BuildGraphUseCase<S, PR>
where
    S: DependencySource,
    PR: ProgressReporter,
{
    /// Creates a new BuildGraphUseCase with injected dependencies
    pub fn new(source: S, progress_reporter: PR) -> Self {
        Self {
            source,
            progress_reporter,
        }
    }

    /// Executes the graph building use case
    ///
    /// # Arguments
    /// * `request` - Validated start package, depth bound and optional target
    ///
    /// # Returns
    /// GraphResponse containing the forward graph, reverse lookup and diagram
    pub fn execute(&self, request: GraphRequest) -> GraphResponse {
        let source_description = self.source.describe();
        self.progress_reporter
            .report(&format!("📦 Dependency source: {}", source_description));

        // Step 1: Direct dependencies of the start package
        let direct_dependencies = self.source.resolve_direct(&request.start_package);
        self.progress_reporter.report(&format!(
            "🔎 '{}' has {} direct dependenc{}",
            request.start_package,
            direct_dependencies.len(),
            if direct_dependencies.len() == 1 {
                "y"
            } else {
                "ies"
            }
        ));

        // Step 2: Bounded traversal
        let graph = GraphBuilder::build_with_progress(
            &request.start_package,
            request.max_depth,
            &self.source,
            |stats, pending| {
                self.progress_reporter.report_progress(
                    stats.expanded,
                    stats.expanded + pending,
                    Some("packages expanded"),
                )
            },
        );
        let stats = *graph.stats();
        self.progress_reporter.report(&format!(
            "✅ Built graph (max_depth={}): {} package(s), {} edge(s), peak stack {}",
            request.max_depth,
            graph.package_count(),
            graph.edge_count(),
            stats.peak_stack_len
        ));

        // Step 3: Reverse lookup if requested
        let reverse_lookup = request
            .target_package
            .as_ref()
            .map(|target| self.lookup_dependents(target));

        // Step 4: Diagram
        let diagram = DiagramSerializer::render(graph.adjacency());

        self.progress_reporter
            .report_completion("✅ Dependency graph ready");

        GraphResponse::new(
            source_description,
            direct_dependencies,
            graph,
            reverse_lookup,
            diagram,
        )
    }

    /// Inverts the complete source data and picks the dependents of `target`
    fn lookup_dependents(&self, target: &PackageName) -> ReverseLookup {
        let source_enumerable = self.source.can_enumerate();
        let full = self.source.enumerate_all();

        if !source_enumerable {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: The dependency source cannot list its packages; reverse lookup for '{}' is empty.",
                target
            ));
        }

        let reverse = ReverseIndexer::invert(&full);
        let dependents = reverse.dependents_of(target.as_str()).to_vec();

        self.progress_reporter.report(&format!(
            "🔁 {} package(s) depend on '{}'",
            dependents.len(),
            target
        ));

        ReverseLookup {
            target: target.clone(),
            dependents,
            source_enumerable,
        }
    }
}
