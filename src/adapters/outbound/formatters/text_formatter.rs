use crate::application::dto::{GraphResponse, ReverseLookup};
use crate::graph_building::domain::PackageName;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;

/// Placeholder printed for an empty package list
const NONE_MARKER: &str = "  (none)\n";

/// TextFormatter adapter producing the human-readable report
///
/// Sections: run parameters, direct dependencies of the start package, the
/// forward graph in visitation order, the optional reverse lookup and the
/// diagram text.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn join_names(names: &[PackageName]) -> String {
        names
            .iter()
            .map(PackageName::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl TextFormatter {
    fn render_parameters(&self, output: &mut String, response: &GraphResponse) {
        output.push_str("Parameters:\n");
        output.push_str(&format!("  package_name: {}\n", response.graph.root()));
        output.push_str(&format!("  max_depth: {}\n", response.graph.max_depth()));
        output.push_str(&format!("  source: {}\n", response.source_description));
        if let Some(lookup) = &response.reverse_lookup {
            output.push_str(&format!("  target_package: {}\n", lookup.target));
        }
        output.push('\n');
    }

    fn render_direct_dependencies(&self, output: &mut String, response: &GraphResponse) {
        output.push_str(&format!(
            "Direct dependencies of '{}':\n",
            response.graph.root()
        ));
        if response.direct_dependencies.is_empty() {
            output.push_str(NONE_MARKER);
        } else {
            for dependency in &response.direct_dependencies {
                output.push_str(&format!("  - {}\n", dependency));
            }
        }
        output.push('\n');
    }

    fn render_graph(&self, output: &mut String, response: &GraphResponse) {
        let graph = &response.graph;
        output.push_str(&format!(
            "Dependency graph (max_depth={}, {} packages, {} edges):\n",
            graph.max_depth(),
            graph.package_count(),
            graph.edge_count()
        ));
        for (package, dependencies) in graph.adjacency().iter() {
            output.push_str(&format!(
                "  {} -> [{}]\n",
                package,
                Self::join_names(dependencies)
            ));
        }
        output.push('\n');
    }

    fn render_reverse_lookup(&self, output: &mut String, lookup: &ReverseLookup) {
        output.push_str(&format!("Packages depending on '{}':\n", lookup.target));
        if lookup.dependents.is_empty() {
            output.push_str(NONE_MARKER);
            if !lookup.source_enumerable {
                output.push_str("  (the active dependency source cannot list its packages)\n");
            }
        } else {
            for dependent in &lookup.dependents {
                output.push_str(&format!("  - {}\n", dependent));
            }
        }
        output.push('\n');
    }

    fn render_diagram(&self, output: &mut String, response: &GraphResponse) {
        output.push_str("Diagram (Mermaid):\n");
        output.push_str(&response.diagram);
    }
}

impl GraphFormatter for TextFormatter {
    fn format(&self, response: &GraphResponse) -> Result<String> {
        let mut output = String::new();

        self.render_parameters(&mut output, response);
        self.render_direct_dependencies(&mut output, response);
        self.render_graph(&mut output, response);
        if let Some(lookup) = &response.reverse_lookup {
            self.render_reverse_lookup(&mut output, lookup);
        }
        self.render_diagram(&mut output, response);

        Ok(output)
    }
}
