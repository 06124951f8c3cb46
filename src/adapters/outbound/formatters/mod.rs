/// Formatter adapters implementing the GraphFormatter port
mod html_formatter;
mod mermaid_formatter;
mod text_formatter;

pub use html_formatter::HtmlFormatter;
pub use mermaid_formatter::MermaidFormatter;
pub use text_formatter::TextFormatter;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::adapters::outbound::sources::StaticTableSource;
    use crate::application::dto::{GraphResponse, ReverseLookup};
    use crate::graph_building::domain::{DepthBound, PackageName};
    use crate::graph_building::services::{DiagramSerializer, GraphBuilder};
    use crate::ports::outbound::DependencySource;

    /// Response for `requests` over the built-in table, as the use case would build it
    pub fn sample_response(max_depth: usize, target: Option<&str>) -> GraphResponse {
        let source = StaticTableSource::builtin();
        let start = PackageName::from("requests");
        let graph = GraphBuilder::build(&start, DepthBound::new(max_depth), &source);
        let diagram = DiagramSerializer::render(graph.adjacency());
        let reverse_lookup = target.map(|t| ReverseLookup {
            target: PackageName::from(t),
            dependents: vec![],
            source_enumerable: false,
        });

        GraphResponse::new(
            source.describe(),
            source.resolve_direct(&start),
            graph,
            reverse_lookup,
            diagram,
        )
    }
}
