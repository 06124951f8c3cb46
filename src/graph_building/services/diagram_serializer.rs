use crate::graph_building::domain::{AdjacencyMap, DiagramEdge};
use std::collections::HashSet;
use std::fmt::Write as _;

/// First line of every diagram: a top-down Mermaid flowchart
pub const DIAGRAM_HEADER: &str = "graph TD";

/// Prefix written before each edge line
pub const EDGE_INDENT: &str = "    ";

/// DiagramSerializer service for rendering a graph as Mermaid edge-list text
///
/// The output depends only on the iteration order of the input, so equal
/// maps built in the same order always render byte-identical text.
pub struct DiagramSerializer;

impl DiagramSerializer {
    /// Unique edges in first-seen order (package order, then dependency order)
    pub fn edges(graph: &AdjacencyMap) -> Vec<DiagramEdge> {
        let mut seen = HashSet::new();
        graph
            .edges()
            .filter(|&(from, to)| seen.insert((from, to)))
            .map(|(from, to)| DiagramEdge::new(from.clone(), to.clone()))
            .collect()
    }

    /// Renders the header line followed by one indented line per unique edge.
    /// Every line, the last one included, ends with `\n`.
    pub fn render(graph: &AdjacencyMap) -> String {
        let mut out = String::new();
        out.push_str(DIAGRAM_HEADER);
        out.push('\n');
        for edge in Self::edges(graph) {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{}{}", EDGE_INDENT, edge);
        }
        out
    }
}
