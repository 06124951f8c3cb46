pub mod adjacency_map;
pub mod dependency_graph;
pub mod depth_bound;
pub mod diagram_edge;
pub mod package;
pub mod reverse_dependency_graph;

pub use adjacency_map::AdjacencyMap;
pub use dependency_graph::{DependencyGraph, TraversalStats};
pub use depth_bound::DepthBound;
pub use diagram_edge::DiagramEdge;
pub use package::PackageName;
pub use reverse_dependency_graph::ReverseDependencyGraph;
