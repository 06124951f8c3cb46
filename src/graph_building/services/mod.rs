mod diagram_serializer;
mod graph_builder;
mod reverse_indexer;

pub use diagram_serializer::{DiagramSerializer, DIAGRAM_HEADER, EDGE_INDENT};
pub use graph_builder::GraphBuilder;
pub use reverse_indexer::ReverseIndexer;
