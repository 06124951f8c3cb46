//! pkg-graph - package dependency graph builder
//!
//! This library walks the direct-dependency relation of a package source with
//! a depth bound, answers "who depends on X" lookups and renders the result
//! as a Mermaid flowchart, following hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_building`): Graph types and the traversal, inversion and diagram services
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Dependency sources, formatters and output
//! - **Config** (`config`): Config file loading and discovery
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pkg_graph::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let source = StaticTableSource::builtin();
//! let progress_reporter = StderrProgressReporter::new();
//! let use_case = BuildGraphUseCase::new(source, progress_reporter);
//!
//! let request = GraphRequest::new(PackageName::from("requests"), DepthBound::new(2), None);
//! let response = use_case.execute(request);
//!
//! let output = MermaidFormatter::new().format(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod graph_building;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        HtmlFormatter, MermaidFormatter, TextFormatter,
    };
    pub use crate::adapters::outbound::sources::{RegistryFileSource, StaticTableSource};
    pub use crate::application::dto::{GraphRequest, GraphResponse, OutputFormat, ReverseLookup};
    pub use crate::application::use_cases::BuildGraphUseCase;
    pub use crate::graph_building::domain::{
        AdjacencyMap, DependencyGraph, DepthBound, PackageName, ReverseDependencyGraph,
    };
    pub use crate::graph_building::services::{DiagramSerializer, GraphBuilder, ReverseIndexer};
    pub use crate::ports::outbound::{
        DependencySource, GraphFormatter, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
