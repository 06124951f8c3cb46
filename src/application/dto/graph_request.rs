use crate::graph_building::domain::{DepthBound, PackageName};

/// GraphRequest - Validated settings for one graph building run
///
/// Built by the CLI after the config file and command-line options have been
/// merged and checked; the use case trusts its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphRequest {
    /// Package the traversal starts from
    pub start_package: PackageName,
    /// Deepest discovery depth that is expanded
    pub max_depth: DepthBound,
    /// Package whose direct dependents should be looked up, if any
    pub target_package: Option<PackageName>,
}

impl GraphRequest {
    pub fn new(
        start_package: PackageName,
        max_depth: DepthBound,
        target_package: Option<PackageName>,
    ) -> Self {
        Self {
            start_package,
            max_depth,
            target_package,
        }
    }
}
