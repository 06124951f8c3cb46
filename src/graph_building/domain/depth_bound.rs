/// Maximum number of hops from the start package a traversal may expand.
///
/// Depth 0 is the start package itself, so every bound admits the start node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DepthBound(usize);

impl DepthBound {
    pub fn new(max_depth: usize) -> Self {
        Self(max_depth)
    }

    pub fn value(self) -> usize {
        self.0
    }

    /// Whether a node discovered at `depth` may be expanded.
    pub fn admits(self, depth: usize) -> bool {
        depth <= self.0
    }
}

impl From<usize> for DepthBound {
    fn from(max_depth: usize) -> Self {
        Self(max_depth)
    }
}

impl std::fmt::Display for DepthBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bound_admits_only_start() {
        let bound = DepthBound::new(0);
        assert!(bound.admits(0));
        assert!(!bound.admits(1));
    }

    #[test]
    fn test_bound_is_inclusive() {
        let bound = DepthBound::from(3);
        assert!(bound.admits(3));
        assert!(!bound.admits(4));
        assert_eq!(bound.value(), 3);
    }
}
