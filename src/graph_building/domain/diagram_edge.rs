use super::PackageName;

/// Directed edge of a rendered diagram
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiagramEdge {
    pub from: PackageName,
    pub to: PackageName,
}

impl DiagramEdge {
    pub fn new(from: PackageName, to: PackageName) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for DiagramEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} --> {}", self.from, self.to)
    }
}
