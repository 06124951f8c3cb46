/// Graph building core: domain model and pure traversal/indexing/serialization services
///
/// Nothing in this module performs I/O. Dependency data arrives through the
/// [`crate::ports::outbound::DependencySource`] port.
pub mod domain;
pub mod services;
