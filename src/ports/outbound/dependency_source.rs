use crate::graph_building::domain::{AdjacencyMap, PackageName};

/// DependencySource port: the "direct dependencies of a package" oracle
///
/// Implementations answer from backing data that is fully loaded before the
/// first call and never changes afterwards, so both queries are pure
/// functions of their input for the lifetime of the source. Loading failures
/// belong to the adapter's constructor, never to these methods.
pub trait DependencySource {
    /// Returns the direct dependencies of `package` in the order the backing
    /// data lists them.
    ///
    /// Unknown packages yield an empty list rather than an error.
    fn resolve_direct(&self, package: &PackageName) -> Vec<PackageName>;

    /// Returns every (package, direct dependencies) pair the source holds.
    ///
    /// Sources that cannot enumerate their data return an empty map, which
    /// makes reverse lookups against them come back empty instead of failing.
    fn enumerate_all(&self) -> AdjacencyMap {
        AdjacencyMap::new()
    }

    /// Whether [`DependencySource::enumerate_all`] reflects the backing data.
    ///
    /// An enumerable source may still hold no packages at all.
    fn can_enumerate(&self) -> bool {
        false
    }

    /// Short human-readable description used in progress output
    fn describe(&self) -> String;
}

impl<S: DependencySource + ?Sized> DependencySource for Box<S> {
    fn resolve_direct(&self, package: &PackageName) -> Vec<PackageName> {
        (**self).resolve_direct(package)
    }

    fn enumerate_all(&self) -> AdjacencyMap {
        (**self).enumerate_all()
    }

    fn can_enumerate(&self) -> bool {
        (**self).can_enumerate()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<S: DependencySource + ?Sized> DependencySource for &S {
    fn resolve_direct(&self, package: &PackageName) -> Vec<PackageName> {
        (**self).resolve_direct(package)
    }

    fn enumerate_all(&self) -> AdjacencyMap {
        (**self).enumerate_all()
    }

    fn can_enumerate(&self) -> bool {
        (**self).can_enumerate()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
