use super::PackageName;
use std::collections::HashMap;

/// Insertion-ordered mapping from a package to an ordered list of packages
///
/// Keys are unique and iterate in the order they were first inserted; each
/// value list keeps the order it was given in. Lookups go through a side index
/// so the ordering never costs a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMap {
    entries: Vec<(PackageName, Vec<PackageName>)>,
    index: HashMap<PackageName, usize>,
}

impl AdjacencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `targets` under `key`.
    ///
    /// A new key is appended at the end. An existing key keeps its position and
    /// has its list replaced; the previous list is returned.
    pub fn insert(
        &mut self,
        key: PackageName,
        targets: Vec<PackageName>,
    ) -> Option<Vec<PackageName>> {
        match self.index.get(&key).copied() {
            Some(position) => Some(std::mem::replace(&mut self.entries[position].1, targets)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, targets));
                None
            }
        }
    }

    /// Appends one target to the list under `key`, creating the entry if absent.
    pub fn push_target(&mut self, key: &PackageName, target: PackageName) {
        match self.index.get(key).copied() {
            Some(position) => self.entries[position].1.push(target),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key.clone(), vec![target]));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&[PackageName]> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of (key, target) pairs, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|(_, targets)| targets.len()).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &PackageName> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PackageName, &[PackageName])> {
        self.entries
            .iter()
            .map(|(key, targets)| (key, targets.as_slice()))
    }

    /// Every (key, target) pair in key order, then list order.
    pub fn edges(&self) -> impl Iterator<Item = (&PackageName, &PackageName)> {
        self.entries
            .iter()
            .flat_map(|(key, targets)| targets.iter().map(move |target| (key, target)))
    }
}

impl FromIterator<(PackageName, Vec<PackageName>)> for AdjacencyMap {
    fn from_iter<I: IntoIterator<Item = (PackageName, Vec<PackageName>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, targets) in iter {
            map.insert(key, targets);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<PackageName> {
        list.iter().map(|n| PackageName::from(*n)).collect()
    }

    #[test]
    fn test_insert_preserves_key_order() {
        let mut map = AdjacencyMap::new();
        map.insert("zeta".into(), vec![]);
        map.insert("alpha".into(), names(&["zeta"]));
        map.insert("mid".into(), vec![]);

        let keys: Vec<&str> = map.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_insert_existing_key_keeps_position() {
        let mut map = AdjacencyMap::new();
        map.insert("a".into(), names(&["x"]));
        map.insert("b".into(), vec![]);

        let previous = map.insert("a".into(), names(&["y", "z"]));

        assert_eq!(previous, Some(names(&["x"])));
        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().next().unwrap().as_str(), "a");
        assert_eq!(map.get("a").unwrap(), names(&["y", "z"]).as_slice());
    }

    #[test]
    fn test_push_target_creates_and_appends() {
        let mut map = AdjacencyMap::new();
        let key = PackageName::from("six");
        map.push_target(&key, "urllib3".into());
        map.push_target(&key, "other".into());

        assert_eq!(
            map.get("six").unwrap(),
            names(&["urllib3", "other"]).as_slice()
        );
    }

    #[test]
    fn test_get_missing_key() {
        let map = AdjacencyMap::new();
        assert!(map.get("missing").is_none());
        assert!(!map.contains_key("missing"));
        assert!(map.is_empty());
    }

    #[test]
    fn test_empty_list_is_still_a_key() {
        let mut map = AdjacencyMap::new();
        map.insert("leaf".into(), vec![]);
        assert!(map.contains_key("leaf"));
        assert_eq!(map.get("leaf").unwrap().len(), 0);
    }

    #[test]
    fn test_edges_and_edge_count() {
        let map: AdjacencyMap = vec![
            ("a".into(), names(&["b", "c"])),
            ("b".into(), names(&["c"])),
            ("c".into(), vec![]),
        ]
        .into_iter()
        .collect();

        let edges: Vec<(&str, &str)> = map.edges().map(|(f, t)| (f.as_str(), t.as_str())).collect();
        assert_eq!(edges, vec![("a", "b"), ("a", "c"), ("b", "c")]);
        assert_eq!(map.edge_count(), 3);
    }
}
