//! Small collection types shared by the pipeline.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A multimap that stores multiple values per key. The analyzer uses it
/// for a scope's name → declarations table, where redeclaration checks
/// need every prior declaration of a name.
#[derive(Debug, Clone)]
pub struct MultiMap<K, V> {
    map: FxHashMap<K, Vec<V>>,
}

impl<K: Eq + Hash, V> MultiMap<K, V> {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.map.entry(key).or_default().push(value);
    }

    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.map.get(key).map(|v| v.as_slice())
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut Vec<V>> {
        self.map.get_mut(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.map.iter().map(|(k, v)| (k, v.as_slice()))
    }
}

impl<K: Eq + Hash, V> Default for MultiMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// A set that uses FxHash for fast hashing, suitable for lint internals
/// where DoS resistance is not needed.
pub type FxHashSet<T> = rustc_hash::FxHashSet<T>;

/// Re-export FxHashMap for convenience.
pub type FxMap<K, V> = FxHashMap<K, V>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_map() {
        let mut map = MultiMap::new();
        map.insert("key", 1);
        map.insert("key", 2);
        map.insert("key", 3);
        assert_eq!(map.get(&"key"), Some(&[1, 2, 3][..]));
        assert_eq!(map.get(&"other"), None);
    }

    #[test]
    fn test_multi_map_get_mut() {
        let mut map = MultiMap::new();
        map.insert("key", 1);
        map.get_mut(&"key").unwrap().push(2);
        assert_eq!(map.get(&"key"), Some(&[1, 2][..]));
    }
}
