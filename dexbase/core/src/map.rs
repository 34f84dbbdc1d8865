use std::sync::Arc;

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// An immutable list of values indexed by a unique key.
///
/// Values keep the order they were given in. Cloning is cheap.
#[derive(Debug)]
pub struct Map<K, V>(Arc<Inner<K, V>>);

#[derive(Debug)]
struct Inner<K, V> {
    entries: BTreeMap<K, usize>,
    values: Arc<[V]>,
}

impl<K, V> Map<K, V> {
    /// Indexes the values with the given key function.
    ///
    /// Fails with the offending key if two values share it.
    pub fn new(values: impl Into<Arc<[V]>>, to_key: impl Fn(&V) -> K) -> Result<Self, K>
    where
        K: Ord,
    {
        let values = values.into();
        let mut entries = BTreeMap::new();

        for (i, value) in values.iter().enumerate() {
            match entries.entry(to_key(value)) {
                Entry::Vacant(entry) => {
                    let _ = entry.insert(i);
                }
                Entry::Occupied(entry) => return Err(entry.remove_entry().0),
            }
        }

        Ok(Self(Arc::new(Inner { entries, values })))
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        Some(&self.0.values[*self.0.entries.get(key)?])
    }

    pub fn len(&self) -> usize {
        self.0.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.values.is_empty()
    }

    pub fn values(&self) -> &[V] {
        &self.0.values
    }
}

impl<K, V> Clone for Map<K, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<K, V: PartialEq> PartialEq for Map<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.values() == other.values()
    }
}

#[cfg(test)]
mod map_test {
    use crate::Map;

    use assert_matches::assert_matches;

    #[test]
    fn indexes_values_by_key() {
        let map = Map::new(vec!["bulbasaur", "ivysaur"], |name| name.len()).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&9), Some(&"bulbasaur"));
        assert_eq!(map.get(&7), Some(&"ivysaur"));
        assert_eq!(map.get(&3), None);
        assert_eq!(map.values(), ["bulbasaur", "ivysaur"]);
    }

    #[test]
    fn rejects_duplicate_keys() {
        assert_matches!(
            Map::new(vec!["eevee", "onix", "ekans"], |name| name.len()),
            Err(5)
        );
    }
}
