use std::collections::BTreeMap;

use crate::Mapping;

impl<K, V> Mapping for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;
    type Rebind<R: Clone> = BTreeMap<K, R>;

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a> {
        Box::new(BTreeMap::iter(self))
    }

    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) {
        BTreeMap::insert(self, key, value);
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        BTreeMap::remove(self, key)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn empty(&self) -> Self {
        BTreeMap::new()
    }

    fn empty_rebind<R: Clone>(&self) -> BTreeMap<K, R> {
        BTreeMap::new()
    }
}
