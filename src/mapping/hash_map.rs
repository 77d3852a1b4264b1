use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::Mapping;

/// 反復順はHashMap自身の順序に従う
impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    type Key = K;
    type Value = V;
    type Rebind<R: Clone> = HashMap<K, R, S>;

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a> {
        Box::new(HashMap::iter(self))
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) {
        HashMap::insert(self, key, value);
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn empty(&self) -> Self {
        HashMap::with_hasher(self.hasher().clone())
    }

    fn empty_rebind<R: Clone>(&self) -> HashMap<K, R, S> {
        HashMap::with_hasher(self.hasher().clone())
    }
}
