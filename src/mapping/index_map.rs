use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

use crate::Mapping;

/// 挿入順を保持する連想配列
/// 削除には `shift_remove` を使い、残りの順序を崩さない
impl<K, V, S> Mapping for IndexMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    type Key = K;
    type Value = V;
    type Rebind<R: Clone> = IndexMap<K, R, S>;

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a> {
        Box::new(IndexMap::iter(self))
    }

    fn get(&self, key: &K) -> Option<&V> {
        IndexMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        IndexMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) {
        IndexMap::insert(self, key, value);
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.shift_remove(key)
    }

    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    fn empty(&self) -> Self {
        IndexMap::with_hasher(self.hasher().clone())
    }

    fn empty_rebind<R: Clone>(&self) -> IndexMap<K, R, S> {
        IndexMap::with_hasher(self.hasher().clone())
    }
}
