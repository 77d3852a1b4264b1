//! 永続データ構造によるマップ
//!
//! 複製はO(1)で、編集した部分以外は元のマップと構造を共有する。

use std::collections::hash_map::RandomState;
use std::hash::Hash;

use crate::Mapping;

impl<K, V> Mapping for im::OrdMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;
    type Rebind<R: Clone> = im::OrdMap<K, R>;

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a> {
        Box::new(im::OrdMap::iter(self))
    }

    fn get(&self, key: &K) -> Option<&V> {
        im::OrdMap::get(self, key)
    }

    fn insert(&mut self, key: K, value: V) {
        im::OrdMap::insert(self, key, value);
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        im::OrdMap::remove(self, key)
    }

    fn len(&self) -> usize {
        im::OrdMap::len(self)
    }

    fn empty(&self) -> Self {
        im::OrdMap::new()
    }

    fn empty_rebind<R: Clone>(&self) -> im::OrdMap<K, R> {
        im::OrdMap::new()
    }
}

impl<K, V> Mapping for im::HashMap<K, V, RandomState>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;
    type Rebind<R: Clone> = im::HashMap<K, R, RandomState>;

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a> {
        Box::new(im::HashMap::iter(self))
    }

    fn get(&self, key: &K) -> Option<&V> {
        im::HashMap::get(self, key)
    }

    fn insert(&mut self, key: K, value: V) {
        im::HashMap::insert(self, key, value);
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        im::HashMap::remove(self, key)
    }

    fn len(&self) -> usize {
        im::HashMap::len(self)
    }

    fn empty(&self) -> Self {
        im::HashMap::new()
    }

    fn empty_rebind<R: Clone>(&self) -> im::HashMap<K, R, RandomState> {
        im::HashMap::new()
    }
}
