use indexmap::IndexMap;
use rand::Rng;

/// ランダムなキーと値を持つ [`IndexMap`] を生成します。
/// キーは重複しないため、結果の長さは必ず `len` になります。
pub fn random_index_map(len: usize) -> IndexMap<u64, u64> {
    let mut rng = rand::rng();
    random_index_map_using(&mut rng, len)
}

/// 外部の乱数生成器を使用してランダムな [`IndexMap`] を生成します。
pub fn random_index_map_using<R: Rng>(rng: &mut R, len: usize) -> IndexMap<u64, u64> {
    let mut map = IndexMap::with_capacity(len);
    while map.len() < len {
        map.insert(rng.random::<u64>(), rng.random_range(0..1000));
    }
    map
}
