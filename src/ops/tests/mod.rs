use indexmap::IndexMap;

#[cfg(any(test))]
use proptest::prelude::Strategy;

pub mod set;
pub mod update;

///a:1, b:2, c:3 のマップを生成する
#[cfg(any(test))]
pub fn abc() -> IndexMap<&'static str, i32> {
    entries(&[("a", 1), ("b", 2), ("c", 3)])
}

///順序付きで期待値のマップを組み立てるためのヘルパー関数
#[cfg(any(test))]
pub fn entries(pairs: &[(&'static str, i32)]) -> IndexMap<&'static str, i32> {
    pairs.iter().copied().collect()
}

///マップの内容を反復順のまま取り出す
/// IndexMap同士の比較は順序を無視するため、順序の検証にはこれを使う
#[cfg(any(test))]
pub fn ordered<K: Clone, V: Clone>(map: &IndexMap<K, V>) -> Vec<(K, V)> {
    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

crate::record! {
    #[derive(Eq)]
    pub struct Quota<V>: QuotaKey {
        Cpu => cpu,
        Memory => memory,
        Disk => disk,
    }
}

///テストのために、ランダムなマップを生成する関数
/// キーの衝突を起こしやすくするため、キーの範囲を狭くしている
#[cfg(any(test))]
pub fn arb_small_map(max_len: usize) -> impl Strategy<Value = IndexMap<u8, i32>> {
    proptest::collection::vec((0u8..32, -100i32..100), 0..=max_len)
        .prop_map(|pairs| pairs.into_iter().collect::<IndexMap<u8, i32>>())
}

///テストのために、ランダムな部分レコードを生成する関数
#[cfg(any(test))]
pub fn arb_quota() -> impl Strategy<Value = Quota<i32>> {
    use proptest::option;
    (option::of(0i32..64), option::of(0i32..64), option::of(0i32..64)).prop_map(
        |(cpu, memory, disk)| Quota { cpu, memory, disk },
    )
}
