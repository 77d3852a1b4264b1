use crate::Mapping;

/// 各エントリの値を `updater` の結果で置き換えたマップを返す
///
/// `updater` が `None` を返したキーは結果から除かれる。
/// 残ったキーの順序は入力の反復順に従う。
pub fn map<M, R, F>(object: &M, mut updater: F) -> M::Rebind<R>
where
    M: Mapping,
    R: Clone,
    F: FnMut(&M::Value, &M::Key) -> Option<R>,
{
    let mut result = object.empty_rebind::<R>();
    for (key, value) in object.iter() {
        if let Some(mapped) = updater(value, key) {
            result.insert(key.clone(), mapped);
        }
    }
    result
}

/// `predicate` が `true` を返したエントリだけを残したマップを返す
pub fn filter<M, F>(object: &M, mut predicate: F) -> M
where
    M: Mapping,
    F: FnMut(&M::Value, &M::Key) -> bool,
{
    let mut result = object.empty();
    for (key, value) in object.iter() {
        if predicate(value, key) {
            result.insert(key.clone(), value.clone());
        }
    }
    result
}

/// 反復順に `reducer` を適用して1つの値に畳み込む
/// 空のマップでは `initial` をそのまま返す
pub fn reduce<M, A, F>(object: &M, mut reducer: F, initial: A) -> A
where
    M: Mapping,
    F: FnMut(A, &M::Value, &M::Key) -> A,
{
    object
        .iter()
        .fold(initial, |accumulator, (key, value)| reducer(accumulator, value, key))
}
