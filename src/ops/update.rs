use log::trace;

use crate::Mapping;

/// `key` の値を `updater` の結果で置き換えた複製を返す
///
/// `updater` には現在の値が渡され、キーが存在しなければ `None` が渡される。
/// `updater` が `None` を返した場合、そのキーは削除される。
pub fn update<M, F>(object: &M, key: M::Key, updater: F) -> M
where
    M: Mapping,
    F: FnOnce(Option<&M::Value>) -> Option<M::Value>,
{
    let mut result = object.clone();
    match updater(object.get(&key)) {
        Some(value) => result.insert(key, value),
        None => {
            result.remove(&key);
        }
    }
    result
}

/// 既に存在する `key` の値だけを `updater` の結果で置き換えた複製を返す
///
/// キーが存在しない場合、`updater` は呼ばれず、入力と等しい値を返す。
/// [`update`] と違い、挿入も削除も行わない。
pub fn change<M, F>(object: &M, key: M::Key, updater: F) -> M
where
    M: Mapping,
    F: FnOnce(&M::Value) -> M::Value,
{
    let Some(current) = object.get(&key) else {
        trace!("change: key is absent, updater skipped");
        return object.clone();
    };

    let value = updater(current);
    let mut result = object.clone();
    result.insert(key, value);
    result
}
