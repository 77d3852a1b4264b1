use crate::Mapping;

/// `key` に `value` を設定した複製を返す
/// キーが既に存在する場合は値を置き換える
pub fn set<M: Mapping>(object: &M, key: M::Key, value: M::Value) -> M {
    let mut result = object.clone();
    result.insert(key, value);
    result
}
