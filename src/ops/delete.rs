use log::trace;

use crate::Mapping;

/// `key` のエントリを削除した複製を返す
/// キーが存在しなければ、入力と等しい値を返す
pub fn delete<M: Mapping>(object: &M, key: &M::Key) -> M {
    let mut result = object.clone();
    result.remove(key);
    result
}

/// 値が `value` と等しい最初のエントリ（反復順）を削除した複製を返す
///
/// 同じ値を持つエントリが複数あっても、削除されるのは先頭の1つだけ。
pub fn delete_value<M>(object: &M, value: &M::Value) -> M
where
    M: Mapping,
    M::Value: PartialEq,
{
    let found = object
        .iter()
        .find(|(_, v)| *v == value)
        .map(|(k, _)| k.clone());

    match found {
        Some(key) => delete(object, &key),
        None => {
            trace!("delete_value: no entry matched, returning an unchanged copy");
            object.clone()
        }
    }
}
