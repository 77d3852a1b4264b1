#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [`assign`](crate::assign) に渡す値
///
/// `Delete` はそのキーを削除する印であり、`Option::None` を含むどの値とも区別される。
/// そのため値の型自体が `Option<T>` であっても、`Set(None)` と `Delete` は別物として扱われる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Patch<V> {
    /// キーに値を設定する
    Set(V),
    /// キーを削除する
    Delete,
}

impl<V> Patch<V> {
    pub fn is_delete(&self) -> bool {
        matches!(self, Patch::Delete)
    }

    /// 設定する値を取り出す
    /// 削除の印であれば `None` を返す
    pub fn into_value(self) -> Option<V> {
        match self {
            Patch::Set(value) => Some(value),
            Patch::Delete => None,
        }
    }

    pub fn as_ref(&self) -> Patch<&V> {
        match self {
            Patch::Set(value) => Patch::Set(value),
            Patch::Delete => Patch::Delete,
        }
    }
}
