use log::trace;

use crate::{Mapping, Patch};

/// `sources` を引数の順に `object` へ重ね合わせたマップを返す
///
/// 同じキーは後のソースが優先される。
/// [`Patch::Delete`] はそのキーを途中結果から削除するため、
/// 設定後に削除されたキーは結果に残らず、削除後に再設定されたキーは残る。
///
/// ソースには `(Key, Patch<Value>)` を返す任意の列を渡せる。
/// `Patch` を値に持つマップや、[`record!`](crate::record) で生成した部分レコードも使える。
pub fn assign<M, I, S>(object: &M, sources: I) -> M
where
    M: Mapping,
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = (M::Key, Patch<M::Value>)>,
{
    let mut result = object.clone();
    for source in sources {
        for (key, patch) in source {
            match patch {
                Patch::Set(value) => result.insert(key, value),
                Patch::Delete => {
                    if result.remove(&key).is_some() {
                        trace!("assign: entry removed by delete marker");
                    }
                }
            }
        }
    }
    result
}
