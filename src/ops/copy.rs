use crate::Mapping;

/// 自由に書き換えてよい浅い複製を返す
/// 値そのものは `Clone` で複製されるだけで、深い複製は行わない
pub fn clone<M: Mapping>(object: &M) -> M {
    object.clone()
}

/// 同じ種類の空のコンテナを返す
pub fn clear<M: Mapping>(object: &M) -> M {
    object.empty()
}
