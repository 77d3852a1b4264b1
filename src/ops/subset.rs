use crate::Mapping;

/// `keys` に含まれるキーを全て除いた複製を返す
/// 存在しないキーは無視される
pub fn omit<M: Mapping>(object: &M, keys: &[M::Key]) -> M {
    let mut result = object.clone();
    for key in keys {
        result.remove(key);
    }
    result
}

/// `keys` に含まれ、かつ `object` に存在するキーだけを残した複製を返す
///
/// 結果の順序は `keys` の順ではなく、`object` の反復順に従う。
pub fn pick<M: Mapping>(object: &M, keys: &[M::Key]) -> M {
    let mut result = object.empty();
    for (key, value) in object.iter() {
        if keys.contains(key) {
            result.insert(key.clone(), value.clone());
        }
    }
    result
}
