pub mod btree_map;
pub mod hash_map;
pub mod im_map;
pub mod index_map;

/// 不変な値として扱うマップ・レコードが備えるべき最小限の機能をまとめたトレイト
///
/// 各操作はこのトレイトの上に実装され、入力を複製してから複製側だけを編集する。
/// `insert`/`remove` は複製に対してのみ呼び出されるため、入力が書き換わることはない。
pub trait Mapping: Clone {
    type Key: Clone + Eq;
    type Value: Clone;

    /// 値の型だけを `R` に差し替えた、同じ形のコンテナ
    type Rebind<R: Clone>: Mapping<Key = Self::Key, Value = R>;

    /// 反復順で全てのエントリを返す
    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a Self::Key, &'a Self::Value)> + 'a>;

    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }

    fn insert(&mut self, key: Self::Key, value: Self::Value);

    /// 残りのエントリの反復順を保ったまま削除する
    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 同じ種類の空コンテナを返す
    /// ハッシャーなど、コンテナ自身の設定は引き継ぐ
    fn empty(&self) -> Self;

    /// 値の型を差し替えた空コンテナを返す
    fn empty_rebind<R: Clone>(&self) -> Self::Rebind<R>;
}
