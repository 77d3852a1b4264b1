//! マップとレコードを不変な値として扱うための、コピーオンライト方式の操作群
//!
//! ```
//! use indexmap::IndexMap;
//! use remap::{filter, map, omit, pick, reduce};
//!
//! let entries = |pairs: &[(&'static str, i32)]| pairs.iter().copied().collect::<IndexMap<_, _>>();
//! let m = entries(&[("a", 1), ("b", 2), ("c", 3)]);
//!
//! assert_eq!(omit(&m, &["b"]), entries(&[("a", 1), ("c", 3)]));
//! assert_eq!(pick(&m, &["b", "z"]), entries(&[("b", 2)]));
//! assert_eq!(map(&m, |v, _| Some(v * 2)), entries(&[("a", 2), ("b", 4), ("c", 6)]));
//! assert_eq!(filter(&m, |v, _| *v > 1), entries(&[("b", 2), ("c", 3)]));
//! assert_eq!(reduce(&m, |acc, v, _| acc + v, 0), 6);
//! ```

/// 発生し得るすべてのエラーを`enum` 型として定義・集約。
mod error;

/// 操作の対象になるコンテナのTrait定義と実装
mod mapping;

/// 非破壊的な操作の本体
mod ops;

/// 削除の印を表す型
mod patch;

/// 固定フィールドのレコードを生成するマクロ
mod record;

/// ベンチマークや検証用のランダムなマップ生成
#[cfg(any(test, feature = "random"))]
pub mod random;

pub use error::Error;
pub use mapping::Mapping;
pub use ops::{
    assign, change, clear, clone, delete, delete_value, filter, map, omit, pick, reduce, set,
    update,
};
pub use patch::Patch;
pub use record::Field;
