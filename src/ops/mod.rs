//! マップ・レコードに対する非破壊的な操作
//!
//! 全ての操作は入力を借用するだけで書き換えず、新しい値を返す。

mod assign;
mod copy;
mod delete;
mod set;
mod subset;
mod transform;
mod update;

#[cfg(test)]
mod tests;

pub use assign::assign;
pub use copy::{clear, clone};
pub use delete::{delete, delete_value};
pub use set::set;
pub use subset::{omit, pick};
pub use transform::{filter, map, reduce};
pub use update::{change, update};
