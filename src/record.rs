use crate::Error;

/// レコードのフィールドを指すキーが備えるトレイト
///
/// [`record!`](crate::record) が生成するキーの列挙型に実装される。
pub trait Field: Copy + Eq + 'static {
    /// 宣言順に並んだ全てのフィールド
    const ALL: &'static [Self];

    /// フィールドを持つレコードの型名
    const RECORD: &'static str;

    fn name(self) -> &'static str;

    /// フィールド名からキーを引く
    fn from_name(name: &str) -> Result<Self, Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.name() == name)
            .ok_or_else(|| Error::UnknownField {
                record: Self::RECORD.to_string(),
                field: name.to_string(),
            })
    }
}

/// フィールドの集合が固定されたレコード型と、そのキーの列挙型を生成する
///
/// 各フィールドは `Option<V>` として保持され、`None` はフィールドが存在しないことを表す。
/// 生成された型は [`Mapping`](crate::Mapping) を実装するため、全ての操作にそのまま渡せる。
/// 反復順はフィールドの宣言順になる。
///
/// ```
/// use remap::{Mapping, Patch, assign, omit, record};
///
/// record! {
///     #[derive(Eq)]
///     pub struct Limits<V>: LimitKey {
///         Cpu => cpu,
///         Memory => memory,
///         Disk => disk,
///     }
/// }
///
/// let limits = Limits { cpu: Some(2), memory: Some(512), disk: None };
///
/// let patch = Limits { cpu: Some(Patch::Delete), disk: Some(Patch::Set(20)), memory: None };
/// let next = assign(&limits, [patch]);
/// assert_eq!(next, Limits { cpu: None, memory: Some(512), disk: Some(20) });
///
/// let small = omit(&limits, &[LimitKey::Memory]);
/// assert_eq!(small.len(), 1);
/// assert_eq!("disk".parse::<LimitKey>(), Ok(LimitKey::Disk));
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident<$v:ident>: $key:ident {
            $($variant:ident => $field:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name<$v> {
            $(pub $field: ::core::option::Option<$v>,)+
        }

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $key {
            $($variant,)+
        }

        impl $crate::Field for $key {
            const ALL: &'static [Self] = &[$($key::$variant,)+];
            const RECORD: &'static str = ::core::stringify!($name);

            fn name(self) -> &'static str {
                match self {
                    $($key::$variant => ::core::stringify!($field),)+
                }
            }
        }

        impl ::core::fmt::Display for $key {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<Self as $crate::Field>::name(*self))
            }
        }

        impl ::core::str::FromStr for $key {
            type Err = $crate::Error;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as $crate::Field>::from_name(s)
            }
        }

        impl<$v> ::core::default::Default for $name<$v> {
            fn default() -> Self {
                Self {
                    $($field: ::core::option::Option::None,)+
                }
            }
        }

        impl<$v> $name<$v> {
            pub fn field(&self, key: $key) -> ::core::option::Option<&$v> {
                match key {
                    $($key::$variant => self.$field.as_ref(),)+
                }
            }

            pub fn field_mut(&mut self, key: $key) -> &mut ::core::option::Option<$v> {
                match key {
                    $($key::$variant => &mut self.$field,)+
                }
            }
        }

        impl<$v: ::core::clone::Clone> $crate::Mapping for $name<$v> {
            type Key = $key;
            type Value = $v;
            type Rebind<Rebound: ::core::clone::Clone> = $name<Rebound>;

            fn iter<'a>(
                &'a self,
            ) -> ::std::boxed::Box<dyn ::core::iter::Iterator<Item = (&'a $key, &'a $v)> + 'a> {
                ::std::boxed::Box::new(
                    <$key as $crate::Field>::ALL
                        .iter()
                        .filter_map(move |key| self.field(*key).map(|value| (key, value))),
                )
            }

            fn get(&self, key: &$key) -> ::core::option::Option<&$v> {
                self.field(*key)
            }

            fn insert(&mut self, key: $key, value: $v) {
                *self.field_mut(key) = ::core::option::Option::Some(value);
            }

            fn remove(&mut self, key: &$key) -> ::core::option::Option<$v> {
                self.field_mut(*key).take()
            }

            fn len(&self) -> usize {
                0 $(+ self.$field.is_some() as usize)+
            }

            fn empty(&self) -> Self {
                <Self as ::core::default::Default>::default()
            }

            fn empty_rebind<Rebound: ::core::clone::Clone>(&self) -> $name<Rebound> {
                <$name<Rebound> as ::core::default::Default>::default()
            }
        }

        impl<$v> ::core::iter::FromIterator<($key, $v)> for $name<$v> {
            fn from_iter<I: ::core::iter::IntoIterator<Item = ($key, $v)>>(iter: I) -> Self {
                let mut record = <Self as ::core::default::Default>::default();
                for (key, value) in iter {
                    *record.field_mut(key) = ::core::option::Option::Some(value);
                }
                record
            }
        }

        impl<$v> ::core::iter::IntoIterator for $name<$v> {
            type Item = ($key, $v);
            type IntoIter = ::std::vec::IntoIter<($key, $v)>;

            fn into_iter(self) -> Self::IntoIter {
                let mut entries = ::std::vec::Vec::new();
                $(
                    if let ::core::option::Option::Some(value) = self.$field {
                        entries.push(($key::$variant, value));
                    }
                )+
                entries.into_iter()
            }
        }
    };
}
