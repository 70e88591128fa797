/// Declare a closed set of element blocks.
///
/// Each entry `Variant(Value => Store) = TAG` registers `Value` under
/// `TAG`, backed by `Store`. The macro generates the enum (deriving
/// `Clone`, `Debug` and `PartialEq`), its [`BlockFuncs`](crate::BlockFuncs)
/// impl and one [`Element`](crate::Element) impl per value type.
///
/// Tags are checked at compile time: registering
/// [`ElementType::EMPTY`](crate::ElementType::EMPTY) or the same tag twice
/// fails the build.
///
/// ```
/// use tessera_block::{element_blocks, BlockFuncs, DelayedDeleteVec, Element, ElementType};
///
/// #[derive(Clone, Debug, Default, PartialEq)]
/// pub struct Label(String);
///
/// element_blocks! {
///     /// Blocks of a spreadsheet column.
///     pub enum ColumnBlocks {
///         Number(f64 => Vec<f64>) = ElementType::FLOAT64,
///         Text(Label => DelayedDeleteVec<Label>) = ElementType::user(0),
///     }
/// }
///
/// let mut block = <f64 as Element<ColumnBlocks>>::block_from_values(vec![1.0, 2.0]);
/// assert_eq!(block.element_type(), ElementType::FLOAT64);
///
/// let labels = <Label as Element<ColumnBlocks>>::block_from_values(vec![Label("a".into())]);
/// assert!(block.try_append(labels).is_err());
/// assert_eq!(ColumnBlocks::ELEMENT_TYPES, &[ElementType::FLOAT64, ElementType::user(0)]);
/// ```
///
/// ```compile_fail
/// use tessera_block::{element_blocks, ElementType};
///
/// element_blocks! {
///     pub enum Clash {
///         A(i32 => Vec<i32>) = ElementType::user(1),
///         B(i64 => Vec<i64>) = ElementType::user(1),
///     }
/// }
/// ```
#[macro_export]
macro_rules! element_blocks {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($elem:ty => $store:ty) = $tag:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant($store),
            )+
        }

        const _: () = {
            let tags: &[$crate::ElementType] = &[$($tag),+];
            let mut i = 0;
            while i < tags.len() {
                assert!(
                    tags[i].0 != $crate::ElementType::EMPTY.0,
                    "the EMPTY tag cannot be registered"
                );
                let mut j = i + 1;
                while j < tags.len() {
                    assert!(tags[i].0 != tags[j].0, "element type tag registered twice");
                    j += 1;
                }
                i += 1;
            }
        };

        impl $crate::BlockFuncs for $name {
            const ELEMENT_TYPES: &'static [$crate::ElementType] = &[$($tag),+];

            fn element_type(&self) -> $crate::ElementType {
                match self {
                    $( Self::$variant(_) => $tag, )+
                }
            }

            fn len(&self) -> usize {
                match self {
                    $( Self::$variant(s) => $crate::ElementStore::len(s), )+
                }
            }

            fn create(element_type: $crate::ElementType, len: usize) -> ::core::option::Option<Self> {
                $(
                    if element_type == $tag {
                        return ::core::option::Option::Some(Self::$variant(
                            <$store as $crate::ElementStore>::with_len(len),
                        ));
                    }
                )+
                ::core::option::Option::None
            }

            fn split_off(&mut self, at: usize) -> Self {
                match self {
                    $( Self::$variant(s) => Self::$variant($crate::ElementStore::split_off(s, at)), )+
                }
            }

            #[allow(unreachable_patterns)]
            fn try_append(&mut self, other: Self) -> ::core::result::Result<(), Self> {
                match (self, other) {
                    $(
                        (Self::$variant(s), Self::$variant(mut o)) => {
                            $crate::ElementStore::append(s, &mut o);
                            ::core::result::Result::Ok(())
                        }
                    )+
                    (_, other) => ::core::result::Result::Err(other),
                }
            }

            #[allow(unreachable_patterns)]
            fn try_insert(&mut self, at: usize, other: Self) -> ::core::result::Result<(), Self> {
                match (self, other) {
                    $(
                        (Self::$variant(s), Self::$variant(o)) => {
                            $crate::ElementStore::insert_values(s, at, $crate::ElementStore::into_values(o));
                            ::core::result::Result::Ok(())
                        }
                    )+
                    (_, other) => ::core::result::Result::Err(other),
                }
            }

            #[allow(unreachable_patterns)]
            fn try_overwrite(&mut self, at: usize, other: Self) -> ::core::result::Result<(), Self> {
                match (self, other) {
                    $(
                        (Self::$variant(s), Self::$variant(o)) => {
                            $crate::ElementStore::overwrite(s, at, $crate::ElementStore::into_values(o));
                            ::core::result::Result::Ok(())
                        }
                    )+
                    (_, other) => ::core::result::Result::Err(other),
                }
            }

            fn erase(&mut self, range: ::core::ops::Range<usize>) {
                match self {
                    $( Self::$variant(s) => $crate::ElementStore::erase(s, range), )+
                }
            }

            fn resize(&mut self, len: usize) {
                match self {
                    $( Self::$variant(s) => $crate::ElementStore::resize(s, len), )+
                }
            }

            fn shrink_to_fit(&mut self) {
                match self {
                    $( Self::$variant(s) => $crate::ElementStore::shrink_to_fit(s), )+
                }
            }

            #[allow(unreachable_patterns)]
            fn values_eq(&self, range: ::core::ops::Range<usize>, other: &Self, other_start: usize) -> bool {
                let n = range.end.saturating_sub(range.start);
                match (self, other) {
                    $(
                        (Self::$variant(a), Self::$variant(b)) => {
                            $crate::ElementStore::iter(a)
                                .skip(range.start)
                                .take(n)
                                .eq($crate::ElementStore::iter(b).skip(other_start).take(n))
                        }
                    )+
                    _ => false,
                }
            }
        }

        $(
            impl $crate::Element<$name> for $elem {
                const ELEMENT_TYPE: $crate::ElementType = $tag;
                type Store = $store;

                fn wrap(store: $store) -> $name {
                    $name::$variant(store)
                }

                #[allow(unreachable_patterns)]
                fn store(block: &$name) -> ::core::option::Option<&$store> {
                    match block {
                        $name::$variant(s) => ::core::option::Option::Some(s),
                        _ => ::core::option::Option::None,
                    }
                }

                #[allow(unreachable_patterns)]
                fn store_mut(block: &mut $name) -> ::core::option::Option<&mut $store> {
                    match block {
                        $name::$variant(s) => ::core::option::Option::Some(s),
                        _ => ::core::option::Option::None,
                    }
                }

                #[allow(unreachable_patterns)]
                fn unwrap(block: $name) -> ::core::result::Result<$store, $name> {
                    match block {
                        $name::$variant(s) => ::core::result::Result::Ok(s),
                        other => ::core::result::Result::Err(other),
                    }
                }
            }
        )+
    };
}
