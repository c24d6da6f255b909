//! Declarative macros that stamp out the DynamoDB data shapes.
//!
//! Every DynamoDB shape has the same anatomy: optional fields in `PascalCase`
//! on the wire, a borrowing getter and a chaining `with_*` setter per field,
//! a `Debug` rendering that leaves out unset fields, and (for map-valued
//! fields) `add_*_entry` / `clear_*_entries` helpers. Writing that by hand for
//! ~100 shapes is noise, so the shapes are declared through [`shape!`],
//! [`map_entries!`] and [`wire_enum!`].

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::hash::{Hash, Hasher};

use crate::error::ModelError;

/// Declare a DynamoDB shape.
///
/// Each field is written as `pub name: Type => with_name`. The macro wraps
/// the type in `Option`, omits `None` on serialize, and generates:
///
/// - `fn name(&self) -> Option<&Type>`
/// - `fn with_name(self, value: impl Into<Type>) -> Self`
/// - a `Debug` impl that only prints fields that are set
///
/// Extra struct-level derives (typically `Eq, Hash`) and per-field serde
/// attributes are passed through unchanged. Shapes holding floats start with
/// `@manual_eq` and implement `PartialEq`, `Eq` and `Hash` themselves through
/// [`eq_f64`] and [`hash_f64`].
macro_rules! shape {
    (@manual_eq $($body:tt)+) => {
        $crate::shape::shape!(@emit [Clone, Default] $($body)+);
    };
    (
        @emit [$($derive:ident),*]
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident: $ty:ty => $with:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive($($derive,)* ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            $(
                #[doc = concat!("Returns `", stringify!($field), "`, or `None` when unset.")]
                #[must_use]
                pub fn $field(&self) -> Option<&$ty> {
                    self.$field.as_ref()
                }

                #[doc = concat!("Sets `", stringify!($field), "` and returns the shape for chaining.")]
                #[must_use]
                pub fn $with(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                #[allow(unused_mut)]
                let mut out = f.debug_struct(stringify!($name));
                $(
                    if let Some(value) = &self.$field {
                        out.field(stringify!($field), value);
                    }
                )*
                out.finish()
            }
        }
    };
    ($($body:tt)+) => {
        $crate::shape::shape!(@emit [Clone, Default, PartialEq] $($body)+);
    };
}

/// Generate `add_<field>_entry` / `clear_<field>_entries` for map-valued
/// fields of a shape declared with [`shape!`].
///
/// The field must be an `Option<BTreeMap<String, V>>`. Adding a key that is
/// already present fails with [`ModelError::DuplicateKey`].
macro_rules! map_entries {
    (
        $name:ident {
            $( $field:ident: $value:ty => $add:ident, $clear:ident; )+
        }
    ) => {
        impl $name {
            $(
                #[doc = concat!("Adds one entry to `", stringify!($field), "`.")]
                ///
                /// # Errors
                ///
                /// Returns [`ModelError::DuplicateKey`](crate::error::ModelError::DuplicateKey)
                /// if the key is already present.
                pub fn $add(
                    mut self,
                    key: impl Into<String>,
                    value: impl Into<$value>,
                ) -> Result<Self, $crate::error::ModelError> {
                    $crate::shape::insert_entry(
                        &mut self.$field,
                        stringify!($field),
                        key.into(),
                        value.into(),
                    )?;
                    Ok(self)
                }

                #[doc = concat!("Removes every entry of `", stringify!($field), "`, leaving it unset.")]
                #[must_use]
                pub fn $clear(mut self) -> Self {
                    self.$field = None;
                    self
                }
            )+
        }
    };
}

/// Declare a string-valued DynamoDB enumeration.
///
/// Variants map to their exact wire spelling. Unrecognised values land in an
/// `Unknown(String)` variant so newer service responses still deserialize.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// A value not known to this model.
            ///
            /// Equality, ordering and hashing go by the wire string, so
            /// `Unknown` holding a known value equals the named variant.
            Unknown(String),
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                self.as_str().hash(state);
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                self.as_str().cmp(other.as_str())
            }
        }

        impl $name {
            /// Returns the DynamoDB wire-format string representation.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Unknown(s) => s.as_str(),
                }
            }

            /// Returns `true` unless this is the `Unknown` catch-all.
            #[must_use]
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $( $wire => Self::$variant, )+
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(s.as_str()))
            }
        }
    };
}

pub(crate) use map_entries;
pub(crate) use shape;
pub(crate) use wire_enum;

/// Insert `key` into an optional map, creating the map on first use.
pub(crate) fn insert_entry<V>(
    map: &mut Option<BTreeMap<String, V>>,
    field: &'static str,
    key: String,
    value: V,
) -> Result<(), ModelError> {
    match map.get_or_insert_with(BTreeMap::new).entry(key) {
        Entry::Occupied(existing) => Err(ModelError::DuplicateKey {
            field,
            key: existing.key().clone(),
        }),
        Entry::Vacant(slot) => {
            slot.insert(value);
            Ok(())
        }
    }
}

/// Bit pattern of `value` with `-0.0` folded into `0.0` and every NaN into
/// one canonical NaN.
fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Compare optional floats so that NaN equals NaN and `-0.0` equals `0.0`.
///
/// Keeps `Eq` reflexive for shapes holding floats. Note that JSON has no NaN:
/// `serde_json` writes it as `null`, which reads back as an unset field.
pub(crate) fn eq_f64(a: Option<f64>, b: Option<f64>) -> bool {
    a.map(canonical_bits) == b.map(canonical_bits)
}

/// Hash an optional float consistently with [`eq_f64`].
pub(crate) fn hash_f64<H: Hasher>(value: Option<f64>, state: &mut H) {
    value.map(canonical_bits).hash(state);
}

/// Canonical bit patterns of an optional float list, for comparing and
/// hashing it consistently with [`eq_f64`].
pub(crate) fn canonical_f64s(values: Option<&[f64]>) -> Option<Vec<u64>> {
    values.map(|v| v.iter().copied().map(canonical_bits).collect())
}
