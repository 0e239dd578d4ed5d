//! Serde helper functions for the configurator wire format.
//!
//! The API is loose about `null`: collections and maps may arrive as `null`,
//! and partial responses omit keys entirely. These helpers let the models
//! tell "absent" apart from "present but null".

use serde::{Deserialize, Deserializer, Serializer};

/// Deserialize a value, treating `null` as the type's default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Deserialize a value, treating `null` as `fallback()`.
///
/// For fields whose container default is not the type's zero value.
pub fn null_or_else<'de, D, T, F>(deserializer: D, fallback: F) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
    F: FnOnce() -> T,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_else(fallback))
}

/// Deserialize a key that may be present with a `null` value.
///
/// Use together with `#[serde(default)]`: an absent key stays `None`, a
/// `null` becomes `Some(None)` and a value becomes `Some(Some(value))`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserialize a key that may be present, folding `null` into the default.
///
/// Use together with `#[serde(default)]`: an absent key stays `None`, a
/// `null` becomes `Some(T::default())`.
pub fn present_or_default<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    null_as_default(deserializer).map(Some)
}

/// Serialize a quantity, writing whole numbers as JSON integers.
///
/// `1.0` goes out as `1` and `2.5` as `2.5`. Values outside the range where
/// every integer is exact stay floats.
pub fn whole_as_integer<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    const EXACT: f64 = 9_007_199_254_740_992.0;

    if value.fract() == 0.0 && value.abs() <= EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Declares an enum that travels as an integer code.
///
/// Codes the client does not know decode into `Unknown(code)` and encode
/// back unchanged, so new server-side values never break a response.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(from = "i32", into = "i32")]
        pub enum $name {
            $( $(#[$variant_meta])* $variant, )+
            /// A code this client does not recognise.
            Unknown(i32),
        }

        impl From<i32> for $name {
            fn from(code: i32) -> Self {
                match code {
                    $( $code => Self::$variant, )+
                    other => Self::Unknown(other),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                match value {
                    $( $name::$variant => $code, )+
                    $name::Unknown(code) => code,
                }
            }
        }
    };
}

pub(crate) use wire_enum;
