//! The [`Bind`] trait and its implementations for every supported node shape.
//!
//! Binding is a depth-first walk over a value:
//!
//! | Node | Behaviour |
//! |------|-----------|
//! | struct (`#[derive(Bind)]`) | each `pub` field is bound under `derive_key(field, key)` |
//! | `[T; N]`, `[T]`, `Vec<T>`, `VecDeque<T>` | every element is bound under the same key |
//! | `String` | set to the raw value |
//! | `i8` .. `i128`, `isize` | parsed as a base-10 signed integer |
//! | `bool` | parsed with [`parse_bool`] |
//! | floats, unsigned ints, `char`, maps, `Box`, `Option`, channels | [`Error::UnsupportedType`] if set |
//!
//! A leaf whose key is not set keeps its current value.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::mpsc::{Receiver, Sender, SyncSender};

use crate::error::{Error, Kind, ParseBoolError};
use crate::lookup::Lookup;

/// A value that can be populated in place from environment variables.
///
/// `key` is the environment key accumulated for this node. Leaves look it up
/// directly; structs extend it per field with [`derive_key`](crate::derive_key);
/// sequences hand it unchanged to every element.
///
/// Derive it for configuration structs:
///
/// ```rust,ignore
/// use envbind::Bind;
///
/// #[derive(Bind, Default)]
/// pub struct Config {
///     pub port: i32,              // APP_PORT
///     pub database: Database,     // APP_DATABASE_*
///     cache: String,              // private, never touched
/// }
/// ```
pub trait Bind {
    /// Populates `self` from `lookup`, using `key` as the environment key of
    /// this node.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error`] raised by a leaf. Leaves bound before the
    /// failure keep their new values; leaves after it are left untouched.
    fn bind(&mut self, key: &str, lookup: &dyn Lookup) -> Result<(), Error>;
}

/// Parses the boolean forms accepted for `bool` fields.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and `0`, `f`, `F`, `FALSE`,
/// `false`, `False`.
///
/// # Errors
///
/// Returns a [`ParseBoolError`] for any other input.
pub fn parse_bool(value: &str) -> Result<bool, ParseBoolError> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseBoolError::new(value)),
    }
}

/// Looks up the value of a leaf.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn leaf_value(key: &str, lookup: &dyn Lookup, kind: Kind) -> Option<String> {
    let value = lookup.get(key);

    #[cfg(feature = "tracing")]
    match value {
        Some(_) => tracing::debug!(key, %kind, "binding field from environment"),
        None => tracing::trace!(key, %kind, "environment key not set, keeping current value"),
    }

    value
}

fn coercion_failed(
    key: &str,
    kind: Kind,
    source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> Error {
    #[cfg(feature = "tracing")]
    tracing::warn!(key, %kind, "environment value could not be parsed");

    Error::coercion(key, kind, source)
}

/// Fails if `key` is set; leaves of unsupported kinds are fine while unset.
fn reject_if_set(key: &str, lookup: &dyn Lookup, kind: Kind) -> Result<(), Error> {
    if leaf_value(key, lookup, kind).is_none() {
        return Ok(());
    }

    #[cfg(feature = "tracing")]
    tracing::warn!(key, %kind, "environment key set for unsupported field type");

    Err(Error::unsupported(key, kind))
}

// ============================================================================
// Supported leaves
// ============================================================================

impl Bind for String {
    fn bind(&mut self, key: &str, lookup: &dyn Lookup) -> Result<(), Error> {
        if let Some(value) = leaf_value(key, lookup, Kind::String) {
            *self = value;
        }
        Ok(())
    }
}

impl Bind for bool {
    fn bind(&mut self, key: &str, lookup: &dyn Lookup) -> Result<(), Error> {
        if let Some(value) = leaf_value(key, lookup, Kind::Bool) {
            *self = parse_bool(&value).map_err(|e| coercion_failed(key, Kind::Bool, e))?;
        }
        Ok(())
    }
}

macro_rules! impl_bind_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Bind for $ty {
                fn bind(&mut self, key: &str, lookup: &dyn Lookup) -> Result<(), Error> {
                    if let Some(value) = leaf_value(key, lookup, Kind::Int) {
                        *self = value
                            .parse::<$ty>()
                            .map_err(|e| coercion_failed(key, Kind::Int, e))?;
                    }
                    Ok(())
                }
            }
        )*
    };
}

impl_bind_int!(i8, i16, i32, i64, i128, isize);

// ============================================================================
// Sequences
// ============================================================================

impl<T: Bind> Bind for [T] {
    fn bind(&mut self, key: &str, lookup: &dyn Lookup) -> Result<(), Error> {
        for item in self.iter_mut() {
            item.bind(key, lookup)?;
        }
        Ok(())
    }
}

impl<T: Bind, const N: usize> Bind for [T; N] {
    fn bind(&mut self, key: &str, lookup: &dyn Lookup) -> Result<(), Error> {
        self.as_mut_slice().bind(key, lookup)
    }
}

impl<T: Bind> Bind for Vec<T> {
    fn bind(&mut self, key: &str, lookup: &dyn Lookup) -> Result<(), Error> {
        self.as_mut_slice().bind(key, lookup)
    }
}

impl<T: Bind> Bind for VecDeque<T> {
    fn bind(&mut self, key: &str, lookup: &dyn Lookup) -> Result<(), Error> {
        for item in self.iter_mut() {
            item.bind(key, lookup)?;
        }
        Ok(())
    }
}

// ============================================================================
// Unsupported leaves
// ============================================================================

macro_rules! impl_bind_unsupported {
    ($kind:expr => $($ty:ty),* $(,)?) => {
        $(
            impl Bind for $ty {
                fn bind(&mut self, key: &str, lookup: &dyn Lookup) -> Result<(), Error> {
                    reject_if_set(key, lookup, $kind)
                }
            }
        )*
    };
}

impl_bind_unsupported!(Kind::Float => f32, f64);
impl_bind_unsupported!(Kind::Uint => u8, u16, u32, u64, u128, usize);
impl_bind_unsupported!(Kind::Char => char);

impl<K, V, S> Bind for HashMap<K, V, S> {
    fn bind(&mut self, key: &str, lookup: &dyn Lookup) -> Result<(), Error> {
        reject_if_set(key, lookup, Kind::Map)
    }
}

impl<K, V> Bind for BTreeMap<K, V> {
    fn bind(&mut self, key: &str, lookup: &dyn Lookup) -> Result<(), Error> {
        reject_if_set(key, lookup, Kind::Map)
    }
}

impl<T: ?Sized> Bind for Box<T> {
    fn bind(&mut self, key: &str, lookup: &dyn Lookup) -> Result<(), Error> {
        reject_if_set(key, lookup, Kind::Ptr)
    }
}

impl<T> Bind for Option<T> {
    fn bind(&mut self, key: &str, lookup: &dyn Lookup) -> Result<(), Error> {
        reject_if_set(key, lookup, Kind::Option)
    }
}

impl<T> Bind for Sender<T> {
    fn bind(&mut self, key: &str, lookup: &dyn Lookup) -> Result<(), Error> {
        reject_if_set(key, lookup, Kind::Chan)
    }
}

impl<T> Bind for SyncSender<T> {
    fn bind(&mut self, key: &str, lookup: &dyn Lookup) -> Result<(), Error> {
        reject_if_set(key, lookup, Kind::Chan)
    }
}

impl<T> Bind for Receiver<T> {
    fn bind(&mut self, key: &str, lookup: &dyn Lookup) -> Result<(), Error> {
        reject_if_set(key, lookup, Kind::Chan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_string_set_and_unset() {
        let mut value = "default".to_string();
        value.bind("FOO", &env(&[])).unwrap();
        assert_eq!(value, "default");

        value.bind("FOO", &env(&[("FOO", "bar")])).unwrap();
        assert_eq!(value, "bar");
    }

    #[test]
    fn test_empty_string_is_assigned() {
        let mut value = "default".to_string();
        value.bind("FOO", &env(&[("FOO", "")])).unwrap();
        assert_eq!(value, "");
    }

    #[test]
    fn test_int_widths() {
        let lookup = env(&[("N", "-42")]);

        let mut a = 0i8;
        let mut b = 0i16;
        let mut c = 0i32;
        let mut d = 0i64;
        let mut e = 0i128;
        let mut f = 0isize;
        a.bind("N", &lookup).unwrap();
        b.bind("N", &lookup).unwrap();
        c.bind("N", &lookup).unwrap();
        d.bind("N", &lookup).unwrap();
        e.bind("N", &lookup).unwrap();
        f.bind("N", &lookup).unwrap();

        assert_eq!((a, b, c, d, e, f), (-42, -42, -42, -42, -42, -42));
    }

    #[test]
    fn test_int_leading_plus() {
        let mut value = 0i32;
        value.bind("N", &env(&[("N", "+7")])).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_int_invalid() {
        let mut value = 5i32;
        let err = value.bind("FOO", &env(&[("FOO", "abc123")])).unwrap_err();

        assert!(matches!(err, Error::Coercion { kind: Kind::Int, .. }));
        assert!(
            err.to_string()
                .contains("failed to parse environment key: FOO to int")
        );
        assert_eq!(value, 5);
    }

    #[test]
    fn test_int_out_of_range_for_width() {
        let mut value = 0i8;
        let err = value.bind("SMALL", &env(&[("SMALL", "300")])).unwrap_err();
        assert_eq!(err.kind(), Kind::Int);
        assert_eq!(err.key(), "SMALL");
    }

    #[test]
    fn test_bool_forms() {
        for (raw, want) in [
            ("1", true),
            ("t", true),
            ("T", true),
            ("TRUE", true),
            ("true", true),
            ("True", true),
            ("0", false),
            ("f", false),
            ("F", false),
            ("FALSE", false),
            ("false", false),
            ("False", false),
        ] {
            let mut value = !want;
            value.bind("B", &env(&[("B", raw)])).unwrap();
            assert_eq!(value, want, "input {raw:?}");
        }
    }

    #[test]
    fn test_bool_invalid() {
        let mut value = false;
        let err = value.bind("FOO", &env(&[("FOO", "trueish")])).unwrap_err();

        assert!(matches!(err, Error::Coercion { kind: Kind::Bool, .. }));
        assert!(err.to_string().contains("FOO to bool"));
    }

    #[test]
    fn test_parse_bool_rejects_mixed_case() {
        assert!(parse_bool("tRuE").is_err());
        assert!(parse_bool("yes").is_err());
        assert!(parse_bool("").is_err());
    }

    #[test]
    fn test_vec_shares_key() {
        let mut values = vec![1i64, 2, 3];
        values.bind("N", &env(&[("N", "9")])).unwrap();
        assert_eq!(values, vec![9, 9, 9]);
    }

    #[test]
    fn test_empty_vec_makes_no_lookups() {
        let mut values: Vec<f64> = Vec::new();
        // An unsupported element kind would fail if any element were visited.
        values.bind("N", &env(&[("N", "1.5")])).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_array_and_deque() {
        let lookup = env(&[("FLAG", "true")]);

        let mut array = [false; 3];
        array.bind("FLAG", &lookup).unwrap();
        assert_eq!(array, [true; 3]);

        let mut deque = VecDeque::from(vec![false, false]);
        deque.bind("FLAG", &lookup).unwrap();
        assert!(deque.iter().all(|b| *b));
    }

    #[test]
    fn test_sequence_stops_at_first_error() {
        let mut values = vec![1i8, 2];
        let err = values.bind("N", &env(&[("N", "x")])).unwrap_err();
        assert_eq!(err.key(), "N");
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn test_unsupported_only_when_set() {
        let mut ratio = 0.5f64;
        ratio.bind("RATIO", &env(&[])).unwrap();
        assert!((ratio - 0.5).abs() < f64::EPSILON);

        let err = ratio.bind("RATIO", &env(&[("RATIO", "0.7")])).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedType {
                kind: Kind::Float,
                ..
            }
        ));
    }

    #[test]
    fn test_unsupported_kinds() {
        let lookup = env(&[("K", "v")]);

        assert_eq!(0u16.bind("K", &lookup).unwrap_err().kind(), Kind::Uint);
        assert_eq!('c'.bind("K", &lookup).unwrap_err().kind(), Kind::Char);
        assert_eq!(
            HashMap::<String, String>::new()
                .bind("K", &lookup)
                .unwrap_err()
                .kind(),
            Kind::Map
        );
        assert_eq!(
            Box::new(1i32).bind("K", &lookup).unwrap_err().kind(),
            Kind::Ptr
        );
        assert_eq!(
            Some("x".to_string()).bind("K", &lookup).unwrap_err().kind(),
            Kind::Option
        );

        let (mut tx, mut rx) = std::sync::mpsc::channel::<String>();
        assert_eq!(tx.bind("K", &lookup).unwrap_err().kind(), Kind::Chan);
        assert_eq!(rx.bind("K", &lookup).unwrap_err().kind(), Kind::Chan);
    }
}
