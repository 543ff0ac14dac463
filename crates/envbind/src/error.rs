//! Error types for binding configuration from the environment.
//!
//! This module contains the [`Error`] enum and the [`Kind`] of node an error
//! refers to. Errors integrate with [`miette`] for rich diagnostics.
//!
//! # Error Variants
//!
//! | Variant | When It Occurs |
//! |---------|----------------|
//! | [`Error::Coercion`] | Variable is set but does not parse as the field's kind |
//! | [`Error::UnsupportedType`] | Variable is set for a field whose kind cannot be bound |
//!
//! A variable that is not set is never an error: the field keeps whatever
//! value it had before the bind.
//!
//! # First Error Wins
//!
//! Binding stops at the first failing leaf and returns that error unchanged.
//! Fields visited before the failure keep their new values.
//!
//! ```rust,ignore
//! match envbind::load_from_environment(&mut config, "APP") {
//!     Ok(()) => { /* use config */ }
//!     Err(err) => eprintln!("{:?}", miette::Report::new(err)),
//! }
//! ```

use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

use miette::Diagnostic;
use thiserror::Error as ThisError;

/// The kind of a node reached while binding.
///
/// Only [`Kind::String`], [`Kind::Int`] and [`Kind::Bool`] leaves can be
/// populated. The remaining variants name leaf kinds that are recognised but
/// rejected with [`Error::UnsupportedType`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Kind {
    /// `String`.
    String,
    /// Signed integers of any width.
    Int,
    /// `bool`.
    Bool,
    /// `f32` and `f64`.
    Float,
    /// Unsigned integers of any width.
    Uint,
    /// `char`.
    Char,
    /// `HashMap` and `BTreeMap`.
    Map,
    /// `Box<T>`.
    Ptr,
    /// `Option<T>`.
    Option,
    /// `std::sync::mpsc` senders and receivers.
    Chan,
}

impl Kind {
    /// Returns the lowercase name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Int => "int",
            Kind::Bool => "bool",
            Kind::Float => "float",
            Kind::Uint => "uint",
            Kind::Char => "char",
            Kind::Map => "map",
            Kind::Ptr => "ptr",
            Kind::Option => "option",
            Kind::Chan => "chan",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while binding a value from the environment.
///
/// Every variant carries the environment key of the offending leaf and the
/// [`Kind`] that was expected or encountered.
///
/// # Diagnostic Codes
///
/// | Code | Meaning |
/// |------|---------|
/// | `envbind::coercion` | Value could not be parsed as the field's kind |
/// | `envbind::unsupported_type` | Field kind cannot be populated from a string |
#[derive(Debug, ThisError, Diagnostic)]
pub enum Error {
    /// An environment variable was set but could not be parsed.
    #[error("failed to parse environment key: {key} to {kind}")]
    #[diagnostic(code(envbind::coercion))]
    Coercion {
        /// The environment key that was looked up.
        key: String,

        /// The kind the value had to be parsed as.
        kind: Kind,

        /// Help text naming the accepted forms.
        #[help]
        help: String,

        /// The underlying parse error.
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// An environment variable was set for a field of an unsupported kind.
    #[error("failed to parse key: {key}, unsupported field type: {kind}")]
    #[diagnostic(code(envbind::unsupported_type))]
    UnsupportedType {
        /// The environment key that was looked up.
        key: String,

        /// The kind of the field.
        kind: Kind,

        /// Help text listing the supported kinds.
        #[help]
        help: String,
    },
}

impl Error {
    /// Creates a Coercion error with help text for `kind`.
    pub fn coercion(
        key: impl Into<String>,
        kind: Kind,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        let key = key.into();
        let help = match kind {
            Kind::Int => format!("set {key} to a base-10 integer, e.g. 42 or -7"),
            Kind::Bool => format!("set {key} to one of: true, false, 1, 0, t, f"),
            other => format!("set {key} to a valid {other}"),
        };

        Error::Coercion {
            key,
            kind,
            help,
            source: source.into(),
        }
    }

    /// Creates an UnsupportedType error.
    pub fn unsupported(key: impl Into<String>, kind: Kind) -> Self {
        let key = key.into();
        let help = format!(
            "only string, int and bool fields can be set from the environment; unset {key} or change the field type"
        );

        Error::UnsupportedType { key, kind, help }
    }

    /// Returns the environment key of the failing leaf.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Error::Coercion { key, .. } | Error::UnsupportedType { key, .. } => key,
        }
    }

    /// Returns the kind the failing leaf was bound as.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Error::Coercion { kind, .. } | Error::UnsupportedType { kind, .. } => *kind,
        }
    }
}

/// Error returned when a string is not one of the accepted boolean forms.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("invalid boolean syntax: {value:?}")]
pub struct ParseBoolError {
    value: String,
}

impl ParseBoolError {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
