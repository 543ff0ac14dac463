//! Entry points that bind a value against a [`Lookup`].
//!
//! [`Binder`] carries the root prefix and the lookup to read from. The free
//! functions [`load_from_environment`] and [`must_load_from_environment`]
//! are shorthands for a `Binder` over the process environment.
//!
//! # Example
//!
//! ```rust,ignore
//! use envbind::{Bind, Binder};
//!
//! #[derive(Bind, Default)]
//! pub struct Config {
//!     pub port: i32,
//!     pub debug: bool,
//! }
//!
//! let mut config = Config { port: 8080, ..Config::default() };
//!
//! // Reads APP_PORT and APP_DEBUG
//! envbind::load_from_environment(&mut config, "APP")?;
//!
//! // Same traversal against fixed values
//! let values = HashMap::from([("APP_PORT".to_string(), "9000".to_string())]);
//! Binder::new().with_prefix("APP").with_lookup(values).load(&mut config)?;
//!
//! // Every key the traversal would read
//! assert_eq!(envbind::keys(&mut config, "APP"), ["APP_PORT", "APP_DEBUG"]);
//! ```

use crate::bind::Bind;
use crate::error::Error;
use crate::lookup::{Environment, KeyRecorder, Lookup};

/// Binds values against a [`Lookup`] under a root prefix.
#[derive(Clone, Debug, Default)]
pub struct Binder<L = Environment> {
    lookup: L,
    prefix: String,
}

impl Binder {
    /// Creates a binder over the process environment with an empty prefix.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lookup: Environment,
            prefix: String::new(),
        }
    }
}

impl<L: Lookup> Binder<L> {
    /// Replaces the lookup values are read from.
    #[must_use]
    pub fn with_lookup<M: Lookup>(self, lookup: M) -> Binder<M> {
        Binder {
            lookup,
            prefix: self.prefix,
        }
    }

    /// Sets the root prefix.
    ///
    /// A scalar target is looked up under the prefix exactly as given; field
    /// keys below a struct use its upper-cased form.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Returns the root prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the lookup values are read from.
    pub const fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Populates `target` in place.
    ///
    /// # Errors
    ///
    /// Returns the first coercion or unsupported-type error. Fields bound
    /// before it keep their new values.
    pub fn load<T: Bind + ?Sized>(&self, target: &mut T) -> Result<(), Error> {
        #[cfg(feature = "tracing")]
        tracing::debug!(prefix = %self.prefix, "binding configuration from environment");

        target.bind(&self.prefix, &self.lookup)
    }

    /// Populates `target` in place, panicking on failure.
    ///
    /// # Panics
    ///
    /// Panics with the error [`load`](Self::load) would have returned.
    #[track_caller]
    pub fn must_load<T: Bind + ?Sized>(&self, target: &mut T) {
        if let Err(err) = self.load(target) {
            panic!("{err}");
        }
    }

    /// Lists every environment key a bind of `target` reads, in traversal
    /// order and without duplicates.
    ///
    /// `target` is not modified. Sequences contribute their shared key only
    /// when they have at least one element.
    pub fn keys<T: Bind + ?Sized>(&self, target: &mut T) -> Vec<String> {
        let recorder = KeyRecorder::default();

        // A recorder never returns a value, so no leaf can fail.
        let _ = target.bind(&self.prefix, &recorder);

        recorder.into_keys()
    }
}

/// Populates `target` from the process environment.
///
/// Keys are derived from `prefix` and the field path, e.g. field
/// `database.port` under prefix `"app"` reads `APP_DATABASE_PORT`. With a
/// scalar target, `prefix` is the exact variable name.
///
/// # Errors
///
/// Returns an [`Error`] for the first variable that is set but cannot be
/// coerced into its field, or that is set for a field of unsupported kind.
pub fn load_from_environment<T: Bind + ?Sized>(target: &mut T, prefix: &str) -> Result<(), Error> {
    Binder::new().with_prefix(prefix).load(target)
}

/// Populates `target` from the process environment, panicking on failure.
///
/// Use this where a misconfigured environment should stop the process.
///
/// # Panics
///
/// Panics with the error [`load_from_environment`] would have returned.
#[track_caller]
pub fn must_load_from_environment<T: Bind + ?Sized>(target: &mut T, prefix: &str) {
    Binder::new().with_prefix(prefix).must_load(target);
}

/// Lists the environment keys a bind of `target` under `prefix` would read.
pub fn keys<T: Bind + ?Sized>(target: &mut T, prefix: &str) -> Vec<String> {
    Binder::new().with_prefix(prefix).keys(target)
}
