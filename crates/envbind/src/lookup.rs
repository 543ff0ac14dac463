//! Environment lookup abstraction.
//!
//! Binding only ever asks one question of its source: "is `KEY` set, and to
//! what?". The [`Lookup`] trait captures that so the traversal can run
//! against the real process environment or against an in-memory map.
//!
//! # Built-in Lookups
//!
//! - [`Environment`] - Reads the process environment
//! - `HashMap<String, String>` / `BTreeMap<String, String>` - Fixed values
//!
//! # Custom Lookups
//!
//! ```rust,ignore
//! use envbind::Lookup;
//!
//! struct Layered { overrides: HashMap<String, String> }
//!
//! impl Lookup for Layered {
//!     fn get(&self, key: &str) -> Option<String> {
//!         self.overrides.get(key).cloned().or_else(|| Environment.get(key))
//!     }
//! }
//! ```

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A read-only source of environment values.
pub trait Lookup {
    /// Returns the value stored under `key`, or `None` if it is not set.
    fn get(&self, key: &str) -> Option<String>;
}

/// Lookup that reads the process environment.
///
/// Values that are not valid Unicode are converted lossily, replacing
/// invalid sequences with `U+FFFD`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Environment;

impl Lookup for Environment {
    fn get(&self, key: &str) -> Option<String> {
        // `var_os` may panic on empty keys and keys containing '=' or NUL.
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }

        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl<S: BuildHasher> Lookup for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl Lookup for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<L: Lookup + ?Sized> Lookup for &L {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Lookup that answers every query with `None` and remembers the keys asked.
///
/// Binding against it visits every leaf without changing anything, which is
/// how [`Binder::keys`](crate::Binder::keys) enumerates keys.
#[derive(Debug, Default)]
pub(crate) struct KeyRecorder {
    keys: RefCell<Vec<String>>,
}

impl KeyRecorder {
    pub(crate) fn into_keys(self) -> Vec<String> {
        self.keys.into_inner()
    }
}

impl Lookup for KeyRecorder {
    fn get(&self, key: &str) -> Option<String> {
        let mut keys = self.keys.borrow_mut();
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
        None
    }
}
