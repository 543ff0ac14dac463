//! # envbind
//!
//! Populate configuration structs in place from environment variables whose
//! names follow the structure of the value.
//!
//! Each field is read from an environment key derived from its path: the
//! caller's prefix, then every field name on the way down, upper-cased and
//! joined with `_`. Fields whose variable is not set keep the value they
//! already had, so defaults are whatever the caller put in the struct before
//! binding.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use envbind::Bind;
//!
//! #[derive(Bind, Default)]
//! pub struct Config {
//!     pub port: i32,            // APP_PORT
//!     pub debug: bool,          // APP_DEBUG
//!     pub database: Database,   // APP_DATABASE_*
//!     pub replicas: Vec<Replica>,
//! }
//!
//! #[derive(Bind, Default)]
//! pub struct Database {
//!     pub url: String,          // APP_DATABASE_URL
//!     pub max_conns: i32,       // APP_DATABASE_MAX_CONNS
//! }
//!
//! #[derive(Bind)]
//! pub struct Replica {
//!     pub host: String,         // APP_REPLICAS_HOST, shared by every element
//! }
//!
//! fn main() -> envbind::Result<()> {
//!     let mut config = Config::default();
//!     envbind::load_from_environment(&mut config, "app")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Node Shapes
//!
//! | Shape | Behaviour |
//! |-------|-----------|
//! | struct deriving [`Bind`] | every `pub` field is bound under its derived key |
//! | `Vec<T>`, `[T; N]`, `[T]`, `VecDeque<T>` | every element is bound under the same key |
//! | `String` | raw value |
//! | `i8` .. `i128`, `isize` | base-10 signed integer |
//! | `bool` | `true`/`false`/`1`/`0`/`t`/`f` and upper-case forms |
//! | anything else with an impl | [`Error::UnsupportedType`] when its key is set |
//!
//! Private fields are never touched. Use `#[bind(skip)]` to exclude a public
//! field and `#[bind(rename = "Name")]` to bind it under another name.
//!
//! ## Error Handling
//!
//! Binding stops at the first failure and returns an [`Error`] that integrates
//! with [`miette`]:
//!
//! ```rust,ignore
//! if let Err(e) = envbind::load_from_environment(&mut config, "app") {
//!     eprintln!("{:?}", miette::Report::new(e));
//! }
//! ```
//!
//! [`must_load_from_environment`] panics instead, for programs that cannot
//! continue with a broken environment.
//!
//! ## Feature Flags
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `tracing` | Emit [`tracing`] events for every leaf bound | **Yes** |

#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// Lets the derive macro refer to `::envbind` from inside this crate's tests.
extern crate self as envbind;

// Re-export the derive macro
pub use envbind_macro::Bind;

/// Re-export miette for error handling.
pub use miette;

mod bind;
mod binder;
mod error;
mod key;
mod lookup;

pub use bind::{Bind, parse_bool};
pub use binder::{Binder, keys, load_from_environment, must_load_from_environment};
pub use error::{Error, Kind, ParseBoolError};
pub use key::derive_key;
pub use lookup::{Environment, Lookup};

/// A Result type that displays errors with miette's fancy formatting.
///
/// ```rust,ignore
/// fn main() -> envbind::Result<()> {
///     envbind::load_from_environment(&mut config, "app")?;
///     Ok(())
/// }
/// ```
pub type Result<T> = miette::Result<T>;
