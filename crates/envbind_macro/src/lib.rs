//! # envbind_macro
//!
//! Procedural macro implementation for the `envbind` crate.
//!
//! This crate provides the `#[derive(Bind)]` procedural macro that generates
//! an `envbind::Bind` implementation walking a struct's public fields.
//!
//! **Note:** Users should depend on the `envbind` crate, not this one directly.
//! The `envbind` crate re-exports this macro along with the runtime types.
//!
//! # Module Structure
//!
//! - `parse` - Attribute parsing for `#[bind(...)]`
//! - `expand` - Field selection and code generation

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

// Internal modules - not exposed publicly
mod expand;
mod parse;

/// Derive macro for binding a struct from environment variables.
///
/// Every field declared `pub` (including `pub(crate)` and other restricted
/// forms) is bound under the key `derive_key(field_name, key)`, in declaration
/// order. Private fields are skipped and keep their value.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `skip` | Never bind this field |
/// | `rename = "Name"` | Derive the key from `Name` instead of the field name |
///
/// # Example
///
/// ```ignore
/// use envbind::Bind;
///
/// #[derive(Bind, Default)]
/// pub struct Config {
///     pub listen_port: i32,              // <PREFIX>_LISTEN_PORT
///
///     #[bind(rename = "DB")]
///     pub database: Database,            // <PREFIX>_DB_*
///
///     #[bind(skip)]
///     pub started_at: Option<u64>,       // never read
///
///     cache_dir: String,                 // private, never read
/// }
/// ```
///
/// Every bound field's type must implement `envbind::Bind`.
#[proc_macro_derive(Bind, attributes(bind))]
pub fn derive_bind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    // On error, convert to a compile_error!() invocation for better error messages
    expand::Expander::expand(&input).unwrap_or_else(|err| err.to_compile_error().into())
}
