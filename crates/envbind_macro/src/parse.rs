//! Attribute parsing for `#[bind(skip)]` and `#[bind(rename = "Name")]`.
//!
//! Uses syn's `ParseNestedMeta`, which gives comma and trailing comma
//! handling plus error spans pointing at the offending token.
//!
//! # Supported Syntax
//!
//! ```ignore
//! #[bind(skip)]                    // Field is never bound
//! #[bind(rename = "Database")]     // Key segment derived from "Database"
//! ```
//!
//! `skip` and `rename` are mutually exclusive, and each may appear once per
//! field, even when split across several `#[bind(...)]` attributes.

use std::collections::HashSet;

use syn::meta::ParseNestedMeta;
use syn::{Error as SynError, Field, LitStr, Result as SynResult};

/// Parsed `#[bind(...)]` options for one field.
#[derive(Debug, Default)]
pub struct BindAttr {
    /// `#[bind(skip)]` was given.
    pub skip: bool,

    /// Name to derive the key from instead of the field identifier.
    pub rename: Option<LitStr>,
}

impl BindAttr {
    /// Collects all `#[bind(...)]` attributes on a field.
    pub fn parse_from_field(field: &Field) -> SynResult<Self> {
        let mut parser = Parser::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("bind") {
                continue;
            }

            attr.parse_nested_meta(|meta| parser.parse_meta(&meta))?;
        }

        parser.build()
    }
}

#[derive(Default)]
struct Parser {
    seen: HashSet<&'static str>,
    skip: Option<proc_macro2::Span>,
    rename: Option<LitStr>,
}

impl Parser {
    fn parse_meta(&mut self, meta: &ParseNestedMeta) -> SynResult<()> {
        let ident = meta
            .path
            .get_ident()
            .ok_or_else(|| meta.error("Expected Identifier"))?;
        let name = ident.to_string();

        let key: &'static str = match name.as_str() {
            "skip" => "skip",
            "rename" => "rename",
            _ => return Err(meta.error(format!("Unknown option `{name}`"))),
        };

        // Check for duplicate options like #[bind(skip, skip)]
        if !self.seen.insert(key) {
            return Err(meta.error(format!("Duplicate option: `{key}`")));
        }

        if key == "skip" {
            self.skip = Some(ident.span());
            return Ok(());
        }

        // rename = "Name" - requires a non-empty string value
        let lit_str: LitStr = meta.value()?.parse()?;
        if lit_str.value().is_empty() {
            return Err(SynError::new(lit_str.span(), "`rename` must not be empty"));
        }
        self.rename = Some(lit_str);

        Ok(())
    }

    fn build(self) -> SynResult<BindAttr> {
        if let (Some(span), Some(_)) = (self.skip, &self.rename) {
            return Err(SynError::new(span, "`skip` cannot be combined with `rename`"));
        }

        Ok(BindAttr {
            skip: self.skip.is_some(),
            rename: self.rename,
        })
    }
}
