//! Code generation for the `Bind` derive macro.
//!
//! The [`Expander`] coordinates the expansion:
//!
//! 1. **Validation** - Ensures input is a struct with named fields
//! 2. **Selection** - Keeps `pub` fields that are not `#[bind(skip)]`
//! 3. **Generation** - Emits one `Bind::bind` call per selected field
//!
//! For
//!
//! ```ignore
//! #[derive(Bind)]
//! pub struct Config {
//!     pub port: i32,
//!     #[bind(rename = "DB")]
//!     pub database: Database,
//!     cache: String,
//! }
//! ```
//!
//! the generated impl is
//!
//! ```ignore
//! impl ::envbind::Bind for Config {
//!     fn bind(&mut self, key: &str, lookup: &dyn ::envbind::Lookup) -> Result<(), ::envbind::Error> {
//!         ::envbind::Bind::bind(&mut self.port, &::envbind::derive_key("port", key), lookup)?;
//!         ::envbind::Bind::bind(&mut self.database, &::envbind::derive_key("DB", key), lookup)?;
//!         Ok(())
//!     }
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as QuoteStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{
    Data, DeriveInput, Error as SynError, Field, Fields, Ident, Result as SynResult, Type,
    Visibility, parse_quote,
};

use crate::parse::BindAttr;

/// A field that takes part in binding.
struct BoundField<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    /// Name the key segment is derived from.
    key_name: String,
}

/// The main orchestrator for macro expansion.
pub struct Expander;

impl Expander {
    /// Main entry point for expanding the derive macro.
    ///
    /// # Errors
    ///
    /// Returns a `syn::Error` if:
    /// - The input is not a struct (enums and unions are not supported)
    /// - The struct is a tuple struct or a unit struct
    /// - Any `#[bind(...)]` attribute has invalid syntax
    pub fn expand(input: &DeriveInput) -> SynResult<TokenStream> {
        let struct_name = &input.ident;
        let fields = Self::extract_struct_fields(input)?;

        let mut bound = Vec::new();
        for field in fields {
            if let Some(field) = Self::select_field(field)? {
                bound.push(field);
            }
        }

        // Generic structs get a `Bind` bound per bound field type.
        let mut generics = input.generics.clone();
        if !generics.params.is_empty() {
            let where_clause = generics.make_where_clause();
            for field in &bound {
                let ty = field.ty;
                where_clause
                    .predicates
                    .push(parse_quote! { #ty: ::envbind::Bind });
            }
        }
        let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

        let bind_calls = bound.iter().map(Self::generate_bind_call);

        let expanded = quote! {
            impl #impl_generics ::envbind::Bind for #struct_name #type_generics #where_clause {
                #[allow(unused_variables)]
                fn bind(
                    &mut self,
                    key: &str,
                    lookup: &dyn ::envbind::Lookup,
                ) -> ::core::result::Result<(), ::envbind::Error> {
                    #(#bind_calls)*
                    ::core::result::Result::Ok(())
                }
            }
        };

        Ok(expanded.into())
    }

    /// Extract named fields from the struct, rejecting invalid types.
    fn extract_struct_fields(input: &DeriveInput) -> SynResult<&Punctuated<Field, Comma>> {
        match &input.data {
            Data::Struct(data_struct) => match &data_struct.fields {
                // Named fields: struct Foo { bar: i32 }
                Fields::Named(fields_named) => Ok(&fields_named.named),

                // Tuple struct: struct Foo(i32)
                Fields::Unnamed(_) => Err(SynError::new_spanned(
                    input,
                    "Bind does not support tuple structs",
                )),

                // Unit struct: struct Foo;
                Fields::Unit => Err(SynError::new_spanned(
                    input,
                    "Bind does not support unit structs",
                )),
            },

            // enum Foo { ... }
            Data::Enum(_) => Err(SynError::new_spanned(
                input,
                "Bind can only be derived for structs, not enums",
            )),

            Data::Union(_) => Err(SynError::new_spanned(
                input,
                "Bind can only be derived for structs, not unions",
            )),
        }
    }

    /// Returns the field if it takes part in binding.
    ///
    /// Private fields are skipped even when they carry `#[bind(...)]`, but the
    /// attribute is still validated so typos do not go unnoticed.
    fn select_field(field: &Field) -> SynResult<Option<BoundField<'_>>> {
        let attr = BindAttr::parse_from_field(field)?;

        if attr.skip || matches!(field.vis, Visibility::Inherited) {
            return Ok(None);
        }

        let Some(ident) = field.ident.as_ref() else {
            return Err(SynError::new_spanned(field, "Bind requires named fields"));
        };

        let key_name = attr
            .rename
            .map_or_else(|| ident.unraw().to_string(), |lit| lit.value());

        Ok(Some(BoundField {
            ident,
            ty: &field.ty,
            key_name,
        }))
    }

    fn generate_bind_call(field: &BoundField<'_>) -> QuoteStream {
        let ident = field.ident;
        let key_name = &field.key_name;

        quote! {
            ::envbind::Bind::bind(
                &mut self.#ident,
                &::envbind::derive_key(#key_name, key),
                lookup,
            )?;
        }
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn names(input: &DeriveInput) -> Vec<String> {
        Expander::extract_struct_fields(input)
            .unwrap()
            .iter()
            .filter_map(|f| Expander::select_field(f).unwrap())
            .map(|f| f.key_name)
            .collect()
    }

    #[test]
    fn test_selects_public_fields_in_order() {
        let input: DeriveInput = parse_quote! {
            struct Config {
                pub host: String,
                port: i32,
                pub(crate) debug: bool,
                #[bind(skip)]
                pub cache: String,
                #[bind(rename = "DB")]
                pub database: Database,
            }
        };

        assert_eq!(names(&input), ["host", "debug", "DB"]);
    }

    #[test]
    fn test_raw_identifier_prefix_stripped() {
        let input: DeriveInput = parse_quote! {
            struct Config { pub r#type: String }
        };
        assert_eq!(names(&input), ["type"]);
    }

    #[test]
    fn test_rejects_tuple_struct() {
        let input: DeriveInput = parse_quote! { struct Config(pub i32); };
        let err = Expander::extract_struct_fields(&input).unwrap_err();
        assert!(err.to_string().contains("tuple structs"));
    }

    #[test]
    fn test_rejects_unit_struct() {
        let input: DeriveInput = parse_quote! { struct Config; };
        assert!(Expander::extract_struct_fields(&input).is_err());
    }

    #[test]
    fn test_rejects_enum() {
        let input: DeriveInput = parse_quote! { enum Mode { A, B } };
        let err = Expander::extract_struct_fields(&input).unwrap_err();
        assert!(err.to_string().contains("not enums"));
    }

    #[test]
    fn test_private_field_attribute_still_validated() {
        let input: DeriveInput = parse_quote! {
            struct Config { #[bind(bogus)] secret: String }
        };
        let fields = Expander::extract_struct_fields(&input).unwrap();
        assert!(Expander::select_field(fields.first().unwrap()).is_err());
    }

    #[test]
    fn test_bind_call_uses_key_name() {
        let input: DeriveInput = parse_quote! {
            struct Config { #[bind(rename = "Db")] pub database: Database }
        };
        let fields = Expander::extract_struct_fields(&input).unwrap();
        let field = Expander::select_field(fields.first().unwrap())
            .unwrap()
            .unwrap();

        let tokens = Expander::generate_bind_call(&field).to_string();
        assert!(tokens.contains("\"Db\""));
        assert!(tokens.contains("self . database"));
    }
}
