// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Soft delete generators.
//!
//! When a model has `#[model(soft_delete)]`:
//!
//! | Item | Description |
//! |------|-------------|
//! | `Record::DELETED_AT` | Name of the deletion timestamp column |
//! | `Record::deleted_at` | Reads the timestamp field |
//! | `Record::set_deleted_at` | Writes the timestamp field |
//! | `impl Paranoid` | Unlocks restore and the destroyed-row queries |
//!
//! The timestamp field must be `Option<DateTime<Utc>>`; any other type
//! fails to compile inside the generated accessors.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::ModelDef;

/// Deletion items inside `impl Record`. Empty without `soft_delete`.
pub fn record_items(model: &ModelDef) -> TokenStream {
    let Some(field) = model.deleted_at_field() else {
        return TokenStream::new();
    };
    let ident = &field.ident;
    let column = field.column_name();

    quote! {
        const DELETED_AT: ::core::option::Option<&'static str> =
            ::core::option::Option::Some(#column);

        fn deleted_at(&self) -> ::core::option::Option<::paranoid::Timestamp> {
            self.#ident
        }

        fn set_deleted_at(&mut self, at: ::core::option::Option<::paranoid::Timestamp>) {
            self.#ident = at;
        }
    }
}

/// Generate `impl ::paranoid::Paranoid`. Empty without `soft_delete`.
pub fn generate(model: &ModelDef) -> TokenStream {
    if !model.soft_delete {
        return TokenStream::new();
    }
    let ident = &model.ident;
    let (impl_generics, ty_generics, where_clause) = model.generics.split_for_impl();

    quote! {
        #[automatically_derived]
        impl #impl_generics ::paranoid::Paranoid for #ident #ty_generics #where_clause {}
    }
}

#[cfg(test)]
mod tests {
    use syn::DeriveInput;

    use super::*;

    fn model(input: DeriveInput) -> ModelDef {
        ModelDef::from_derive_input(&input).unwrap()
    }

    #[test]
    fn soft_delete_uses_deleted_at_field() {
        let model = model(syn::parse_quote! {
            #[model(soft_delete)]
            pub struct Android {
                #[id]
                pub id: Uuid,
                pub deleted_at: Option<DateTime<Utc>>,
            }
        });
        let items = record_items(&model).to_string();
        assert!(items.contains("Some (\"deleted_at\")"));
        assert!(items.contains("self . deleted_at = at"));
        assert!(generate(&model).to_string().contains(":: paranoid :: Paranoid for Android"));
    }

    #[test]
    fn marked_field_with_column_name() {
        let model = model(syn::parse_quote! {
            #[model(soft_delete)]
            pub struct Android {
                #[id]
                pub id: Uuid,
                #[deleted_at]
                #[column(name = "removed_at")]
                pub removed: Option<DateTime<Utc>>,
            }
        });
        let items = record_items(&model).to_string();
        assert!(items.contains("Some (\"removed_at\")"));
        assert!(items.contains("self . removed"));
    }

    #[test]
    fn plain_model_generates_nothing() {
        let model = model(syn::parse_quote! {
            pub struct Person {
                #[id]
                pub id: Uuid,
                pub deleted_at: Option<DateTime<Utc>>,
            }
        });
        assert!(record_items(&model).is_empty());
        assert!(generate(&model).is_empty());
    }
}
