// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Record` implementation generator.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! impl ::paranoid::Record for Android {
//!     type Id = Uuid;
//!
//!     const TABLE: &'static str = "androids";
//!     const ID_COLUMN: &'static str = "id";
//!     const UNIQUE: &'static [&'static str] = &["name"];
//!
//!     fn id(&self) -> &Uuid { &self.id }
//!
//!     fn get(&self, column: &str) -> Option<::paranoid::Value> {
//!         match column {
//!             "id" => Some(self.id.clone().into()),
//!             "name" => Some(self.name.clone().into()),
//!             _ => None
//!         }
//!     }
//!
//!     // soft_delete and validate add more items, see paranoid.rs
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::{paranoid, parse::ModelDef};

/// Generate `impl ::paranoid::Record`.
pub fn generate(model: &ModelDef) -> TokenStream {
    let ident = &model.ident;
    let (impl_generics, ty_generics, where_clause) = model.generics.split_for_impl();
    let table = &model.table;

    let id = model.id_field();
    let id_ident = &id.ident;
    let id_ty = &id.ty;
    let id_column = id.column_name();
    let unique = model.unique_columns();

    let arms = model.columns().map(|field| {
        let name = field.column_name();
        let field_ident = &field.ident;
        quote! {
            #name => ::core::option::Option::Some(
                ::core::convert::Into::<::paranoid::Value>::into(
                    ::core::clone::Clone::clone(&self.#field_ident)
                )
            ),
        }
    });

    let deletion = paranoid::record_items(model);
    let validate = validate_method(model);

    quote! {
        #[automatically_derived]
        impl #impl_generics ::paranoid::Record for #ident #ty_generics #where_clause {
            type Id = #id_ty;

            const TABLE: &'static str = #table;
            const ID_COLUMN: &'static str = #id_column;
            const UNIQUE: &'static [&'static str] = &[#(#unique),*];

            fn id(&self) -> &Self::Id {
                &self.#id_ident
            }

            fn get(&self, column: &str) -> ::core::option::Option<::paranoid::Value> {
                match column {
                    #(#arms)*
                    _ => ::core::option::Option::None
                }
            }

            #deletion
            #validate
        }
    }
}

fn validate_method(model: &ModelDef) -> TokenStream {
    if !model.validate {
        return TokenStream::new();
    }

    quote! {
        fn validate(
            &self
        ) -> ::core::result::Result<(), ::paranoid::validator::ValidationErrors> {
            ::paranoid::validator::Validate::validate(self)
        }
    }
}
