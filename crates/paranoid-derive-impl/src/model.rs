// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! model.rs (orchestrator)
//! │
//! ├── parse/       → Attribute parsing (ModelDef, FieldDef)
//! │
//! ├── record.rs    → impl Record (table, columns, id, validation)
//! └── paranoid.rs  → deletion timestamp accessors + impl Paranoid
//! ```

pub mod parse;
mod paranoid;
mod record;

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::ModelDef;

/// Main entry point for the Model derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ModelDef::from_derive_input(&input) {
        Ok(model) => generate(&model),
        Err(err) => err.write_errors().into()
    }
}

fn generate(model: &ModelDef) -> TokenStream {
    let record = record::generate(model);
    let paranoid = paranoid::generate(model);

    let expanded = quote! {
        #record
        #paranoid
    };

    expanded.into()
}
