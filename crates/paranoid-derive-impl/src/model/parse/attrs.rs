// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model-level attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `table` | No | snake_case name + `s` | Table name |
//! | `soft_delete` | No | `false` | Stamp `deleted_at` instead of removing rows |
//! | `validate` | No | `false` | Delegate `Record::validate` to `validator::Validate` |

use darling::FromDeriveInput;
use syn::{Generics, Ident};

/// Model-level attributes parsed from `#[model(...)]`.
///
/// Internal to parsing; see [`ModelDef`](super::ModelDef).
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(model))]
pub struct ModelAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Table name override.
    #[darling(default)]
    pub table: Option<String>,

    /// Enable soft delete.
    ///
    /// The model must have a `deleted_at: Option<DateTime<Utc>>` field, or
    /// another field of that type marked `#[deleted_at]`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// #[model(table = "androids", soft_delete)]
    /// pub struct Android {
    ///     #[id]
    ///     pub id: Uuid,
    ///     pub deleted_at: Option<DateTime<Utc>>,
    /// }
    /// ```
    #[darling(default)]
    pub soft_delete: bool,

    /// Run `validator::Validate` on create and save.
    #[darling(default)]
    pub validate: bool
}
