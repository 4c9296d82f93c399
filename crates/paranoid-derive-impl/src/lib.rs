// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Proc-macro implementation of `#[derive(Model)]`.
//!
//! Use the `paranoid` crate instead of depending on this one directly: the
//! generated code refers to `::paranoid` paths.
//!
//! # Attribute Quick Reference
//!
//! ## Model-Level `#[model(...)]`
//!
//! ```rust,ignore
//! #[derive(Model)]
//! #[model(
//!     table = "androids", // Optional: default is the snake_case name + "s"
//!     soft_delete,        // Optional: destroy stamps deleted_at instead of removing
//!     validate            // Optional: run validator::Validate on create/save
//! )]
//! pub struct Android { /* ... */ }
//! ```
//!
//! ## Field-Level Attributes
//!
//! ```rust,ignore
//! pub struct Android {
//!     #[id]                       // Primary key, exactly one
//!     pub id: Uuid,
//!
//!     #[unique]                   // Unique over live and destroyed rows
//!     pub name: String,
//!
//!     #[column(name = "owner")]   // Column name override
//!     pub owner_id: Option<Uuid>,
//!
//!     #[column(skip)]             // Not readable as a column
//!     pub cache: Vec<u8>,
//!
//!     #[deleted_at]               // Deletion timestamp (optional when named deleted_at)
//!     pub deleted_at: Option<DateTime<Utc>>,
//! }
//! ```
//!
//! # Generated Code Overview
//!
//! | Input | Generated |
//! |-------|-----------|
//! | any model | `impl Record` (`TABLE`, `ID_COLUMN`, `UNIQUE`, `id`, `get`) |
//! | `soft_delete` | `DELETED_AT`, `deleted_at`, `set_deleted_at`, `impl Paranoid` |
//! | `validate` | `Record::validate` delegating to `validator::Validate` |

mod model;

use proc_macro::TokenStream;

/// Derive `paranoid::Record` for a struct with named fields.
///
/// # Example
///
/// ```rust,ignore
/// use chrono::{DateTime, Utc};
/// use paranoid::Model;
/// use uuid::Uuid;
///
/// #[derive(Debug, Clone, Model)]
/// #[model(soft_delete)]
/// pub struct Android {
///     #[id]
///     pub id: Uuid,
///
///     #[unique]
///     pub name: String,
///
///     pub owner_id: Option<Uuid>,
///
///     pub deleted_at: Option<DateTime<Utc>>,
/// }
///
/// assert_eq!(<Android as paranoid::Record>::TABLE, "androids");
/// ```
///
/// # Errors
///
/// Compilation fails for enums, unions, tuple and unit structs, structs
/// without exactly one `#[id]` field, `soft_delete` without a deletion
/// timestamp field, and `#[deleted_at]` without `soft_delete`.
#[proc_macro_derive(Model, attributes(model, id, unique, deleted_at, column))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    model::derive(input)
}
