// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the Model derive macro.
//!
//! Model-level attributes (`#[model(table = "...", soft_delete)]`) are
//! parsed with darling's `FromDeriveInput`. Field-level attributes are
//! markers (`#[id]`, `#[unique]`, `#[deleted_at]`) or a small list
//! (`#[column(...)]`) and are parsed by hand.
//!
//! # Data Structures
//!
//! ```text
//! ModelDef
//! ├── ident: Ident            (struct name, e.g. "Android")
//! ├── generics: Generics
//! ├── table: String           (explicit or snake_case name + "s")
//! ├── soft_delete: bool
//! ├── validate: bool
//! ├── id_field_index: usize
//! ├── deleted_at_index: Option<usize>
//! └── fields: Vec<FieldDef>
//!     └── FieldDef
//!         ├── ident: Ident
//!         ├── ty: Type
//!         ├── column: ColumnConfig  (name override, skip)
//!         └── markers               (is_id, is_unique, is_deleted_at)
//! ```

mod attrs;
mod field;

use convert_case::{Case, Casing};
use darling::FromDeriveInput;
use syn::{DeriveInput, Generics, Ident};

use self::attrs::ModelAttrs;
pub use self::field::FieldDef;

/// Name of the implicit deletion timestamp field.
const DELETED_AT: &str = "deleted_at";

/// Parsed `#[derive(Model)]` input.
#[derive(Debug)]
pub struct ModelDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics, forwarded to the generated impls.
    pub generics: Generics,

    /// Table name.
    pub table: String,

    /// Whether `destroy` soft-deletes.
    pub soft_delete: bool,

    /// Whether `Record::validate` delegates to `validator::Validate`.
    pub validate: bool,

    /// All named fields in declaration order.
    pub fields: Vec<FieldDef>,

    id_field_index:   usize,
    deleted_at_index: Option<usize>
}

impl ModelDef {
    /// Parse a model definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Applied to an enum, union, tuple or unit struct
    /// - No field, or more than one field, marked `#[id]`
    /// - `#[id]` or `#[unique]` combined with `#[column(skip)]`
    /// - `soft_delete` without a `#[deleted_at]` or `deleted_at` field
    /// - `#[deleted_at]` without `soft_delete`, or on more than one field
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = ModelAttrs::from_derive_input(input)?;

        let fields: Vec<FieldDef> = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named
                    .named
                    .iter()
                    .map(FieldDef::from_field)
                    .collect::<darling::Result<Vec<_>>>()?,
                _ => {
                    return Err(darling::Error::custom("Model requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("Model can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        let id_field_index = single_id(&fields, &input.ident)?;
        if let Some(field) = fields.iter().find(|f| f.is_unique && f.column.skip) {
            return Err(darling::Error::custom("#[unique] field cannot be skipped")
                .with_span(&field.ident));
        }
        let deleted_at_index = deleted_at_field(&fields, attrs.soft_delete, &input.ident)?;

        let table = attrs
            .table
            .unwrap_or_else(|| format!("{}s", attrs.ident.to_string().to_case(Case::Snake)));

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            table,
            soft_delete: attrs.soft_delete,
            validate: attrs.validate,
            fields,
            id_field_index,
            deleted_at_index
        })
    }

    /// The primary key field.
    pub fn id_field(&self) -> &FieldDef {
        &self.fields[self.id_field_index]
    }

    /// The deletion timestamp field, set for soft-delete models.
    pub fn deleted_at_field(&self) -> Option<&FieldDef> {
        self.deleted_at_index.map(|i| &self.fields[i])
    }

    /// Fields readable through `Record::get`.
    pub fn columns(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| !f.column.skip)
    }

    /// Column names carrying a uniqueness rule.
    pub fn unique_columns(&self) -> Vec<String> {
        self.columns()
            .filter(|f| f.is_unique)
            .map(FieldDef::column_name)
            .collect()
    }
}

fn single_id(fields: &[FieldDef], ident: &Ident) -> darling::Result<usize> {
    let mut ids = fields.iter().enumerate().filter(|(_, f)| f.is_id);
    let Some((index, id)) = ids.next() else {
        return Err(
            darling::Error::custom("Model must have exactly one field with #[id] attribute")
                .with_span(ident)
        );
    };
    if let Some((_, extra)) = ids.next() {
        return Err(darling::Error::custom("Model must have exactly one field with #[id] attribute")
            .with_span(&extra.ident));
    }
    if id.column.skip {
        return Err(darling::Error::custom("#[id] field cannot be skipped").with_span(&id.ident));
    }
    Ok(index)
}

fn deleted_at_field(
    fields: &[FieldDef],
    soft_delete: bool,
    ident: &Ident
) -> darling::Result<Option<usize>> {
    let mut marked = fields.iter().enumerate().filter(|(_, f)| f.is_deleted_at);
    let explicit = marked.next();
    if let Some((_, extra)) = marked.next() {
        return Err(
            darling::Error::custom("only one field can be marked #[deleted_at]")
                .with_span(&extra.ident)
        );
    }

    if !soft_delete {
        return match explicit {
            Some((_, field)) => Err(darling::Error::custom(
                "#[deleted_at] requires #[model(soft_delete)]"
            )
            .with_span(&field.ident)),
            None => Ok(None)
        };
    }

    let found = explicit
        .map(|(i, _)| i)
        .or_else(|| fields.iter().position(|f| f.ident == DELETED_AT));
    let Some(index) = found else {
        return Err(darling::Error::custom(
            "soft_delete requires a `deleted_at: Option<DateTime<Utc>>` field or a field marked #[deleted_at]"
        )
        .with_span(ident));
    };
    if fields[index].column.skip {
        return Err(darling::Error::custom("deletion timestamp field cannot be skipped")
            .with_span(&fields[index].ident));
    }
    Ok(Some(index))
}
