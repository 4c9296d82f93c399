// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! | Attribute | Effect |
//! |-----------|--------|
//! | `#[id]` | Primary key |
//! | `#[unique]` | Listed in `Record::UNIQUE` |
//! | `#[deleted_at]` | Deletion timestamp of a soft-delete model |
//! | `#[column(name = "...")]` | Column name used by `Record::get` and conditions |
//! | `#[column(skip)]` | Not readable through `Record::get` |

use syn::{Attribute, Field, Ident, LitStr, Type};

/// Column configuration from `#[column(...)]`.
#[derive(Debug, Default, Clone)]
pub struct ColumnConfig {
    /// Column name override.
    pub name: Option<String>,

    /// Exclude the field from `Record::get`.
    pub skip: bool
}

impl ColumnConfig {
    /// Parse `#[column(name = "...", skip)]`.
    ///
    /// # Errors
    ///
    /// Unknown keys and non-string names.
    pub fn from_attr(attr: &Attribute) -> darling::Result<Self> {
        let mut config = Self::default();
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                config.skip = true;
                Ok(())
            } else if meta.path.is_ident("name") {
                let name: LitStr = meta.value()?.parse()?;
                config.name = Some(name.value());
                Ok(())
            } else {
                Err(meta.error("expected `name = \"...\"` or `skip`"))
            }
        })?;
        Ok(config)
    }
}

/// Field definition with all parsed attributes.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Field type.
    pub ty: Type,

    /// Column configuration.
    pub column: ColumnConfig,

    /// Primary key (`#[id]`).
    pub is_id: bool,

    /// Uniqueness rule (`#[unique]`).
    pub is_unique: bool,

    /// Explicit deletion timestamp (`#[deleted_at]`).
    pub is_deleted_at: bool
}

impl FieldDef {
    /// Parse field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// Returns error if the field has no identifier or a `#[column]`
    /// attribute is malformed.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Model fields must be named").with_span(field)
        })?;

        let mut def = Self {
            ident,
            ty: field.ty.clone(),
            column: ColumnConfig::default(),
            is_id: false,
            is_unique: false,
            is_deleted_at: false
        };

        for attr in &field.attrs {
            if attr.path().is_ident("id") {
                def.is_id = true;
            } else if attr.path().is_ident("unique") {
                def.is_unique = true;
            } else if attr.path().is_ident("deleted_at") {
                def.is_deleted_at = true;
            } else if attr.path().is_ident("column") {
                def.column = ColumnConfig::from_attr(attr)?;
            }
        }

        Ok(def)
    }

    /// Column name: the `#[column(name)]` override or the field name.
    #[must_use]
    pub fn column_name(&self) -> String {
        self.column
            .name
            .clone()
            .unwrap_or_else(|| self.ident.to_string())
    }
}
