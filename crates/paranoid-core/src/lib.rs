// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and runtime for paranoid records.
//!
//! A *paranoid* record is never physically removed by `destroy`: the
//! repository stamps its `deleted_at` column instead, and every default
//! query filters stamped rows out. Explicit entry points reach the
//! destroyed rows when they are needed.
//!
//! # Overview
//!
//! - [`Record`]: A persisted type: id, table, column access
//! - [`Paranoid`]: Marker for records that soft-delete
//! - [`Condition`] / [`Scope`] / [`Visibility`]: Composable query data
//! - [`Store`]: The persistence layer contract, with [`MemoryStore`] as
//!   the reference implementation
//! - [`Repository`] / [`Finder`]: Soft-delete aware operations
//! - [`HasMany`]: Dependent associations with cascade policies
//! - [`Hooks`]: Before/after callbacks
//! - [`prelude`]: Convenient re-exports
//!
//! # Usage
//!
//! Most users should use `paranoid` directly, which re-exports this crate
//! together with the `Model` derive. For manual implementations:
//!
//! ```rust,ignore
//! use paranoid_core::prelude::*;
//!
//! let androids = Repository::new(MemoryStore::<Android>::new());
//! let r2d2 = androids.create(Android::new("R2D2")).await?;
//! androids.destroy(&r2d2).await?;
//! assert_eq!(androids.count().await?, 0);
//! assert_eq!(androids.count_with_destroyed().await?, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod association;
mod condition;
mod error;
mod finder;
mod hooks;
mod memory;
pub mod prelude;
mod repository;
mod scope;
mod store;
#[cfg(test)]
mod testing;
mod validation;
mod value;

use std::fmt;

/// Re-export async_trait for hook and store implementations.
pub use async_trait::async_trait;
pub use association::{Association, Dependent, HasMany};
use chrono::{DateTime, Utc};
pub use condition::Condition;
pub use error::{BoxError, Error};
pub use finder::Finder;
pub use hooks::{Hooks, NoHooks};
pub use memory::{MemoryError, MemoryStore};
pub use repository::Repository;
pub use scope::{OrderBy, Query, Scope, Visibility};
pub use store::Store;
pub use validation::UNIQUE_CODE;
/// Re-export validator for `#[model(validate)]` and hand-written rules.
pub use validator;
use validator::ValidationErrors;
pub use value::Value;

/// Deletion timestamp type.
pub type Timestamp = DateTime<Utc>;

/// A persisted record type.
///
/// Usually implemented by `#[derive(Model)]`. Manual implementations only
/// need the id accessor and [`get`](Record::get); every other item has a
/// default suited to a non-paranoid type without uniqueness rules.
///
/// # Example
///
/// ```rust
/// use paranoid_core::{Record, Value};
/// use uuid::Uuid;
///
/// #[derive(Debug, Clone)]
/// struct Person {
///     id:   Uuid,
///     name: String
/// }
///
/// impl Record for Person {
///     type Id = Uuid;
///
///     const TABLE: &'static str = "people";
///
///     fn id(&self) -> &Uuid {
///         &self.id
///     }
///
///     fn get(&self, column: &str) -> Option<Value> {
///         match column {
///             "id" => Some(self.id.into()),
///             "name" => Some(self.name.clone().into()),
///             _ => None
///         }
///     }
/// }
/// ```
pub trait Record: Clone + Send + Sync + 'static {
    /// Primary key type.
    type Id: Clone + PartialEq + fmt::Debug + Send + Sync + Into<Value>;

    /// Table name, used for logging and by SQL-backed stores.
    const TABLE: &'static str;

    /// Primary key column.
    const ID_COLUMN: &'static str = "id";

    /// Columns carrying a uniqueness rule.
    ///
    /// Uniqueness is checked against every row of the table, including
    /// soft-deleted ones.
    const UNIQUE: &'static [&'static str] = &[];

    /// Deletion timestamp column, `Some` for paranoid types.
    const DELETED_AT: Option<&'static str> = None;

    /// Primary key of this record.
    fn id(&self) -> &Self::Id;

    /// Read a column by name.
    ///
    /// Returns `None` for unknown columns; predicates treat that as `NULL`.
    fn get(&self, column: &str) -> Option<Value>;

    /// Deletion timestamp, `None` while the record is live.
    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    /// Set the deletion timestamp. No-op for non-paranoid types.
    fn set_deleted_at(&mut self, at: Option<DateTime<Utc>>) {
        let _ = at;
    }

    /// Field-level validation run on create and save.
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }

    /// Check whether this record has been soft-deleted.
    fn is_destroyed(&self) -> bool {
        self.deleted_at().is_some()
    }
}

/// Marker for records that soft-delete.
///
/// Implementors must set [`Record::DELETED_AT`] and implement
/// [`Record::deleted_at`] and [`Record::set_deleted_at`] over that column.
/// Only paranoid types get restore and the destroyed-row query variants.
pub trait Paranoid: Record {}

/// Pagination parameters for list operations.
///
/// # Example
///
/// ```rust
/// use paranoid_core::Pagination;
///
/// let page = Pagination::new(10, 0); // First 10 items
/// let next = Pagination::page(1, 10); // Next 10 items
/// assert_eq!(next.offset, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pagination {
    /// Maximum number of results to return.
    pub limit: usize,

    /// Number of results to skip.
    pub offset: usize
}

impl Pagination {
    /// Create new pagination parameters.
    pub const fn new(limit: usize, offset: usize) -> Self {
        Self {
            limit,
            offset
        }
    }

    /// Create pagination for a specific page (0-indexed).
    pub const fn page(page: usize, per_page: usize) -> Self {
        Self {
            limit:  per_page,
            offset: page * per_page
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit:  100,
            offset: 0
        }
    }
}

/// Sort direction for ordered queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9, oldest first).
    #[default]
    Asc,

    /// Descending order (Z-A, 9-0, newest first).
    Desc
}

impl SortDirection {
    /// Convert to SQL keyword.
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC"
        }
    }
}
