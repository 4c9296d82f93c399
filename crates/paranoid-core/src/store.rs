// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persistence layer contract.
//!
//! [`Store`] is everything a [`Repository`](crate::Repository) needs from
//! the layer below it: a filtered and ordered select, insert and update of
//! whole records, a single-column update of the deletion marker over a row
//! set, and an unconditional row removal.
//!
//! A SQL-backed implementation maps these onto:
//!
//! ```sql
//! SELECT ... FROM table WHERE <filter> ORDER BY <order> LIMIT n OFFSET m
//! INSERT INTO table (...) VALUES (...)
//! UPDATE table SET ... WHERE id = $1
//! UPDATE table SET deleted_at = $1 WHERE <filter>
//! DELETE FROM table WHERE <filter>
//! ```

use chrono::{DateTime, Utc};

use crate::{Condition, Query, Record, async_trait};

/// Storage backend for records of type `R`.
///
/// # Example
///
/// ```rust,ignore
/// #[async_trait]
/// impl Store<Android> for PgStore {
///     type Error = sqlx::Error;
///
///     async fn select(&self, query: &Query) -> Result<Vec<Android>, Self::Error> {
///         // translate query.filter / query.order into SQL
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait Store<R: Record>: Send + Sync {
    /// Error raised by the backend.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch every row matching `query`, ordered and paginated.
    async fn select(&self, query: &Query) -> Result<Vec<R>, Self::Error>;

    /// Count rows matching `query.filter`.
    ///
    /// Ordering and pagination are ignored.
    async fn count(&self, query: &Query) -> Result<usize, Self::Error> {
        let unpaged = Query {
            filter:     query.filter.clone(),
            order:      Vec::new(),
            pagination: None
        };
        Ok(self.select(&unpaged).await?.len())
    }

    /// Insert a new row and return it as stored.
    async fn insert(&self, record: R) -> Result<R, Self::Error>;

    /// Overwrite the stored row that has the same id as `record`.
    async fn update(&self, record: &R) -> Result<R, Self::Error>;

    /// Set the deletion marker of every row matching `filter`.
    ///
    /// `None` as filter targets every row. Returns the number of rows
    /// affected.
    async fn set_deleted_at(
        &self,
        filter: Option<&Condition>,
        at: Option<DateTime<Utc>>
    ) -> Result<usize, Self::Error>;

    /// Physically remove every row matching `filter`.
    ///
    /// `None` as filter removes every row. Returns the number of rows
    /// removed.
    async fn delete(&self, filter: Option<&Condition>) -> Result<usize, Self::Error>;
}
