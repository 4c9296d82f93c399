// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory reference [`Store`].
//!
//! Rows are kept in insertion order, which is the natural order of an
//! unordered select. Conditions are evaluated with [`Condition::matches`]
//! and ordering uses [`Value::compare`] with `NULL`s sorted last for
//! ascending terms and first for descending ones.

use std::{
    cmp::Ordering,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard}
};

use chrono::{DateTime, Utc};

use crate::{Condition, OrderBy, Query, Record, SortDirection, Store, Value, async_trait};

/// Error type for [`MemoryStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    /// The table lock was poisoned by a panicking writer.
    #[error("table `{table}` lock poisoned")]
    Poisoned {
        /// Table name.
        table: &'static str
    },

    /// Insert of an id that is already stored.
    #[error("duplicate id {id} in table `{table}`")]
    DuplicateId {
        /// Table name.
        table: &'static str,
        /// Offending id.
        id:    Value
    },

    /// Update of a row that is not stored.
    #[error("no row with id {id} in table `{table}`")]
    NotFound {
        /// Table name.
        table: &'static str,
        /// Missing id.
        id:    Value
    }
}

impl MemoryError {
    /// Check if this is a lock poisoning error.
    pub const fn is_poisoned(&self) -> bool {
        matches!(self, Self::Poisoned { .. })
    }

    /// Check if this is a duplicate id error.
    pub const fn is_duplicate_id(&self) -> bool {
        matches!(self, Self::DuplicateId { .. })
    }

    /// Check if this is a missing row error.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Table of `R` rows held in memory.
#[derive(Debug)]
pub struct MemoryStore<R> {
    rows: RwLock<Vec<R>>
}

impl<R: Record> MemoryStore<R> {
    /// Create an empty table.
    pub const fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new())
        }
    }

    /// Number of physically stored rows, live and destroyed.
    pub fn len(&self) -> usize {
        self.read().map_or(0, |rows| rows.len())
    }

    /// Check if no rows are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<R>>, MemoryError> {
        self.rows.read().map_err(|_| MemoryError::Poisoned {
            table: R::TABLE
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<R>>, MemoryError> {
        self.rows.write().map_err(|_| MemoryError::Poisoned {
            table: R::TABLE
        })
    }
}

impl<R: Record> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn selected<R: Record>(filter: Option<&Condition>, record: &R) -> bool {
    filter.is_none_or(|c| c.matches(record))
}

fn compare_by<R: Record>(order: &[OrderBy], a: &R, b: &R) -> Ordering {
    for term in order {
        let left = a.get(term.column).unwrap_or_default();
        let right = b.get(term.column).unwrap_or_default();
        let ord = match (left.is_null(), right.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => left.compare(&right).unwrap_or(Ordering::Equal)
        };
        let ord = match term.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse()
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

#[async_trait]
impl<R: Record> Store<R> for MemoryStore<R> {
    type Error = MemoryError;

    async fn select(&self, query: &Query) -> Result<Vec<R>, Self::Error> {
        let rows = self.read()?;
        let mut found: Vec<R> = rows
            .iter()
            .filter(|r| selected(query.filter.as_ref(), *r))
            .cloned()
            .collect();
        drop(rows);

        if !query.order.is_empty() {
            found.sort_by(|a, b| compare_by(&query.order, a, b));
        }
        if let Some(page) = query.pagination {
            found = found.into_iter().skip(page.offset).take(page.limit).collect();
        }
        Ok(found)
    }

    async fn count(&self, query: &Query) -> Result<usize, Self::Error> {
        let rows = self.read()?;
        Ok(rows
            .iter()
            .filter(|r| selected(query.filter.as_ref(), *r))
            .count())
    }

    async fn insert(&self, record: R) -> Result<R, Self::Error> {
        let mut rows = self.write()?;
        if rows.iter().any(|r| r.id() == record.id()) {
            return Err(MemoryError::DuplicateId {
                table: R::TABLE,
                id:    record.id().clone().into()
            });
        }
        rows.push(record.clone());
        Ok(record)
    }

    async fn update(&self, record: &R) -> Result<R, Self::Error> {
        let mut rows = self.write()?;
        let Some(slot) = rows.iter_mut().find(|r| r.id() == record.id()) else {
            return Err(MemoryError::NotFound {
                table: R::TABLE,
                id:    record.id().clone().into()
            });
        };
        *slot = record.clone();
        Ok(record.clone())
    }

    async fn set_deleted_at(
        &self,
        filter: Option<&Condition>,
        at: Option<DateTime<Utc>>
    ) -> Result<usize, Self::Error> {
        let mut rows = self.write()?;
        let mut affected = 0;
        for row in rows.iter_mut().filter(|r| selected(filter, &**r)) {
            row.set_deleted_at(at);
            affected += 1;
        }
        Ok(affected)
    }

    async fn delete(&self, filter: Option<&Condition>) -> Result<usize, Self::Error> {
        let mut rows = self.write()?;
        let before = rows.len();
        rows.retain(|r| !selected(filter, r));
        Ok(before - rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pagination, testing::Droid};

    async fn seeded() -> MemoryStore<Droid> {
        let store = MemoryStore::new();
        for name in ["R2D2", "C3P0", "BB8"] {
            store.insert(Droid::new(name)).await.unwrap();
        }
        store
    }

    fn names(rows: &[Droid]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[tokio::test]
    async fn select_keeps_insertion_order() {
        let store = seeded().await;
        let rows = store.select(&Query::all()).await.unwrap();
        assert_eq!(names(&rows), ["R2D2", "C3P0", "BB8"]);
    }

    #[tokio::test]
    async fn select_orders_and_paginates() {
        let store = seeded().await;
        let query = Query {
            filter:     None,
            order:      vec![OrderBy::desc("name")],
            pagination: Some(Pagination::new(2, 1))
        };
        let rows = store.select(&query).await.unwrap();
        assert_eq!(names(&rows), ["C3P0", "BB8"]);
    }

    #[tokio::test]
    async fn nulls_sort_last_ascending() {
        let store = seeded().await;
        store
            .set_deleted_at(Some(&Condition::eq("name", "C3P0")), Some(Utc::now()))
            .await
            .unwrap();

        let asc = Query {
            order: vec![OrderBy::asc("deleted_at"), OrderBy::asc("name")],
            ..Query::all()
        };
        let rows = store.select(&asc).await.unwrap();
        assert_eq!(names(&rows), ["C3P0", "BB8", "R2D2"]);

        let desc = Query {
            order: vec![OrderBy::desc("deleted_at"), OrderBy::asc("name")],
            ..Query::all()
        };
        let rows = store.select(&desc).await.unwrap();
        assert_eq!(names(&rows), ["BB8", "R2D2", "C3P0"]);
    }

    #[tokio::test]
    async fn count_ignores_pagination() {
        let store = seeded().await;
        let query = Query::all().paginate(Pagination::new(1, 0));
        assert_eq!(store.count(&query).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_id() {
        let store = MemoryStore::new();
        let droid = Droid::new("R2D2");
        store.insert(droid.clone()).await.unwrap();
        let err = store.insert(droid).await.unwrap_err();
        assert!(err.is_duplicate_id());
        assert!(err.to_string().contains("androids"));
    }

    #[tokio::test]
    async fn update_missing_row_fails() {
        let store: MemoryStore<Droid> = MemoryStore::new();
        let err = store.update(&Droid::new("R2D2")).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(!err.is_poisoned());
    }

    #[tokio::test]
    async fn update_replaces_row() {
        let store = seeded().await;
        let mut droid = store.select(&Query::all()).await.unwrap().remove(0);
        droid.name = "R2-D2".into();
        store.update(&droid).await.unwrap();
        let rows = store.select(&Query::filtered(Condition::eq("name", "R2-D2"))).await.unwrap();
        assert_eq!(rows, vec![droid]);
    }

    #[tokio::test]
    async fn set_deleted_at_touches_matching_rows_only() {
        let store = seeded().await;
        let n = store
            .set_deleted_at(Some(&Condition::eq("name", "BB8")), Some(Utc::now()))
            .await
            .unwrap();
        assert_eq!(n, 1);
        let destroyed = store
            .count(&Query::filtered(Condition::is_not_null("deleted_at")))
            .await
            .unwrap();
        assert_eq!(destroyed, 1);
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn delete_removes_rows() {
        let store = seeded().await;
        let n = store.delete(Some(&Condition::eq("name", "R2D2"))).await.unwrap();
        assert_eq!(n, 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.delete(None).await.unwrap(), 2);
        assert!(store.is_empty());
    }
}
