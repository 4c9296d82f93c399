// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Lifecycle hooks.
//!
//! A [`Repository`](crate::Repository) calls its hooks around every write:
//!
//! | Operation | Hooks |
//! |-----------|-------|
//! | `create`, `save` | `before_save`, `after_save` |
//! | `destroy` | `before_destroy`, `after_destroy` |
//! | `restore` | `before_restore`, `after_restore` |
//!
//! Hard deletes (`delete_all`, `delete_by_id`) bypass hooks.
//!
//! # Error Handling
//!
//! If a `before_*` hook returns an error, the operation is aborted.
//! If an `after_*` hook returns an error, the write has already happened
//! but the error is propagated to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! struct Audit;
//!
//! #[async_trait]
//! impl Hooks<Android> for Audit {
//!     async fn after_destroy(&self, android: &Android) -> Result<(), BoxError> {
//!         tracing::info!(name = %android.name, "android retired");
//!         Ok(())
//!     }
//! }
//!
//! let androids = Repository::new(store).with_hooks(Audit);
//! ```

use crate::{BoxError, Record, async_trait};

/// Before/after callbacks for record writes.
///
/// All methods have default no-op implementations.
#[async_trait]
pub trait Hooks<R: Record>: Send + Sync {
    /// Called before a record is inserted or updated.
    ///
    /// Runs after validation. Modify `record` to transform it before it is
    /// persisted.
    async fn before_save(&self, record: &mut R) -> Result<(), BoxError> {
        let _ = record;
        Ok(())
    }

    /// Called after a record is inserted or updated.
    async fn after_save(&self, record: &R) -> Result<(), BoxError> {
        let _ = record;
        Ok(())
    }

    /// Called before a record is destroyed, ahead of any cascade.
    async fn before_destroy(&self, record: &R) -> Result<(), BoxError> {
        let _ = record;
        Ok(())
    }

    /// Called after a record is destroyed.
    ///
    /// For paranoid types `record` carries the new deletion timestamp.
    async fn after_destroy(&self, record: &R) -> Result<(), BoxError> {
        let _ = record;
        Ok(())
    }

    /// Called before a soft-deleted record is restored.
    async fn before_restore(&self, record: &R) -> Result<(), BoxError> {
        let _ = record;
        Ok(())
    }

    /// Called after a record is restored.
    async fn after_restore(&self, record: &R) -> Result<(), BoxError> {
        let _ = record;
        Ok(())
    }
}

/// Hooks that do nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl<R: Record> Hooks<R> for NoHooks {}
