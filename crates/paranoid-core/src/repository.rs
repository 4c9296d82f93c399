// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Soft-delete aware repository.
//!
//! [`Repository`] wraps a [`Store`] and routes every operation into the
//! right visibility:
//!
//! | Method | Rows |
//! |--------|------|
//! | `find`, `all`, `count` | live only |
//! | `find_with_destroyed`, `all_with_destroyed`, `count_with_destroyed` | live + destroyed |
//! | `find_only_destroyed`, `all_only_destroyed`, `count_only_destroyed` | destroyed only |
//! | `destroy_by_id`, `destroy_all` | live only |
//! | `delete_all`, `delete_by_id` | every row (hard delete) |
//!
//! # Soft Delete Pattern
//!
//! For a paranoid record `destroy` issues
//!
//! ```sql
//! UPDATE table SET deleted_at = NOW() WHERE id = $1
//! ```
//!
//! and `restore` clears the column again. Non-paranoid records are removed
//! for real, which lets a plain owner cascade into paranoid children.

use std::{fmt, sync::Arc};

use chrono::Utc;

use crate::{
    Association, Condition, Error, Finder, Hooks, NoHooks, Paranoid, Record, Scope, Store,
    Visibility, validation
};

/// Repository for records of type `R` stored in `S`.
///
/// Cloning is cheap: the store, associations and hooks are shared.
pub struct Repository<R: Record, S> {
    store:        Arc<S>,
    associations: Vec<Arc<dyn Association<R>>>,
    hooks:        Arc<dyn Hooks<R>>
}

impl<R: Record, S> Clone for Repository<R, S> {
    fn clone(&self) -> Self {
        Self {
            store:        Arc::clone(&self.store),
            associations: self.associations.clone(),
            hooks:        Arc::clone(&self.hooks)
        }
    }
}

impl<R: Record, S> fmt::Debug for Repository<R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let associations: Vec<&str> = self.associations.iter().map(|a| a.name()).collect();
        f.debug_struct("Repository")
            .field("table", &R::TABLE)
            .field("associations", &associations)
            .finish_non_exhaustive()
    }
}

impl<R: Record, S: Store<R>> Repository<R, S> {
    /// Create a repository over `store`, without hooks or associations.
    pub fn new(store: S) -> Self {
        Self::shared(Arc::new(store))
    }

    /// Create a repository over a store that is shared with other owners.
    pub fn shared(store: Arc<S>) -> Self {
        Self {
            store,
            associations: Vec::new(),
            hooks: Arc::new(NoHooks)
        }
    }

    /// Install lifecycle hooks, replacing any previous ones.
    #[must_use]
    pub fn with_hooks(mut self, hooks: impl Hooks<R> + 'static) -> Self {
        self.hooks = Arc::new(hooks);
        self
    }

    /// Declare a dependent association.
    ///
    /// Associations cascade in declaration order when a record is
    /// destroyed.
    #[must_use]
    pub fn has_many(mut self, association: impl Association<R> + 'static) -> Self {
        self.associations.push(Arc::new(association));
        self
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Start a query over this repository.
    pub fn query(&self) -> Finder<'_, R, S> {
        Finder::new(self)
    }

    /// Start a query with a named scope.
    pub fn scope(&self, scope: Scope) -> Finder<'_, R, S> {
        self.query().scope(scope)
    }

    /// Validate and insert a new record.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if a field rule fails or a unique column
    /// collides with any stored row, soft-deleted rows included.
    pub async fn create(&self, mut record: R) -> Result<R, Error<S::Error>> {
        validation::validate(&*self.store, &record).await?;
        self.hooks
            .before_save(&mut record)
            .await
            .map_err(|e| Error::hook("before_save", e))?;

        let created = self.store.insert(record).await.map_err(Error::Store)?;
        tracing::info!(table = R::TABLE, id = ?created.id(), "created record");

        self.hooks
            .after_save(&created)
            .await
            .map_err(|e| Error::hook("after_save", e))?;
        Ok(created)
    }

    /// Validate and persist changes to an existing record.
    ///
    /// The deletion timestamp is never written by `save`: the stored value
    /// is kept, so a stale copy cannot bring a destroyed row back. Use
    /// `restore` for that.
    pub async fn save(&self, mut record: R) -> Result<R, Error<S::Error>> {
        validation::validate(&*self.store, &record).await?;
        self.hooks
            .before_save(&mut record)
            .await
            .map_err(|e| Error::hook("before_save", e))?;

        if R::DELETED_AT.is_some() {
            let stored = self.by_id(record.id(), Visibility::WithDestroyed).await?;
            if let Some(stored) = stored {
                record.set_deleted_at(stored.deleted_at());
            }
        }

        let saved = self.store.update(&record).await.map_err(Error::Store)?;
        tracing::debug!(table = R::TABLE, id = ?saved.id(), "saved record");

        self.hooks
            .after_save(&saved)
            .await
            .map_err(|e| Error::hook("after_save", e))?;
        Ok(saved)
    }

    /// Find a live record by id.
    pub async fn find(&self, id: &R::Id) -> Result<Option<R>, Error<S::Error>> {
        self.query().filter(id_condition::<R>(id)).first().await
    }

    /// All live records.
    pub async fn all(&self) -> Result<Vec<R>, Error<S::Error>> {
        self.query().all().await
    }

    /// Number of live records.
    pub async fn count(&self) -> Result<usize, Error<S::Error>> {
        self.query().count().await
    }

    /// Destroy a record.
    ///
    /// Runs `before_destroy`, cascades over dependent associations, then
    /// stamps `deleted_at` (paranoid types) or removes the row (plain
    /// types), and finally runs `after_destroy`. Paranoid types get the
    /// row re-read after stamping, so unsaved changes on `record` are not
    /// returned. Plain types get `record` back as passed in.
    ///
    /// # Errors
    ///
    /// A failed write is returned as [`Error::Store`]; it is never
    /// swallowed.
    pub async fn destroy(&self, record: &R) -> Result<R, Error<S::Error>> {
        self.hooks
            .before_destroy(record)
            .await
            .map_err(|e| Error::hook("before_destroy", e))?;

        for association in &self.associations {
            let affected = association
                .on_destroy(record)
                .await
                .map_err(|source| Error::Association {
                    association: association.name(),
                    source
                })?;
            if affected > 0 {
                tracing::info!(
                    table = R::TABLE,
                    id = ?record.id(),
                    association = association.name(),
                    affected,
                    "cascaded destroy"
                );
            }
        }

        let by_id = id_condition::<R>(record.id());
        let destroyed = if R::DELETED_AT.is_some() {
            let now = Utc::now();
            let affected = self
                .store
                .set_deleted_at(Some(&by_id), Some(now))
                .await
                .map_err(Error::Store)?;
            warn_if_untouched::<R>(affected, record.id(), "destroy");
            tracing::info!(table = R::TABLE, id = ?record.id(), "soft-deleted record");

            match self.by_id(record.id(), Visibility::WithDestroyed).await? {
                Some(stored) => stored,
                None => {
                    let mut stamped = record.clone();
                    stamped.set_deleted_at(Some(now));
                    stamped
                }
            }
        } else {
            let affected = self.store.delete(Some(&by_id)).await.map_err(Error::Store)?;
            warn_if_untouched::<R>(affected, record.id(), "destroy");
            tracing::info!(table = R::TABLE, id = ?record.id(), "deleted record");
            record.clone()
        };

        self.hooks
            .after_destroy(&destroyed)
            .await
            .map_err(|e| Error::hook("after_destroy", e))?;
        Ok(destroyed)
    }

    /// Destroy the live record with `id`.
    ///
    /// Returns `None` when no live record has that id; soft-deleted rows
    /// are not touched again.
    pub async fn destroy_by_id(&self, id: &R::Id) -> Result<Option<R>, Error<S::Error>> {
        match self.find(id).await? {
            Some(record) => self.destroy(&record).await.map(Some),
            None => Ok(None)
        }
    }

    /// Destroy every live record matching `condition` (all live records
    /// for `None`).
    pub async fn destroy_all(
        &self,
        condition: Option<Condition>
    ) -> Result<Vec<R>, Error<S::Error>> {
        match condition {
            Some(condition) => self.query().filter(condition).destroy_all().await,
            None => self.query().destroy_all().await
        }
    }

    /// Hard-delete every row matching `condition`, live or destroyed.
    ///
    /// Bypasses soft deletion, hooks and cascades. Returns the number of
    /// rows removed.
    pub async fn delete_all(&self, condition: Option<Condition>) -> Result<usize, Error<S::Error>> {
        match condition {
            Some(condition) => self.query().filter(condition).delete_all().await,
            None => self.query().delete_all().await
        }
    }

    /// Hard-delete the row with `id`, live or destroyed.
    pub async fn delete_by_id(&self, id: &R::Id) -> Result<bool, Error<S::Error>> {
        let removed = self
            .store
            .delete(Some(&id_condition::<R>(id)))
            .await
            .map_err(Error::Store)?;
        tracing::info!(table = R::TABLE, id = ?id, removed, "hard-deleted record");
        Ok(removed > 0)
    }

    async fn by_id(
        &self,
        id: &R::Id,
        visibility: Visibility
    ) -> Result<Option<R>, Error<S::Error>> {
        self.query()
            .filter(id_condition::<R>(id))
            .visibility(visibility)
            .first()
            .await
    }
}

impl<R: Paranoid, S: Store<R>> Repository<R, S> {
    /// Bring a soft-deleted record back into the default scope.
    pub async fn restore(&self, record: &R) -> Result<R, Error<S::Error>> {
        self.hooks
            .before_restore(record)
            .await
            .map_err(|e| Error::hook("before_restore", e))?;

        let affected = self
            .store
            .set_deleted_at(Some(&id_condition::<R>(record.id())), None)
            .await
            .map_err(Error::Store)?;
        warn_if_untouched::<R>(affected, record.id(), "restore");
        tracing::info!(table = R::TABLE, id = ?record.id(), "restored record");

        let restored = match self.by_id(record.id(), Visibility::WithDestroyed).await? {
            Some(stored) => stored,
            None => {
                let mut restored = record.clone();
                restored.set_deleted_at(None);
                restored
            }
        };

        self.hooks
            .after_restore(&restored)
            .await
            .map_err(|e| Error::hook("after_restore", e))?;
        Ok(restored)
    }

    /// Restore the soft-deleted record with `id`.
    ///
    /// Returns `None` when no soft-deleted record has that id.
    pub async fn restore_by_id(&self, id: &R::Id) -> Result<Option<R>, Error<S::Error>> {
        match self.find_only_destroyed(id).await? {
            Some(record) => self.restore(&record).await.map(Some),
            None => Ok(None)
        }
    }

    /// Find a record by id, live or soft-deleted.
    pub async fn find_with_destroyed(&self, id: &R::Id) -> Result<Option<R>, Error<S::Error>> {
        self.by_id(id, Visibility::WithDestroyed).await
    }

    /// Find a soft-deleted record by id.
    pub async fn find_only_destroyed(&self, id: &R::Id) -> Result<Option<R>, Error<S::Error>> {
        self.by_id(id, Visibility::OnlyDestroyed).await
    }

    /// All records, live and soft-deleted.
    pub async fn all_with_destroyed(&self) -> Result<Vec<R>, Error<S::Error>> {
        self.query().with_destroyed().all().await
    }

    /// All soft-deleted records.
    pub async fn all_only_destroyed(&self) -> Result<Vec<R>, Error<S::Error>> {
        self.query().only_destroyed().all().await
    }

    /// Number of records, live and soft-deleted.
    pub async fn count_with_destroyed(&self) -> Result<usize, Error<S::Error>> {
        self.query().with_destroyed().count().await
    }

    /// Number of soft-deleted records.
    pub async fn count_only_destroyed(&self) -> Result<usize, Error<S::Error>> {
        self.query().only_destroyed().count().await
    }
}

fn id_condition<R: Record>(id: &R::Id) -> Condition {
    Condition::Eq(R::ID_COLUMN, id.clone().into())
}

fn warn_if_untouched<R: Record>(affected: usize, id: &R::Id, operation: &'static str) {
    if affected == 0 {
        tracing::warn!(table = R::TABLE, id = ?id, operation, "no stored row matched");
    }
}
