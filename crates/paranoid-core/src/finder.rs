// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Chainable queries.
//!
//! A [`Finder`] collects scopes and a visibility, and only turns them into
//! a [`Query`] when a terminal method runs. The deleted-row predicate is
//! therefore applied exactly once, however many scopes are chained and in
//! whatever order the visibility selector is called:
//!
//! ```rust,ignore
//! let gone = androids
//!     .scope(ordered())
//!     .scope(c3p0())
//!     .find_only_destroyed()
//!     .await?;
//! ```

use crate::{
    Condition, Error, Pagination, Paranoid, Query, Record, Repository, Scope, SortDirection,
    Store, Visibility
};

/// Query under construction against a [`Repository`].
#[derive(Debug)]
#[must_use = "a finder does nothing until a terminal method is awaited"]
pub struct Finder<'r, R: Record, S> {
    repo:       &'r Repository<R, S>,
    scopes:     Vec<Scope>,
    visibility: Option<Visibility>,
    pagination: Option<Pagination>
}

impl<'r, R: Record, S: Store<R>> Finder<'r, R, S> {
    pub(crate) const fn new(repo: &'r Repository<R, S>) -> Self {
        Self {
            repo,
            scopes: Vec::new(),
            visibility: None,
            pagination: None
        }
    }

    /// Chain a scope.
    pub fn scope(mut self, scope: Scope) -> Self {
        self.scopes.push(scope);
        self
    }

    /// Chain an ad-hoc filter.
    pub fn filter(self, condition: Condition) -> Self {
        self.scope(Scope::new().filter(condition))
    }

    /// Chain an ad-hoc ordering.
    ///
    /// Like any scope, it replaces the ordering of earlier scopes.
    pub fn order_by(self, column: &'static str, direction: SortDirection) -> Self {
        self.scope(Scope::new().order_by(column, direction))
    }

    /// Limit the rows returned by [`all`](Self::all).
    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub(crate) fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Compose the query a terminal method would run.
    ///
    /// Reads default to live rows.
    pub fn to_query(&self) -> Query {
        let visibility = self.visibility.unwrap_or_default();
        let query = Query::compose::<R>(&self.scopes, Some(visibility));
        match self.pagination {
            Some(pagination) => query.paginate(pagination),
            None => query
        }
    }

    /// All matching rows.
    pub async fn all(self) -> Result<Vec<R>, Error<S::Error>> {
        let query = self.to_query();
        tracing::debug!(table = R::TABLE, %query, "select");
        self.repo.store().select(&query).await.map_err(Error::Store)
    }

    /// First matching row.
    pub async fn first(self) -> Result<Option<R>, Error<S::Error>> {
        let offset = self.pagination.map_or(0, |p| p.offset);
        let rows = self.paginate(Pagination::new(1, offset)).all().await?;
        Ok(rows.into_iter().next())
    }

    /// Number of matching rows, ignoring pagination.
    pub async fn count(self) -> Result<usize, Error<S::Error>> {
        let query = self.to_query();
        tracing::debug!(table = R::TABLE, %query, "count");
        self.repo.store().count(&query).await.map_err(Error::Store)
    }

    /// Destroy every matching live row.
    ///
    /// Visibility selectors are ignored: rows already soft-deleted are never
    /// destroyed a second time. Returns the destroyed records.
    pub async fn destroy_all(mut self) -> Result<Vec<R>, Error<S::Error>> {
        self.visibility = Some(Visibility::Live);
        self.pagination = None;
        let repo = self.repo;
        let targets = self.all().await?;

        let mut destroyed = Vec::with_capacity(targets.len());
        for record in &targets {
            destroyed.push(repo.destroy(record).await?);
        }
        tracing::info!(table = R::TABLE, count = destroyed.len(), "destroyed matching records");
        Ok(destroyed)
    }

    /// Hard-delete every matching row.
    ///
    /// No deleted-row predicate is added unless a visibility selector was
    /// chained explicitly. Pagination is ignored. Returns the number of
    /// rows removed.
    pub async fn delete_all(self) -> Result<usize, Error<S::Error>> {
        let query = Query::compose::<R>(&self.scopes, self.visibility);
        let removed = self
            .repo
            .store()
            .delete(query.filter.as_ref())
            .await
            .map_err(Error::Store)?;
        tracing::info!(table = R::TABLE, %query, removed, "hard-deleted matching records");
        Ok(removed)
    }
}

impl<R: Paranoid, S: Store<R>> Finder<'_, R, S> {
    /// Restrict to live rows (the default for reads).
    pub fn live(self) -> Self {
        self.visibility(Visibility::Live)
    }

    /// Include soft-deleted rows.
    pub fn with_destroyed(self) -> Self {
        self.visibility(Visibility::WithDestroyed)
    }

    /// Restrict to soft-deleted rows.
    pub fn only_destroyed(self) -> Self {
        self.visibility(Visibility::OnlyDestroyed)
    }

    /// All matching rows, live and soft-deleted.
    pub async fn find_with_destroyed(self) -> Result<Vec<R>, Error<S::Error>> {
        self.with_destroyed().all().await
    }

    /// All matching soft-deleted rows.
    pub async fn find_only_destroyed(self) -> Result<Vec<R>, Error<S::Error>> {
        self.only_destroyed().all().await
    }

    /// Number of matching rows, live and soft-deleted.
    pub async fn count_with_destroyed(self) -> Result<usize, Error<S::Error>> {
        self.with_destroyed().count().await
    }

    /// Number of matching soft-deleted rows.
    pub async fn count_only_destroyed(self) -> Result<usize, Error<S::Error>> {
        self.only_destroyed().count().await
    }
}
