// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Named scopes, visibility modes and the final query handed to a store.
//!
//! # Composition
//!
//! ```text
//! Scope(filter, order) ─┐
//! Scope(filter, order) ─┼─► Query { filter: AND of all filters + visibility,
//! Visibility ───────────┘           order:  last scope that set one }
//! ```
//!
//! Scopes never carry the deleted-row predicate. It is added once, from the
//! [`Visibility`] requested at evaluation time, which keeps every chain of
//! scopes order-independent.

use std::fmt;

use crate::{Condition, Pagination, Paranoid, Record, SortDirection};

/// One ordering term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    /// Column to sort by.
    pub column: &'static str,

    /// Sort direction.
    pub direction: SortDirection
}

impl OrderBy {
    /// Ascending order on `column`.
    pub const fn asc(column: &'static str) -> Self {
        Self {
            column,
            direction: SortDirection::Asc
        }
    }

    /// Descending order on `column`.
    pub const fn desc(column: &'static str) -> Self {
        Self {
            column,
            direction: SortDirection::Desc
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.direction.as_sql())
    }
}

/// A reusable, chainable query fragment.
///
/// Declare named scopes as associated functions on the record type:
///
/// ```rust
/// use paranoid_core::{Condition, Scope, SortDirection};
///
/// struct Android;
///
/// impl Android {
///     fn ordered() -> Scope {
///         Scope::named("ordered").order_by("name", SortDirection::Desc)
///     }
///
///     fn r2d2() -> Scope {
///         Scope::named("r2d2").filter(Condition::eq("name", "R2D2"))
///     }
/// }
///
/// assert!(Android::ordered().order().is_some());
/// assert!(Android::r2d2().condition().is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    name:   Option<&'static str>,
    filter: Option<Condition>,
    order:  Option<Vec<OrderBy>>
}

impl Scope {
    /// Empty anonymous scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty scope carrying a name for log output.
    pub fn named(name: &'static str) -> Self {
        Self {
            name: Some(name),
            ..Self::default()
        }
    }

    /// Add a filter, combined by `AND` with any filter already present.
    #[must_use]
    pub fn filter(mut self, condition: Condition) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(existing) => existing.and(condition),
            None => condition
        });
        self
    }

    /// Append an ordering term to this scope's ordering clause.
    #[must_use]
    pub fn order_by(mut self, column: &'static str, direction: SortDirection) -> Self {
        self.order.get_or_insert_with(Vec::new).push(OrderBy {
            column,
            direction
        });
        self
    }

    /// Scope name, if declared with [`Scope::named`].
    pub const fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Filter of this scope.
    pub const fn condition(&self) -> Option<&Condition> {
        self.filter.as_ref()
    }

    /// Ordering clause of this scope.
    pub fn order(&self) -> Option<&[OrderBy]> {
        self.order.as_deref()
    }
}

/// Which rows a query sees with respect to soft deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    /// Only live rows (`deleted_at IS NULL`). The default scope.
    #[default]
    Live,

    /// Live and soft-deleted rows.
    WithDestroyed,

    /// Only soft-deleted rows (`deleted_at IS NOT NULL`).
    OnlyDestroyed
}

impl Visibility {
    /// Deleted-row predicate for record type `R`.
    ///
    /// Non-paranoid types have no destroyed rows: `Live` and
    /// `WithDestroyed` add nothing and `OnlyDestroyed` matches nothing.
    pub fn predicate<R: Record>(self) -> Option<Condition> {
        match (self, R::DELETED_AT) {
            (Self::WithDestroyed, _) | (Self::Live, None) => None,
            (Self::Live, Some(column)) => Some(Condition::is_null(column)),
            (Self::OnlyDestroyed, Some(column)) => Some(Condition::is_not_null(column)),
            (Self::OnlyDestroyed, None) => Some(Condition::never())
        }
    }

    /// Same as [`predicate`](Self::predicate), restricted to paranoid types.
    pub fn paranoid_predicate<R: Paranoid>(self) -> Option<Condition> {
        self.predicate::<R>()
    }
}

/// Fully resolved query handed to a [`Store`](crate::Store).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// Row filter, `None` selects every row.
    pub filter: Option<Condition>,

    /// Ordering, empty keeps the store's natural order.
    pub order: Vec<OrderBy>,

    /// Optional window over the ordered result.
    pub pagination: Option<Pagination>
}

impl Query {
    /// Query selecting every row.
    pub fn all() -> Self {
        Self::default()
    }

    /// Query selecting rows that match `condition`.
    pub fn filtered(condition: Condition) -> Self {
        Self {
            filter: Some(condition),
            ..Self::default()
        }
    }

    /// Build a query from a scope chain and a visibility.
    ///
    /// Filters are joined by `AND` together with the visibility predicate.
    /// The ordering of the last scope that declares one wins.
    pub fn compose<'a, R: Record>(
        scopes: impl IntoIterator<Item = &'a Scope>,
        visibility: Option<Visibility>
    ) -> Self {
        let mut filters = Vec::new();
        let mut order = None;
        for scope in scopes {
            if let Some(filter) = &scope.filter {
                filters.push(filter.clone());
            }
            if let Some(o) = &scope.order {
                order = Some(o.clone());
            }
        }
        if let Some(predicate) = visibility.and_then(Visibility::predicate::<R>) {
            filters.push(predicate);
        }

        Self {
            filter:     Condition::all(filters),
            order:      order.unwrap_or_default(),
            pagination: None
        }
    }

    /// Narrow this query by `condition`.
    #[must_use]
    pub fn and(mut self, condition: Condition) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(existing) => existing.and(condition),
            None => condition
        });
        self
    }

    /// Restrict this query to a page.
    #[must_use]
    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filter {
            Some(filter) => write!(f, "WHERE {filter}")?,
            None => write!(f, "WHERE TRUE")?
        }
        if !self.order.is_empty() {
            let terms: Vec<String> = self.order.iter().map(ToString::to_string).collect();
            write!(f, " ORDER BY {}", terms.join(", "))?;
        }
        if let Some(p) = self.pagination {
            write!(f, " LIMIT {} OFFSET {}", p.limit, p.offset)?;
        }
        Ok(())
    }
}
