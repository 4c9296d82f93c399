// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Predicate objects.
//!
//! A [`Condition`] is plain data describing a row filter. It is threaded
//! through every query a repository issues; the deleted-row predicate is
//! just another `Condition` that the repository adds when it builds the
//! final query, never a hidden toggle.
//!
//! Evaluation follows SQL three-valued logic: a comparison with `NULL` is
//! unknown, and a row matches only when the whole predicate is true.
//!
//! ```rust
//! use paranoid_core::Condition;
//!
//! let live_r2d2 = Condition::eq("name", "R2D2").and(Condition::is_null("deleted_at"));
//! assert_eq!(live_r2d2.to_string(), "(name = 'R2D2' AND deleted_at IS NULL)");
//! ```

use std::{cmp::Ordering, fmt};

use crate::{Record, Value};

/// Row predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `column = value`
    Eq(&'static str, Value),

    /// `column <> value`
    Ne(&'static str, Value),

    /// `column < value`
    Lt(&'static str, Value),

    /// `column <= value`
    Lte(&'static str, Value),

    /// `column > value`
    Gt(&'static str, Value),

    /// `column >= value`
    Gte(&'static str, Value),

    /// `column IN (values...)`
    In(&'static str, Vec<Value>),

    /// `column IS NULL`
    IsNull(&'static str),

    /// `column IS NOT NULL`
    IsNotNull(&'static str),

    /// Conjunction. Empty is always true.
    And(Vec<Condition>),

    /// Disjunction. Empty is never true.
    Or(Vec<Condition>),

    /// Negation.
    Not(Box<Condition>)
}

impl Condition {
    /// `column = value`
    pub fn eq(column: &'static str, value: impl Into<Value>) -> Self {
        Self::Eq(column, value.into())
    }

    /// `column <> value`
    pub fn ne(column: &'static str, value: impl Into<Value>) -> Self {
        Self::Ne(column, value.into())
    }

    /// `column < value`
    pub fn lt(column: &'static str, value: impl Into<Value>) -> Self {
        Self::Lt(column, value.into())
    }

    /// `column <= value`
    pub fn lte(column: &'static str, value: impl Into<Value>) -> Self {
        Self::Lte(column, value.into())
    }

    /// `column > value`
    pub fn gt(column: &'static str, value: impl Into<Value>) -> Self {
        Self::Gt(column, value.into())
    }

    /// `column >= value`
    pub fn gte(column: &'static str, value: impl Into<Value>) -> Self {
        Self::Gte(column, value.into())
    }

    /// `column IN (values...)`
    pub fn is_in<V: Into<Value>>(
        column: &'static str,
        values: impl IntoIterator<Item = V>
    ) -> Self {
        Self::In(column, values.into_iter().map(Into::into).collect())
    }

    /// `column IS NULL`
    pub const fn is_null(column: &'static str) -> Self {
        Self::IsNull(column)
    }

    /// `column IS NOT NULL`
    pub const fn is_not_null(column: &'static str) -> Self {
        Self::IsNotNull(column)
    }

    /// Predicate matching every row.
    pub const fn always() -> Self {
        Self::And(Vec::new())
    }

    /// Predicate matching no row.
    pub const fn never() -> Self {
        Self::Or(Vec::new())
    }

    /// Conjunction of `self` and `other`.
    ///
    /// Nested conjunctions are flattened so that chained scopes produce a
    /// single `AND` list.
    #[must_use]
    pub fn and(self, other: Condition) -> Self {
        let mut parts = match self {
            Self::And(parts) => parts,
            single => vec![single]
        };
        match other {
            Self::And(more) => parts.extend(more),
            single => parts.push(single)
        }
        Self::And(parts)
    }

    /// Disjunction of `self` and `other`.
    #[must_use]
    pub fn or(self, other: Condition) -> Self {
        let mut parts = match self {
            Self::Or(parts) => parts,
            single => vec![single]
        };
        match other {
            Self::Or(more) => parts.extend(more),
            single => parts.push(single)
        }
        Self::Or(parts)
    }

    /// Negation of `self`.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Conjunction of all conditions in `parts`.
    ///
    /// Returns `None` for an empty iterator and the condition itself for a
    /// single element.
    pub fn all(parts: impl IntoIterator<Item = Condition>) -> Option<Self> {
        let mut iter = parts.into_iter();
        let first = iter.next()?;
        Some(iter.fold(first, Self::and))
    }

    /// Check whether `record` satisfies this predicate.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.eval(record) == Some(true)
    }

    /// Three-valued evaluation: `None` means unknown.
    fn eval<R: Record>(&self, record: &R) -> Option<bool> {
        let column = |name: &str| record.get(name).unwrap_or(Value::Null);
        match self {
            Self::Eq(c, v) => column(c).compare(v).map(Ordering::is_eq),
            Self::Ne(c, v) => column(c).compare(v).map(Ordering::is_ne),
            Self::Lt(c, v) => column(c).compare(v).map(Ordering::is_lt),
            Self::Lte(c, v) => column(c).compare(v).map(Ordering::is_le),
            Self::Gt(c, v) => column(c).compare(v).map(Ordering::is_gt),
            Self::Gte(c, v) => column(c).compare(v).map(Ordering::is_ge),
            Self::In(c, values) => {
                let actual = column(c);
                let mut unknown = false;
                for v in values {
                    match actual.compare(v) {
                        Some(Ordering::Equal) => return Some(true),
                        Some(_) => {}
                        None => unknown = true
                    }
                }
                if unknown { None } else { Some(false) }
            }
            Self::IsNull(c) => Some(column(c).is_null()),
            Self::IsNotNull(c) => Some(!column(c).is_null()),
            Self::And(parts) => {
                let mut unknown = false;
                for part in parts {
                    match part.eval(record) {
                        Some(false) => return Some(false),
                        Some(true) => {}
                        None => unknown = true
                    }
                }
                if unknown { None } else { Some(true) }
            }
            Self::Or(parts) => {
                let mut unknown = false;
                for part in parts {
                    match part.eval(record) {
                        Some(true) => return Some(true),
                        Some(false) => {}
                        None => unknown = true
                    }
                }
                if unknown { None } else { Some(false) }
            }
            Self::Not(inner) => inner.eval(record).map(|b| !b)
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eq(c, v) => write!(f, "{c} = {v}"),
            Self::Ne(c, v) => write!(f, "{c} <> {v}"),
            Self::Lt(c, v) => write!(f, "{c} < {v}"),
            Self::Lte(c, v) => write!(f, "{c} <= {v}"),
            Self::Gt(c, v) => write!(f, "{c} > {v}"),
            Self::Gte(c, v) => write!(f, "{c} >= {v}"),
            Self::In(c, values) => {
                let list: Vec<String> = values.iter().map(ToString::to_string).collect();
                write!(f, "{c} IN ({})", list.join(", "))
            }
            Self::IsNull(c) => write!(f, "{c} IS NULL"),
            Self::IsNotNull(c) => write!(f, "{c} IS NOT NULL"),
            Self::And(parts) if parts.is_empty() => write!(f, "TRUE"),
            Self::Or(parts) if parts.is_empty() => write!(f, "FALSE"),
            Self::And(parts) => join(f, parts, " AND "),
            Self::Or(parts) => join(f, parts, " OR "),
            Self::Not(inner) => write!(f, "NOT ({inner})")
        }
    }
}

fn join(f: &mut fmt::Formatter<'_>, parts: &[Condition], sep: &str) -> fmt::Result {
    if let [single] = parts {
        return write!(f, "{single}");
    }
    let rendered: Vec<String> = parts.iter().map(ToString::to_string).collect();
    write!(f, "({})", rendered.join(sep))
}
