// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Validation run on create and save.
//!
//! Field rules come from [`Record::validate`]; uniqueness rules from
//! [`Record::UNIQUE`]. Uniqueness is checked over the whole table: a
//! soft-deleted row still occupies its value, so reusing the name of a
//! destroyed record fails until that row is hard-deleted.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::{Condition, Error, Query, Record, Scope, Store, Visibility};

/// Validation error code for uniqueness collisions.
pub const UNIQUE_CODE: &str = "unique";

/// Run field rules and uniqueness rules for `record`.
pub(crate) async fn validate<R, S>(store: &S, record: &R) -> Result<(), Error<S::Error>>
where
    R: Record,
    S: Store<R>
{
    let mut errors = match record.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors
    };

    for &column in R::UNIQUE {
        let Some(value) = record.get(column).filter(|v| !v.is_null()) else {
            continue;
        };
        let filter = Condition::Eq(column, value.clone())
            .and(Condition::Ne(R::ID_COLUMN, record.id().clone().into()));
        // no deleted-row predicate: destroyed rows keep their value taken
        let query = Query::compose::<R>(
            &[Scope::new().filter(filter)],
            Some(Visibility::WithDestroyed)
        );
        let taken = store.count(&query).await.map_err(Error::Store)?;
        if taken > 0 {
            tracing::debug!(table = R::TABLE, column, %value, "uniqueness collision");
            let mut error = ValidationError::new(UNIQUE_CODE);
            error.message = Some(Cow::Owned(format!("{column} has already been taken")));
            errors.add(column, error);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(errors))
    }
}
