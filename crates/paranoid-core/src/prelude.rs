// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use paranoid_core::prelude::*;
//! ```

pub use crate::{
    Association, BoxError, Condition, Dependent, Error, HasMany, Hooks, MemoryStore, Pagination,
    Paranoid, Record, Repository, Scope, SortDirection, Store, Value, Visibility, async_trait
};
