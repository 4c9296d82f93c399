// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # paranoid
//!
//! Soft-delete records. One crate, all features. Re-exports:
//! - [`Model`] derive macro from `paranoid-derive-impl`
//! - All types from `paranoid-core` ([`Repository`], [`Scope`],
//!   [`MemoryStore`], ...)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use chrono::{DateTime, Utc};
//! use paranoid::{MemoryStore, Model, Repository};
//! use uuid::Uuid;
//!
//! #[derive(Debug, Clone, Model)]
//! #[model(soft_delete)]
//! pub struct Android {
//!     #[id]
//!     pub id: Uuid,
//!     #[unique]
//!     pub name: String,
//!     pub deleted_at: Option<DateTime<Utc>>,
//! }
//!
//! let androids = Repository::new(MemoryStore::<Android>::new());
//! let r2d2 = androids.create(Android { id: Uuid::now_v7(), name: "R2D2".into(), deleted_at: None }).await?;
//!
//! androids.destroy(&r2d2).await?;
//! assert_eq!(androids.count().await?, 0);
//! assert_eq!(androids.count_with_destroyed().await?, 1);
//! ```

pub use paranoid_core::*;
#[cfg(feature = "derive")]
#[cfg_attr(docsrs, doc(cfg(feature = "derive")))]
pub use paranoid_derive_impl::Model;
