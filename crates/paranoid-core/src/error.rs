// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error type for repository operations.
//!
//! Only failures are errors. A lookup that matches nothing under the
//! requested visibility returns `None` or an empty `Vec`; callers switch
//! visibility to tell "absent" from "soft-deleted".

use validator::ValidationErrors;

/// Boxed error used by hooks and cross-store cascades.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for [`Repository`](crate::Repository) operations.
///
/// `E` is the error type of the underlying [`Store`](crate::Store).
#[derive(Debug, thiserror::Error)]
pub enum Error<E>
where
    E: std::error::Error + Send + Sync + 'static
{
    /// The record failed a validation rule on create or save.
    ///
    /// Uniqueness rules see soft-deleted rows, so a collision with a
    /// destroyed record is reported here as well.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// The store rejected a read or write.
    #[error("store error: {0}")]
    Store(#[source] E),

    /// A lifecycle hook aborted the operation.
    #[error("hook `{hook}` failed: {source}")]
    Hook {
        /// Hook name, e.g. `before_destroy`.
        hook:   &'static str,
        /// Error returned by the hook.
        #[source]
        source: BoxError
    },

    /// Cascading over a dependent association failed.
    #[error("association `{association}` failed: {source}")]
    Association {
        /// Association name.
        association: &'static str,
        /// Error raised while cascading.
        #[source]
        source:      BoxError
    }
}

impl<E> Error<E>
where
    E: std::error::Error + Send + Sync + 'static
{
    /// Check if this is a validation error.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a store error.
    pub const fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }

    /// Check if this is a hook error.
    pub const fn is_hook(&self) -> bool {
        matches!(self, Self::Hook { .. })
    }

    /// Check if this is an association error.
    pub const fn is_association(&self) -> bool {
        matches!(self, Self::Association { .. })
    }

    /// Validation errors, if this is a validation failure.
    pub const fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None
        }
    }

    pub(crate) fn hook(hook: &'static str, source: BoxError) -> Self {
        Self::Hook {
            hook,
            source
        }
    }
}
