// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Soft Delete Walkthrough with paranoid
//!
//! Demonstrates:
//! - `#[model(soft_delete)]` makes `destroy` stamp `deleted_at`
//! - default queries hide destroyed rows
//! - `with_destroyed` / `only_destroyed` reach them again
//! - `restore` brings a row back
//! - `delete_all` removes rows for real
//! - `Dependent::Destroy` cascades from a plain owner to paranoid children
//!
//! Run with `RUST_LOG=paranoid_core=debug` to see every query.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use paranoid::{
    BoxError, Condition, Dependent, HasMany, Hooks, MemoryStore, Model, Repository, Scope,
    SortDirection
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

// ============================================================================
// Models
// ============================================================================

/// Owner of androids. Not paranoid: destroying a person removes the row.
#[derive(Debug, Clone, Model)]
#[model(table = "people")]
pub struct Person {
    #[id]
    pub id: Uuid,

    pub name: String
}

/// Android with soft delete support.
#[derive(Debug, Clone, Model)]
#[model(soft_delete)]
pub struct Android {
    #[id]
    pub id: Uuid,

    #[unique]
    pub name: String,

    pub owner_id: Option<Uuid>,

    /// Required for soft_delete - stores deletion timestamp.
    pub deleted_at: Option<DateTime<Utc>>
}

impl Android {
    fn new(name: &str, owner: &Person) -> Self {
        Self {
            id:         Uuid::now_v7(),
            name:       name.to_string(),
            owner_id:   Some(owner.id),
            deleted_at: None
        }
    }

    fn ordered() -> Scope {
        Scope::named("ordered").order_by("name", SortDirection::Desc)
    }

    fn named(name: &'static str) -> Scope {
        Scope::named(name).filter(Condition::eq("name", name))
    }
}

// ============================================================================
// Hooks
// ============================================================================

/// Logs android lifecycle transitions.
struct Audit;

#[async_trait]
impl Hooks<Android> for Audit {
    async fn after_destroy(&self, android: &Android) -> Result<(), BoxError> {
        tracing::info!(name = %android.name, at = ?android.deleted_at, "android retired");
        Ok(())
    }

    async fn after_restore(&self, android: &Android) -> Result<(), BoxError> {
        tracing::info!(name = %android.name, "android back in service");
        Ok(())
    }
}

fn names(androids: &[Android]) -> Vec<&str> {
    androids.iter().map(|a| a.name.as_str()).collect()
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "demo_star_wars=info,paranoid_core=info".into())
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let androids = Repository::new(MemoryStore::<Android>::new()).with_hooks(Audit);
    let people = Repository::new(MemoryStore::<Person>::new()).has_many(
        HasMany::new(androids.clone(), "owner_id").dependent(Dependent::Destroy)
    );

    let luke = people
        .create(Person {
            id:   Uuid::now_v7(),
            name: "Luke Skywalker".to_string()
        })
        .await?;
    let r2d2 = androids.create(Android::new("R2D2", &luke)).await?;
    let c3p0 = androids.create(Android::new("C3P0", &luke)).await?;

    // Soft delete
    let r2d2 = androids.destroy(&r2d2).await?;
    tracing::info!(
        live = androids.count().await?,
        with_destroyed = androids.count_with_destroyed().await?,
        "after destroying R2D2"
    );

    // Uniqueness still sees the destroyed row
    if let Err(err) = androids.create(Android::new("R2D2", &luke)).await {
        tracing::info!(%err, "R2D2 name is still taken");
    }

    // Restore
    androids.restore(&r2d2).await?;

    // Cascade from the owner
    people.destroy(&luke).await?;
    let destroyed = androids.scope(Android::ordered()).find_only_destroyed().await?;
    tracing::info!(destroyed = ?names(&destroyed), "after destroying Luke");

    let c3p0_only = androids
        .scope(Android::named("C3P0"))
        .scope(Android::ordered())
        .find_only_destroyed()
        .await?;
    tracing::info!(found = ?names(&c3p0_only), id = %c3p0.id, "scoped lookup");

    // Hard delete
    let removed = androids.delete_all(None).await?;
    tracing::info!(
        removed,
        with_destroyed = androids.count_with_destroyed().await?,
        "after delete_all"
    );

    Ok(())
}
