// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Lifecycle hooks on a derived model.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use paranoid::{BoxError, Hooks, MemoryStore, Model, Repository};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Model)]
#[model(soft_delete)]
pub struct Android {
    #[id]
    pub id: Uuid,

    pub name: String,

    pub deleted_at: Option<DateTime<Utc>>
}

impl Android {
    fn new(name: &str) -> Self {
        Self {
            id:         Uuid::now_v7(),
            name:       name.to_string(),
            deleted_at: None
        }
    }
}

/// Records every hook call; refuses restores when `locked`.
#[derive(Clone, Default)]
struct Journal {
    calls:  Arc<Mutex<Vec<&'static str>>>,
    locked: bool
}

impl Journal {
    fn push(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Hooks<Android> for Journal {
    async fn after_save(&self, _android: &Android) -> Result<(), BoxError> {
        self.push("after_save");
        Ok(())
    }

    async fn after_destroy(&self, _android: &Android) -> Result<(), BoxError> {
        self.push("after_destroy");
        Ok(())
    }

    async fn before_restore(&self, _android: &Android) -> Result<(), BoxError> {
        if self.locked {
            return Err("restores are locked".into());
        }
        self.push("before_restore");
        Ok(())
    }

    async fn after_restore(&self, _android: &Android) -> Result<(), BoxError> {
        self.push("after_restore");
        Ok(())
    }
}

#[tokio::test]
async fn saving_a_destroyed_record_does_not_restore_it() {
    let journal = Journal::default();
    let androids = Repository::new(MemoryStore::new()).with_hooks(journal.clone());

    let r2d2 = androids.create(Android::new("R2D2")).await.unwrap();
    androids.destroy(&r2d2).await.unwrap();

    let mut stale = r2d2.clone();
    stale.name = "Artoo".to_string();
    let saved = androids.save(stale).await.unwrap();

    assert!(saved.deleted_at.is_some());
    assert_eq!(androids.count().await.unwrap(), 0);
    assert_eq!(androids.count_only_destroyed().await.unwrap(), 1);
    assert_eq!(journal.calls(), ["after_save", "after_destroy", "after_save"]);
}

#[tokio::test]
async fn restore_runs_restore_hooks() {
    let journal = Journal::default();
    let androids = Repository::new(MemoryStore::new()).with_hooks(journal.clone());

    let r2d2 = androids.create(Android::new("R2D2")).await.unwrap();
    let destroyed = androids.destroy(&r2d2).await.unwrap();
    let restored = androids.restore(&destroyed).await.unwrap();

    assert_eq!(restored.deleted_at, None);
    assert_eq!(androids.find(&r2d2.id).await.unwrap(), Some(restored));
    assert_eq!(
        journal.calls(),
        ["after_save", "after_destroy", "before_restore", "after_restore"]
    );
}

#[tokio::test]
async fn refused_restore_leaves_record_destroyed() {
    let journal = Journal {
        locked: true,
        ..Journal::default()
    };
    let androids = Repository::new(MemoryStore::new()).with_hooks(journal);

    let r2d2 = androids.create(Android::new("R2D2")).await.unwrap();
    let destroyed = androids.destroy(&r2d2).await.unwrap();

    assert!(androids.restore(&destroyed).await.unwrap_err().is_hook());
    assert_eq!(androids.count_only_destroyed().await.unwrap(), 1);
}
