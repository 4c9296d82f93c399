// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};
use paranoid::{Model, Paranoid, Record};
use uuid::Uuid;

#[derive(Debug, Clone, Model)]
#[model(soft_delete)]
pub struct Android {
    #[id]
    pub id: Uuid,

    #[unique]
    pub name: String,

    pub owner_id: Option<Uuid>,

    pub deleted_at: Option<DateTime<Utc>>,
}

fn assert_paranoid<T: Paranoid>() {}

fn main() {
    assert_paranoid::<Android>();
    assert_eq!(Android::TABLE, "androids");
    assert_eq!(Android::UNIQUE, &["name"]);
    assert_eq!(Android::DELETED_AT, Some("deleted_at"));

    let mut r2d2 = Android {
        id: Uuid::now_v7(),
        name: "R2D2".to_string(),
        owner_id: None,
        deleted_at: None,
    };
    assert!(!r2d2.is_destroyed());
    assert!(r2d2.get("owner_id").is_some_and(|v| v.is_null()));

    r2d2.set_deleted_at(Some(Utc::now()));
    assert!(r2d2.is_destroyed());
    assert!(r2d2.get("deleted_at").is_some_and(|v| !v.is_null()));
}
