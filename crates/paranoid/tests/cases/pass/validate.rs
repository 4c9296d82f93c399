// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};
use paranoid::{Model, Record};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Model, Validate)]
#[model(table = "androids", soft_delete, validate)]
pub struct Android {
    #[id]
    pub id: Uuid,

    #[unique]
    #[validate(length(min = 1, max = 16))]
    pub name: String,

    pub deleted_at: Option<DateTime<Utc>>,
}

fn main() {
    let nameless = Android {
        id: Uuid::nil(),
        name: String::new(),
        deleted_at: None,
    };
    let errors = Record::validate(&nameless).unwrap_err();
    assert!(errors.field_errors().contains_key("name"));

    let r2d2 = Android {
        name: "R2D2".to_string(),
        ..nameless
    };
    assert!(Record::validate(&r2d2).is_ok());
}
