// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use paranoid::{Model, Record, Value};
use uuid::Uuid;

#[derive(Debug, Clone, Model)]
#[model(table = "people")]
pub struct Person {
    #[id]
    pub id: Uuid,

    pub name: String,
}

fn main() {
    let luke = Person {
        id: Uuid::nil(),
        name: "Luke Skywalker".to_string(),
    };

    assert_eq!(Person::TABLE, "people");
    assert_eq!(Person::ID_COLUMN, "id");
    assert!(Person::UNIQUE.is_empty());
    assert_eq!(Person::DELETED_AT, None);
    assert_eq!(luke.id(), &Uuid::nil());
    assert_eq!(luke.get("name"), Some(Value::from("Luke Skywalker")));
    assert_eq!(luke.get("missing"), None);
    assert!(!luke.is_destroyed());
}
