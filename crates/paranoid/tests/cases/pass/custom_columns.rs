// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};
use paranoid::{Model, Record, Value};

#[derive(Debug, Clone, Model)]
#[model(table = "droid_registry", soft_delete)]
pub struct RegisteredDroid {
    #[id]
    #[column(name = "serial")]
    pub serial_number: i64,

    #[unique]
    #[column(name = "designation")]
    pub name: String,

    #[column(skip)]
    pub memory: Vec<u8>,

    #[deleted_at]
    #[column(name = "wiped_at")]
    pub wiped: Option<DateTime<Utc>>,
}

fn main() {
    assert_eq!(RegisteredDroid::TABLE, "droid_registry");
    assert_eq!(RegisteredDroid::ID_COLUMN, "serial");
    assert_eq!(RegisteredDroid::UNIQUE, &["designation"]);
    assert_eq!(RegisteredDroid::DELETED_AT, Some("wiped_at"));

    let droid = RegisteredDroid {
        serial_number: 7,
        name: "R5D4".to_string(),
        memory: vec![0; 4],
        wiped: None,
    };
    assert_eq!(droid.get("serial"), Some(Value::Int(7)));
    assert_eq!(droid.get("designation"), Some(Value::from("R5D4")));
    assert_eq!(droid.get("memory"), None);
    assert_eq!(droid.get("name"), None);
}
