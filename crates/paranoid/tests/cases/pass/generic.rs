// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use paranoid::{Model, Record, Value};

#[derive(Debug, Clone, Model)]
#[model(table = "tags")]
pub struct Tag<T>
where
    T: Clone + Send + Sync + Into<Value> + 'static,
{
    #[id]
    pub id: i32,

    pub label: T,
}

fn main() {
    let tag = Tag {
        id: 1,
        label: "rebel".to_string(),
    };
    assert_eq!(<Tag<String> as Record>::TABLE, "tags");
    assert_eq!(tag.get("label"), Some(Value::from("rebel")));
    assert_eq!(tag.get("id"), Some(Value::Int(1)));
}
