// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Hand-written records shared by the unit tests.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{Paranoid, Record, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id:   Uuid,
    pub name: String
}

impl Person {
    pub fn new(name: &str) -> Self {
        Self {
            id:   Uuid::now_v7(),
            name: name.to_owned()
        }
    }
}

impl Record for Person {
    type Id = Uuid;

    const TABLE: &'static str = "people";

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn get(&self, column: &str) -> Option<Value> {
        match column {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.clone().into()),
            _ => None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Droid {
    pub id:         Uuid,
    pub name:       String,
    pub owner_id:   Option<Uuid>,
    pub deleted_at: Option<DateTime<Utc>>
}

impl Droid {
    pub fn new(name: &str) -> Self {
        Self {
            id:         Uuid::now_v7(),
            name:       name.to_owned(),
            owner_id:   None,
            deleted_at: None
        }
    }

    pub fn owned_by(name: &str, owner: &Person) -> Self {
        Self {
            owner_id: Some(owner.id),
            ..Self::new(name)
        }
    }
}

impl Record for Droid {
    type Id = Uuid;

    const TABLE: &'static str = "androids";
    const UNIQUE: &'static [&'static str] = &["name"];
    const DELETED_AT: Option<&'static str> = Some("deleted_at");

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn get(&self, column: &str) -> Option<Value> {
        match column {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.clone().into()),
            "owner_id" => Some(self.owner_id.into()),
            "deleted_at" => Some(self.deleted_at.into()),
            _ => None
        }
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn set_deleted_at(&mut self, at: Option<DateTime<Utc>>) {
        self.deleted_at = at;
    }
}

impl Paranoid for Droid {}
