// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use paranoid::Model;

/// soft_delete without a deletion timestamp field should fail.
#[derive(Model)]
#[model(soft_delete)]
pub struct Droid {
    #[id]
    pub id: u64,

    pub name: String
}

fn main() {}
