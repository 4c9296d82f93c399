// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use paranoid::Model;

/// A unique column must stay readable.
#[derive(Model)]
pub struct Droid {
    #[id]
    pub id: u64,

    #[unique]
    #[column(skip)]
    pub name: String
}

fn main() {}
