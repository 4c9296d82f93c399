// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use paranoid::Model;

/// Model without an #[id] field should fail.
#[derive(Model)]
pub struct Droid {
    pub name: String
}

fn main() {}
