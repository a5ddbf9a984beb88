// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod equal;
mod greater_than;

pub use equal::values_equal;
pub use greater_than::is_greater_than;
