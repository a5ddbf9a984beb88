// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use lumen_type::Value;

use crate::expression::ConstantExpression;

impl ConstantExpression {
	pub(crate) fn evaluate(&self) -> Value {
		self.value.clone()
	}
}
