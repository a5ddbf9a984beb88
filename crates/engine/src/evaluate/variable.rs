// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use lumen_type::{TypeError, Value, return_error};

use crate::{evaluate::EvaluationContext, expression::VariableExpression};

impl VariableExpression {
	pub(crate) fn evaluate(&self, ctx: &EvaluationContext) -> crate::Result<Value> {
		let Some(value) = ctx.variable(&self.name) else {
			return_error!(TypeError::VariableNotFound {
				name: self.name.clone(),
			});
		};
		self.observed.record(value.get_type());
		Ok(value.clone())
	}
}
