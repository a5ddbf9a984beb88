// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod comparator;
pub mod compare;
pub mod compiled;
mod constant;
mod context;
mod variable;

pub use comparator::{StandardTypeComparator, TypeComparator};
pub use context::EvaluationContext;
use lumen_type::Value;

use crate::expression::Expression;

impl Expression {
	/// Interpret this expression against `ctx`.
	pub fn evaluate(&self, ctx: &EvaluationContext) -> crate::Result<Value> {
		match self {
			Expression::Constant(e) => Ok(e.evaluate()),
			Expression::Variable(e) => e.evaluate(ctx),
			Expression::GreaterThan(e) => e.evaluate(ctx),
			Expression::Equal(e) => e.evaluate(ctx),
			Expression::NotEqual(e) => e.evaluate(ctx),
		}
	}
}
