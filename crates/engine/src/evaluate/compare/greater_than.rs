// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use lumen_type::Value;
use tracing::{instrument, trace};

use crate::{
	evaluate::{EvaluationContext, TypeComparator},
	expression::GreaterThanExpression,
};

/// `left > right`.
///
/// Two numbers are promoted to their shared tier and compared there; a NaN on
/// either side makes the result `false`. Two texts are compared by content
/// regardless of representation. Everything else is handed to `comparator`,
/// whose error is returned unchanged.
pub fn is_greater_than(left: &Value, right: &Value, comparator: &dyn TypeComparator) -> crate::Result<bool> {
	match (left, right) {
		(Value::Number(l), Value::Number(r)) => {
			let promoted = l.promote(r);
			if promoted.tier().is_none() {
				trace!(left = %l, right = %r, "comparing numbers without a shared tier as f64");
			}
			Ok(promoted.partial_cmp() == Some(Ordering::Greater))
		}
		(Value::Text(l), Value::Text(r)) => {
			let l = Value::Text(l.canonical());
			let r = Value::Text(r.canonical());
			Ok(comparator.compare(&l, &r)? == Ordering::Greater)
		}
		_ => {
			trace!(left = %left.get_type(), right = %right.get_type(), "ordering through comparator");
			Ok(comparator.compare(left, right)? == Ordering::Greater)
		}
	}
}

impl GreaterThanExpression {
	#[instrument(name = "evaluate::greater_than", level = "trace", skip_all)]
	pub(crate) fn evaluate(&self, ctx: &EvaluationContext) -> crate::Result<Value> {
		let left = self.left.evaluate(ctx)?;
		let right = self.right.evaluate(ctx)?;
		self.operands.record(&left, &right);
		Ok(Value::Boolean(is_greater_than(&left, &right, ctx.comparator())?))
	}
}
