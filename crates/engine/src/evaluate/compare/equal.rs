// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use lumen_type::{Class, Value, value::number::compare};
use tracing::instrument;

use crate::{
	evaluate::{EvaluationContext, TypeComparator},
	expression::{EqualExpression, NotEqualExpression},
};

/// Whether `left` and `right` are equal. Never fails: a pair the comparator
/// cannot order is simply unequal.
pub fn values_equal(comparator: &dyn TypeComparator, left: &Value, right: &Value) -> bool {
	match (left, right) {
		(Value::Number(l), Value::Number(r)) => return compare::is_equal(l, r),
		(Value::Text(l), Value::Text(r)) => return l.as_str() == r.as_str(),
		(Value::Boolean(l), Value::Boolean(r)) => return l == r,
		_ => {}
	}

	if left.structural_eq(right) {
		return true;
	}

	if let (Some(l), Some(r)) = (left.class(), right.class())
		&& Class::shares_ordering(l, r)
	{
		return comparator.compare(left, right).is_ok_and(|ordering| ordering == Ordering::Equal);
	}

	false
}

impl EqualExpression {
	#[instrument(name = "evaluate::equal", level = "trace", skip_all)]
	pub(crate) fn evaluate(&self, ctx: &EvaluationContext) -> crate::Result<Value> {
		let left = self.left.evaluate(ctx)?;
		let right = self.right.evaluate(ctx)?;
		self.operands.record(&left, &right);
		Ok(Value::Boolean(values_equal(ctx.comparator(), &left, &right)))
	}
}

impl NotEqualExpression {
	#[instrument(name = "evaluate::not_equal", level = "trace", skip_all)]
	pub(crate) fn evaluate(&self, ctx: &EvaluationContext) -> crate::Result<Value> {
		let left = self.left.evaluate(ctx)?;
		let right = self.right.evaluate(ctx)?;
		self.operands.record(&left, &right);
		Ok(Value::Boolean(!values_equal(ctx.comparator(), &left, &right)))
	}
}
