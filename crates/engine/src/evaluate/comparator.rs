// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use lumen_type::{Class, TypeError, Value, return_error, value::number::compare};

/// Generic ordering used whenever two operands are not both numbers.
pub trait TypeComparator: Send + Sync {
	fn can_compare(&self, left: &Value, right: &Value) -> bool;

	/// Fails with [`TypeError::NotComparable`] when the values have no ordering.
	fn compare(&self, left: &Value, right: &Value) -> crate::Result<Ordering>;
}

/// The default comparator.
///
/// `Undefined` sorts before everything else. Numbers use the promotion
/// ladder with a total order on floats. Booleans, text and objects whose
/// class defines an ordering use their natural order.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardTypeComparator;

impl TypeComparator for StandardTypeComparator {
	fn can_compare(&self, left: &Value, right: &Value) -> bool {
		match (left, right) {
			(Value::Undefined, _) | (_, Value::Undefined) => true,
			(Value::Number(_), Value::Number(_)) => true,
			(Value::Boolean(_), Value::Boolean(_)) => true,
			(Value::Text(_), Value::Text(_)) => true,
			(Value::Object(l), Value::Object(r)) => Class::shares_ordering(l.class(), r.class()),
			_ => false,
		}
	}

	fn compare(&self, left: &Value, right: &Value) -> crate::Result<Ordering> {
		match (left, right) {
			(Value::Undefined, Value::Undefined) => Ok(Ordering::Equal),
			(Value::Undefined, _) => Ok(Ordering::Less),
			(_, Value::Undefined) => Ok(Ordering::Greater),
			(Value::Number(l), Value::Number(r)) => Ok(compare::total_cmp(l, r)),
			(Value::Boolean(l), Value::Boolean(r)) => Ok(l.cmp(r)),
			(Value::Text(l), Value::Text(r)) => Ok(l.cmp(r)),
			(Value::Object(l), Value::Object(r)) if l.class().is_ordered() => match l.compare(r.as_ref()) {
				Some(ordering) => Ok(ordering),
				None => return_error!(not_comparable(left, right)),
			},
			_ => return_error!(not_comparable(left, right)),
		}
	}
}

fn not_comparable(left: &Value, right: &Value) -> TypeError {
	TypeError::NotComparable {
		left: left.get_type(),
		right: right.get_type(),
	}
}
