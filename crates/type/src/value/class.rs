// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	any::Any,
	cmp::Ordering,
	fmt::{Debug, Formatter},
	ptr,
};

/// A node in the single-inheritance type hierarchy used to decide whether two
/// values share an ancestor that defines a total ordering.
pub struct Class {
	name: &'static str,
	parent: Option<&'static Class>,
	ordered: bool,
}

pub static OBJECT: Class = Class::new("Object", None, false);
pub static BOOLEAN: Class = Class::new("Boolean", Some(&OBJECT), true);
pub static UTF8: Class = Class::new("Utf8", Some(&OBJECT), true);

pub static NUMBER: Class = Class::new("Number", Some(&OBJECT), false);
pub static INT1: Class = Class::new("Int1", Some(&NUMBER), true);
pub static INT2: Class = Class::new("Int2", Some(&NUMBER), true);
pub static INT4: Class = Class::new("Int4", Some(&NUMBER), true);
pub static INT8: Class = Class::new("Int8", Some(&NUMBER), true);
pub static INT: Class = Class::new("Int", Some(&NUMBER), true);
pub static FLOAT4: Class = Class::new("Float4", Some(&NUMBER), true);
pub static FLOAT8: Class = Class::new("Float8", Some(&NUMBER), true);
pub static DECIMAL: Class = Class::new("Decimal", Some(&NUMBER), true);

impl Class {
	/// `ordered` marks a class whose instances define a total ordering among
	/// themselves; subclasses inherit it.
	pub const fn new(name: &'static str, parent: Option<&'static Class>, ordered: bool) -> Self {
		Self {
			name,
			parent,
			ordered,
		}
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Whether `self` is `other` or one of its descendants.
	pub fn is_a(&self, other: &Class) -> bool {
		let mut current = Some(self);
		while let Some(class) = current {
			if class == other {
				return true;
			}
			current = class.parent;
		}
		false
	}

	pub fn is_ordered(&self) -> bool {
		self.ordered || self.parent.is_some_and(Class::is_ordered)
	}

	/// The nearest class both `left` and `right` descend from. Returns `None`
	/// when the only shared ancestor is [`OBJECT`].
	pub fn common_ancestor(left: &'static Class, right: &'static Class) -> Option<&'static Class> {
		if right.is_a(left) {
			return Some(left);
		}
		if left.is_a(right) {
			return Some(right);
		}

		let mut ancestor = left;
		loop {
			ancestor = ancestor.parent?;
			if ancestor == &OBJECT {
				return None;
			}
			if right.is_a(ancestor) {
				return Some(ancestor);
			}
		}
	}

	/// Whether instances of `left` and `right` can be ordered against each
	/// other: both classes are ordered and so is their nearest common
	/// ancestor below [`OBJECT`].
	pub fn shares_ordering(left: &'static Class, right: &'static Class) -> bool {
		left.is_ordered()
			&& right.is_ordered()
			&& Class::common_ancestor(left, right).is_some_and(Class::is_ordered)
	}
}

impl PartialEq for Class {
	fn eq(&self, other: &Self) -> bool {
		ptr::eq(self, other)
	}
}

impl Eq for Class {}

impl Debug for Class {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name)
	}
}

/// A host value the engine treats as opaque.
pub trait Object: Debug + Send + Sync {
	fn class(&self) -> &'static Class;

	fn as_any(&self) -> &dyn Any;

	/// Content equality with another object. Identity is checked separately.
	fn equals(&self, _other: &dyn Object) -> bool {
		false
	}

	/// Natural ordering against another object, `None` when the two cannot be
	/// ordered against each other.
	fn compare(&self, _other: &dyn Object) -> Option<Ordering> {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	static TEMPORAL: Class = Class::new("Temporal", Some(&OBJECT), true);
	static DATE: Class = Class::new("Date", Some(&TEMPORAL), false);
	static TIMESTAMP: Class = Class::new("Timestamp", Some(&DATE), false);
	static SHAPE: Class = Class::new("Shape", Some(&OBJECT), false);
	static CIRCLE: Class = Class::new("Circle", Some(&SHAPE), false);
	static SQUARE: Class = Class::new("Square", Some(&SHAPE), false);

	#[test]
	fn test_is_a() {
		assert!(TIMESTAMP.is_a(&DATE));
		assert!(TIMESTAMP.is_a(&OBJECT));
		assert!(!DATE.is_a(&TIMESTAMP));
		assert!(INT4.is_a(&NUMBER));
	}

	#[test]
	fn test_is_ordered_inherited() {
		assert!(TIMESTAMP.is_ordered());
		assert!(!CIRCLE.is_ordered());
		assert!(!NUMBER.is_ordered());
		assert!(INT8.is_ordered());
	}

	#[test]
	fn test_common_ancestor_direct() {
		assert_eq!(Class::common_ancestor(&DATE, &TIMESTAMP), Some(&DATE));
		assert_eq!(Class::common_ancestor(&TIMESTAMP, &DATE), Some(&DATE));
		assert_eq!(Class::common_ancestor(&DATE, &DATE), Some(&DATE));
	}

	#[test]
	fn test_common_ancestor_sibling() {
		assert_eq!(Class::common_ancestor(&CIRCLE, &SQUARE), Some(&SHAPE));
		assert_eq!(Class::common_ancestor(&INT4, &FLOAT8), Some(&NUMBER));
	}

	#[test]
	fn test_shares_ordering() {
		static DAY: Class = Class::new("Day", Some(&DATE), false);
		assert!(Class::shares_ordering(&DAY, &TIMESTAMP));
		assert!(Class::shares_ordering(&TIMESTAMP, &DAY));
		assert!(!Class::shares_ordering(&CIRCLE, &SQUARE));
		assert!(!Class::shares_ordering(&INT4, &FLOAT8));
		assert!(!Class::shares_ordering(&BOOLEAN, &UTF8));
	}

	#[test]
	fn test_common_ancestor_object_is_none() {
		assert_eq!(Class::common_ancestor(&CIRCLE, &DATE), None);
		assert_eq!(Class::common_ancestor(&BOOLEAN, &UTF8), None);
	}
}
