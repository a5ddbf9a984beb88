// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod get;

pub use get::GetType;

/// The runtime type tag of a [`Value`](crate::Value).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	/// Value is not defined
	Undefined,
	/// A boolean: true or false.
	Boolean,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// An arbitrary-precision signed integer
	Int,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// An arbitrary-precision decimal
	Decimal,
	/// A number of a representation the engine does not recognize
	Number,
	/// UTF-8 text
	Utf8,
	/// An opaque host value
	Object,
}

impl Type {
	/// Compact tag used to record the operand types an operator has seen.
	pub fn descriptor(&self) -> &'static str {
		match self {
			Type::Undefined => "V",
			Type::Boolean => "Z",
			Type::Int1 => "B",
			Type::Int2 => "S",
			Type::Int4 => "I",
			Type::Int8 => "J",
			Type::Int => "N",
			Type::Float4 => "F",
			Type::Float8 => "D",
			Type::Decimal => "M",
			Type::Number => "#",
			Type::Utf8 => "T",
			Type::Object => "O",
		}
	}

	/// Types a compiled comparison can operate on directly.
	pub fn is_primitive_number(&self) -> bool {
		matches!(self, Type::Int4 | Type::Int8 | Type::Float4 | Type::Float8)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Undefined => f.write_str("Undefined"),
			Type::Boolean => f.write_str("Boolean"),
			Type::Int1 => f.write_str("Int1"),
			Type::Int2 => f.write_str("Int2"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Int => f.write_str("Int"),
			Type::Float4 => f.write_str("Float4"),
			Type::Float8 => f.write_str("Float8"),
			Type::Decimal => f.write_str("Decimal"),
			Type::Number => f.write_str("Number"),
			Type::Utf8 => f.write_str("Utf8"),
			Type::Object => f.write_str("Object"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_descriptors_are_unique() {
		let all = [
			Type::Undefined,
			Type::Boolean,
			Type::Int1,
			Type::Int2,
			Type::Int4,
			Type::Int8,
			Type::Int,
			Type::Float4,
			Type::Float8,
			Type::Decimal,
			Type::Number,
			Type::Utf8,
			Type::Object,
		];
		for (i, l) in all.iter().enumerate() {
			for r in &all[i + 1..] {
				assert_ne!(l.descriptor(), r.descriptor(), "{} and {}", l, r);
			}
		}
	}

	#[test]
	fn test_primitive_numbers() {
		assert!(Type::Int4.is_primitive_number());
		assert!(Type::Float8.is_primitive_number());
		assert!(!Type::Int2.is_primitive_number());
		assert!(!Type::Decimal.is_primitive_number());
	}

	#[test]
	fn test_serde() {
		let json = serde_json::to_string(&Type::Float8).unwrap();
		assert_eq!(json, "\"Float8\"");
		let back: Type = serde_json::from_str(&json).unwrap();
		assert_eq!(back, Type::Float8);
	}
}
