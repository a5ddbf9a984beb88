// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	sync::Arc,
};

pub mod class;
mod decimal;
mod int;
pub mod number;
pub mod text;
mod r#type;

pub use class::{Class, Object};
pub use decimal::Decimal;
pub use int::Int;
pub use number::{CustomNumber, Number, Promoted, Tier};
pub use text::Text;
pub use r#type::{GetType, Type};

/// A dynamically-typed value flowing through expression evaluation.
#[derive(Clone, Debug)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// Text in any of its representations
	Text(Text),
	/// A number of any recognized or custom representation
	Number(Number),
	/// An opaque host value
	Object(Arc<dyn Object>),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Text(Text::Owned(v.into()))
	}

	pub fn int1(v: impl Into<i8>) -> Self {
		Value::Number(Number::Int1(v.into()))
	}

	pub fn int2(v: impl Into<i16>) -> Self {
		Value::Number(Number::Int2(v.into()))
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Value::Number(Number::Int4(v.into()))
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Number(Number::Int8(v.into()))
	}

	pub fn int(v: impl Into<Int>) -> Self {
		Value::Number(Number::Int(v.into()))
	}

	pub fn float4(v: impl Into<f32>) -> Self {
		Value::Number(Number::Float4(v.into()))
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		Value::Number(Number::Float8(v.into()))
	}

	pub fn decimal(v: impl Into<Decimal>) -> Self {
		Value::Number(Number::Decimal(v.into()))
	}

	pub fn custom(v: impl CustomNumber + 'static) -> Self {
		Value::Number(Number::Custom(Arc::new(v)))
	}

	pub fn object(v: impl Object + 'static) -> Self {
		Value::Object(Arc::new(v))
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Text(_) => Type::Utf8,
			Value::Number(n) => n.get_type(),
			Value::Object(_) => Type::Object,
		}
	}

	/// The class this value is an instance of. `Undefined` has none.
	pub fn class(&self) -> Option<&'static Class> {
		match self {
			Value::Undefined => None,
			Value::Boolean(_) => Some(&class::BOOLEAN),
			Value::Text(_) => Some(&class::UTF8),
			Value::Number(n) => Some(n.class()),
			Value::Object(o) => Some(o.class()),
		}
	}

	/// Null-safe structural equality on the raw values, without any numeric
	/// promotion: `Undefined` only equals `Undefined`, numbers only equal
	/// numbers of the same representation.
	pub fn structural_eq(&self, other: &Value) -> bool {
		match (self, other) {
			(Value::Undefined, Value::Undefined) => true,
			(Value::Boolean(l), Value::Boolean(r)) => l == r,
			(Value::Text(l), Value::Text(r)) => l == r,
			(Value::Number(l), Value::Number(r)) => l.identical(r),
			(Value::Object(l), Value::Object(r)) => Arc::ptr_eq(l, r) || l.equals(r.as_ref()),
			_ => false,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Text(v) => Display::fmt(v, f),
			Value::Number(v) => Display::fmt(v, f),
			Value::Object(v) => write!(f, "{}({:?})", v.class().name(), v),
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Boolean(v)
	}
}

impl From<i8> for Value {
	fn from(v: i8) -> Self {
		Value::int1(v)
	}
}

impl From<i16> for Value {
	fn from(v: i16) -> Self {
		Value::int2(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::int4(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::int8(v)
	}
}

impl From<f32> for Value {
	fn from(v: f32) -> Self {
		Value::float4(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::float8(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::utf8(v)
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::utf8(v)
	}
}

impl From<Number> for Value {
	fn from(v: Number) -> Self {
		Value::Number(v)
	}
}
