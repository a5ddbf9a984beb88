// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	sync::Arc,
};

pub mod compare;
mod convert;
mod custom;
mod promote;
mod tier;

pub use custom::CustomNumber;
pub use promote::Promoted;
pub use tier::Tier;

use crate::value::{Class, Decimal, Int, Type, class};

/// A numeric value. Every recognized representation has its own variant;
/// anything else is carried as [`Number::Custom`].
#[derive(Clone, Debug)]
pub enum Number {
	Int1(i8),
	Int2(i16),
	Int4(i32),
	Int8(i64),
	Int(Int),
	Float4(f32),
	Float8(f64),
	Decimal(Decimal),
	Custom(Arc<dyn CustomNumber>),
}

impl Number {
	/// The promotion tier of this number, `None` for custom numbers.
	pub fn tier(&self) -> Option<Tier> {
		match self {
			Number::Int1(_) => Some(Tier::Int1),
			Number::Int2(_) => Some(Tier::Int2),
			Number::Int4(_) => Some(Tier::Int4),
			Number::Int8(_) => Some(Tier::Int8),
			Number::Int(_) => Some(Tier::Int),
			Number::Float4(_) => Some(Tier::Float4),
			Number::Float8(_) => Some(Tier::Float8),
			Number::Decimal(_) => Some(Tier::Decimal),
			Number::Custom(_) => None,
		}
	}

	pub fn get_type(&self) -> Type {
		match self.tier() {
			Some(tier) => tier.get_type(),
			None => Type::Number,
		}
	}

	pub fn class(&self) -> &'static Class {
		match self {
			Number::Int1(_) => &class::INT1,
			Number::Int2(_) => &class::INT2,
			Number::Int4(_) => &class::INT4,
			Number::Int8(_) => &class::INT8,
			Number::Int(_) => &class::INT,
			Number::Float4(_) => &class::FLOAT4,
			Number::Float8(_) => &class::FLOAT8,
			Number::Decimal(_) => &class::DECIMAL,
			Number::Custom(c) => c.class(),
		}
	}

	/// Same representation and same value. Floats compare by bit pattern, so
	/// NaN is identical to itself and `0.0` is not identical to `-0.0`.
	pub fn identical(&self, other: &Number) -> bool {
		match (self, other) {
			(Number::Int1(l), Number::Int1(r)) => l == r,
			(Number::Int2(l), Number::Int2(r)) => l == r,
			(Number::Int4(l), Number::Int4(r)) => l == r,
			(Number::Int8(l), Number::Int8(r)) => l == r,
			(Number::Int(l), Number::Int(r)) => l == r,
			(Number::Float4(l), Number::Float4(r)) => l.to_bits() == r.to_bits(),
			(Number::Float8(l), Number::Float8(r)) => l.to_bits() == r.to_bits(),
			(Number::Decimal(l), Number::Decimal(r)) => l == r,
			(Number::Custom(l), Number::Custom(r)) => Arc::ptr_eq(l, r),
			_ => false,
		}
	}
}

impl Display for Number {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Number::Int1(v) => Display::fmt(v, f),
			Number::Int2(v) => Display::fmt(v, f),
			Number::Int4(v) => Display::fmt(v, f),
			Number::Int8(v) => Display::fmt(v, f),
			Number::Int(v) => Display::fmt(v, f),
			Number::Float4(v) => Display::fmt(v, f),
			Number::Float8(v) => Display::fmt(v, f),
			Number::Decimal(v) => Display::fmt(v, f),
			Number::Custom(v) => Display::fmt(v, f),
		}
	}
}
