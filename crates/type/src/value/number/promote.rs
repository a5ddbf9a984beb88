// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use super::{Number, Tier};

/// Two numbers converted to one shared representation.
#[derive(Clone, Debug, PartialEq)]
pub enum Promoted {
	Int1(i8, i8),
	Int2(i16, i16),
	Int4(i32, i32),
	Int8(i64, i64),
	Int(BigInt, BigInt),
	Float4(f32, f32),
	Float8(f64, f64),
	Decimal(BigDecimal, BigDecimal),
	/// Neither side had a recognized tier, or a decimal promotion met a
	/// non-finite float. Compared as `f64`, accepting the precision loss.
	BestGuess(f64, f64),
}

impl Number {
	/// Convert both numbers to the tier [`Tier::resolve`] picks for them.
	pub fn promote(&self, other: &Number) -> Promoted {
		let (l, r) = (self, other);
		match Tier::resolve(l.tier(), r.tier()) {
			Some(Tier::Decimal) => match (l.to_decimal(), r.to_decimal()) {
				(Some(l), Some(r)) => Promoted::Decimal(l, r),
				_ => Promoted::BestGuess(l.to_f64(), r.to_f64()),
			},
			Some(Tier::Float8) => Promoted::Float8(l.to_f64(), r.to_f64()),
			Some(Tier::Float4) => Promoted::Float4(l.to_f32(), r.to_f32()),
			Some(Tier::Int) => Promoted::Int(l.to_int(), r.to_int()),
			Some(Tier::Int8) => Promoted::Int8(l.to_i64(), r.to_i64()),
			Some(Tier::Int4) => Promoted::Int4(l.to_i32(), r.to_i32()),
			Some(Tier::Int2) => Promoted::Int2(l.to_i16(), r.to_i16()),
			Some(Tier::Int1) => Promoted::Int1(l.to_i8(), r.to_i8()),
			None => Promoted::BestGuess(l.to_f64(), r.to_f64()),
		}
	}
}

impl Promoted {
	/// `None` when the pair is unordered, i.e. a float side is NaN.
	pub fn partial_cmp(&self) -> Option<Ordering> {
		match self {
			Promoted::Int1(l, r) => Some(l.cmp(r)),
			Promoted::Int2(l, r) => Some(l.cmp(r)),
			Promoted::Int4(l, r) => Some(l.cmp(r)),
			Promoted::Int8(l, r) => Some(l.cmp(r)),
			Promoted::Int(l, r) => Some(l.cmp(r)),
			Promoted::Float4(l, r) => l.partial_cmp(r),
			Promoted::Float8(l, r) | Promoted::BestGuess(l, r) => l.partial_cmp(r),
			Promoted::Decimal(l, r) => Some(l.cmp(r)),
		}
	}

	/// Like [`Promoted::partial_cmp`], but floats use their total order.
	pub fn total_cmp(&self) -> Ordering {
		match self {
			Promoted::Float4(l, r) => l.total_cmp(r),
			Promoted::Float8(l, r) | Promoted::BestGuess(l, r) => l.total_cmp(r),
			other => other.partial_cmp().unwrap_or(Ordering::Equal),
		}
	}

	pub fn tier(&self) -> Option<Tier> {
		match self {
			Promoted::Int1(..) => Some(Tier::Int1),
			Promoted::Int2(..) => Some(Tier::Int2),
			Promoted::Int4(..) => Some(Tier::Int4),
			Promoted::Int8(..) => Some(Tier::Int8),
			Promoted::Int(..) => Some(Tier::Int),
			Promoted::Float4(..) => Some(Tier::Float4),
			Promoted::Float8(..) => Some(Tier::Float8),
			Promoted::Decimal(..) => Some(Tier::Decimal),
			Promoted::BestGuess(..) => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::{
		fmt::{Display, Formatter},
		str::FromStr,
		sync::Arc,
	};

	use super::*;
	use crate::{CustomNumber, Decimal, Int};

	#[derive(Debug)]
	struct Fixed(i64);

	impl Display for Fixed {
		fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
			write!(f, "{}.5", self.0)
		}
	}

	impl CustomNumber for Fixed {
		fn to_f64(&self) -> f64 {
			self.0 as f64 + 0.5
		}

		fn to_i64(&self) -> i64 {
			self.0
		}
	}

	fn custom(v: i64) -> Number {
		Number::Custom(Arc::new(Fixed(v)))
	}

	#[test]
	fn test_decimal_wins_over_double() {
		let l = Number::Decimal(Decimal::from(1));
		let r = Number::Float8(2.0);
		assert_eq!(l.promote(&r), Promoted::Decimal(BigDecimal::from(1), BigDecimal::from(2)));
	}

	#[test]
	fn test_double_wins_over_big_integer() {
		let l = Number::Int(Int::from(3));
		let r = Number::Float8(2.5);
		assert_eq!(l.promote(&r), Promoted::Float8(3.0, 2.5));
	}

	#[test]
	fn test_float_wins_over_long() {
		let l = Number::Int8(16_777_217);
		let r = Number::Float4(1.0);
		// i64 -> f32 rounds to the nearest representable float
		assert_eq!(l.promote(&r), Promoted::Float4(16_777_216.0, 1.0));
	}

	#[test]
	fn test_long_wins_over_int() {
		assert_eq!(Number::Int8(5).promote(&Number::Int4(3)), Promoted::Int8(5, 3));
	}

	#[test]
	fn test_short_and_byte() {
		assert_eq!(Number::Int1(5).promote(&Number::Int2(-3)), Promoted::Int2(5, -3));
		assert_eq!(Number::Int1(5).promote(&Number::Int1(6)), Promoted::Int1(5, 6));
	}

	#[test]
	fn test_custom_takes_other_tier() {
		assert_eq!(custom(7).promote(&Number::Int4(7)), Promoted::Int4(7, 7));
		assert_eq!(
			custom(7).promote(&Number::Decimal(Decimal::from_str("7.5").unwrap())),
			Promoted::Decimal(BigDecimal::from_str("7.5").unwrap(), BigDecimal::from_str("7.5").unwrap())
		);
	}

	#[test]
	fn test_custom_pair_is_best_guess() {
		assert_eq!(custom(1).promote(&custom(2)), Promoted::BestGuess(1.5, 2.5));
	}

	#[test]
	fn test_decimal_with_nan_degrades() {
		let promoted = Number::Decimal(Decimal::from(1)).promote(&Number::Float8(f64::NAN));
		assert_eq!(promoted.tier(), None);
		assert_eq!(promoted.partial_cmp(), None);
	}

	#[test]
	fn test_nan_total_order() {
		let promoted = Number::Float8(f64::NAN).promote(&Number::Float8(1.0));
		assert_eq!(promoted.partial_cmp(), None);
		assert_eq!(promoted.total_cmp(), Ordering::Greater);
	}
}
