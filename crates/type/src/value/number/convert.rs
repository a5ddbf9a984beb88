// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Conversions between numeric representations.
//!
//! Widening into a wider representation is lossless. Narrowing an integer
//! keeps the low-order bits, casting a float to an integer saturates (NaN
//! becomes 0) and decimals truncate toward zero.

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

use super::Number;
use crate::value::decimal::parse_decimal;

impl Number {
	pub fn to_f64(&self) -> f64 {
		match self {
			Number::Int1(v) => *v as f64,
			Number::Int2(v) => *v as f64,
			Number::Int4(v) => *v as f64,
			Number::Int8(v) => *v as f64,
			Number::Int(v) => bigint_to_f64(v),
			Number::Float4(v) => *v as f64,
			Number::Float8(v) => *v,
			Number::Decimal(v) => decimal_to_f64(v),
			Number::Custom(v) => v.to_f64(),
		}
	}

	pub fn to_f32(&self) -> f32 {
		match self {
			Number::Int1(v) => *v as f32,
			Number::Int2(v) => *v as f32,
			Number::Int4(v) => *v as f32,
			Number::Int8(v) => *v as f32,
			Number::Int(v) => v.to_f32().unwrap_or_else(|| bigint_to_f64(v) as f32),
			Number::Float4(v) => *v,
			Number::Float8(v) => *v as f32,
			Number::Decimal(v) => decimal_to_f64(v) as f32,
			Number::Custom(v) => v.to_f32(),
		}
	}

	pub fn to_i64(&self) -> i64 {
		match self {
			Number::Int1(v) => *v as i64,
			Number::Int2(v) => *v as i64,
			Number::Int4(v) => *v as i64,
			Number::Int8(v) => *v,
			Number::Int(v) => low_bits(v),
			Number::Float4(v) => *v as i64,
			Number::Float8(v) => *v as i64,
			Number::Decimal(v) => low_bits(&truncate(v)),
			Number::Custom(v) => v.to_i64(),
		}
	}

	pub fn to_i32(&self) -> i32 {
		match self {
			Number::Int1(v) => *v as i32,
			Number::Int2(v) => *v as i32,
			Number::Int4(v) => *v,
			Number::Float4(v) => *v as i32,
			Number::Float8(v) => *v as i32,
			Number::Custom(v) => v.to_i32(),
			Number::Int8(_) | Number::Int(_) | Number::Decimal(_) => self.to_i64() as i32,
		}
	}

	pub fn to_i16(&self) -> i16 {
		match self {
			Number::Int1(v) => *v as i16,
			Number::Int2(v) => *v,
			Number::Custom(v) => v.to_i16(),
			_ => self.to_i32() as i16,
		}
	}

	pub fn to_i8(&self) -> i8 {
		match self {
			Number::Int1(v) => *v,
			Number::Custom(v) => v.to_i8(),
			_ => self.to_i32() as i8,
		}
	}

	/// Floats go through [`Number::to_i64`] first.
	pub fn to_int(&self) -> BigInt {
		match self {
			Number::Int1(v) => BigInt::from(*v),
			Number::Int2(v) => BigInt::from(*v),
			Number::Int4(v) => BigInt::from(*v),
			Number::Int8(v) => BigInt::from(*v),
			Number::Int(v) => v.inner().clone(),
			Number::Float4(_) | Number::Float8(_) => BigInt::from(self.to_i64()),
			Number::Decimal(v) => truncate(v),
			Number::Custom(v) => v.to_int(),
		}
	}

	/// `None` for non-finite floats. Floats convert through their shortest
	/// round-trip rendering, so `0.1f64` becomes exactly `0.1`.
	pub fn to_decimal(&self) -> Option<BigDecimal> {
		match self {
			Number::Int1(v) => Some(BigDecimal::from(*v)),
			Number::Int2(v) => Some(BigDecimal::from(*v)),
			Number::Int4(v) => Some(BigDecimal::from(*v)),
			Number::Int8(v) => Some(BigDecimal::from(*v)),
			Number::Int(v) => Some(BigDecimal::new(v.inner().clone(), 0)),
			Number::Float4(v) => float_to_decimal(v.is_finite(), v),
			Number::Float8(v) => float_to_decimal(v.is_finite(), v),
			Number::Decimal(v) => Some(v.inner().clone()),
			Number::Custom(v) => v.to_decimal(),
		}
	}
}

fn float_to_decimal(finite: bool, v: &impl ToString) -> Option<BigDecimal> {
	if !finite {
		return None;
	}
	parse_decimal(&v.to_string()).ok().map(|d| d.into_inner())
}

fn bigint_to_f64(v: &BigInt) -> f64 {
	v.to_f64().unwrap_or(match v.sign() {
		Sign::Minus => f64::NEG_INFINITY,
		_ => f64::INFINITY,
	})
}

fn decimal_to_f64(v: &BigDecimal) -> f64 {
	v.to_f64().unwrap_or_else(|| v.to_string().parse().unwrap_or(f64::NAN))
}

fn truncate(v: &BigDecimal) -> BigInt {
	let (digits, _) = v.with_scale(0).into_bigint_and_exponent();
	digits
}

/// Two's complement low 64 bits.
fn low_bits(v: &BigInt) -> i64 {
	let (sign, digits) = v.to_u64_digits();
	let low = digits.first().copied().unwrap_or(0) as i64;
	match sign {
		Sign::Minus => low.wrapping_neg(),
		_ => low,
	}
}

#[cfg(test)]
mod tests {
	use std::str::FromStr;

	use super::*;
	use crate::{Decimal, Int};

	fn decimal(s: &str) -> Number {
		Number::Decimal(Decimal::from_str(s).unwrap())
	}

	#[test]
	fn test_widening_is_lossless() {
		let n = Number::Int8(i64::MAX);
		assert_eq!(n.to_int(), BigInt::from(i64::MAX));
		assert_eq!(n.to_decimal().unwrap(), BigDecimal::from(i64::MAX));
		assert_eq!(Number::Int1(-7).to_i64(), -7);
		assert_eq!(Number::Int2(300).to_i32(), 300);
	}

	#[test]
	fn test_narrowing_wraps() {
		assert_eq!(Number::Int8(300).to_i8(), 44);
		assert_eq!(Number::Int4(70000).to_i16(), 4464);
		assert_eq!(Number::Int8(1 << 32).to_i32(), 0);
	}

	#[test]
	fn test_int_low_bits() {
		let big = Number::Int(Int::from(u64::MAX as i128 + 2));
		assert_eq!(big.to_i64(), 1);

		let negative = Number::Int(Int::from(-5));
		assert_eq!(negative.to_i64(), -5);

		let min = Number::Int(Int::from(i64::MIN));
		assert_eq!(min.to_i64(), i64::MIN);
	}

	#[test]
	fn test_float_to_integer_saturates() {
		assert_eq!(Number::Float8(1e300).to_i64(), i64::MAX);
		assert_eq!(Number::Float8(-1e300).to_i32(), i32::MIN);
		assert_eq!(Number::Float8(f64::NAN).to_i64(), 0);
		assert_eq!(Number::Float4(2.9).to_i32(), 2);
	}

	#[test]
	fn test_float_to_short_goes_through_int() {
		// saturate to i32 first, then keep the low 16 bits
		assert_eq!(Number::Float8(1e10).to_i16(), -1);
	}

	#[test]
	fn test_decimal_truncates_toward_zero() {
		assert_eq!(decimal("2.9").to_i64(), 2);
		assert_eq!(decimal("-2.9").to_i64(), -2);
		assert_eq!(decimal("-2.9").to_int(), BigInt::from(-2));
	}

	#[test]
	fn test_float_to_decimal_uses_shortest_rendering() {
		assert_eq!(Number::Float8(0.1).to_decimal().unwrap(), BigDecimal::from_str("0.1").unwrap());
		assert_eq!(Number::Float4(0.1).to_decimal().unwrap(), BigDecimal::from_str("0.1").unwrap());
	}

	#[test]
	fn test_non_finite_float_has_no_decimal() {
		assert!(Number::Float8(f64::NAN).to_decimal().is_none());
		assert!(Number::Float4(f32::INFINITY).to_decimal().is_none());
	}

	#[test]
	fn test_int_to_float() {
		assert_eq!(Number::Int(Int::from(1u64 << 53)).to_f64(), 9007199254740992.0);
		assert_eq!(decimal("1.5").to_f64(), 1.5);
		assert_eq!(decimal("1.5").to_f32(), 1.5f32);
	}
}
