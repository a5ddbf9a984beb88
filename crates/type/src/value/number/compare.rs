// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use super::Number;

#[inline]
pub fn partial_cmp(l: &Number, r: &Number) -> Option<Ordering> {
	l.promote(r).partial_cmp()
}

#[inline]
pub fn total_cmp(l: &Number, r: &Number) -> Ordering {
	l.promote(r).total_cmp()
}

#[inline]
pub fn is_equal(l: &Number, r: &Number) -> bool {
	partial_cmp(l, r).is_some_and(|o| o == Ordering::Equal)
}

#[inline]
pub fn is_greater_than(l: &Number, r: &Number) -> bool {
	partial_cmp(l, r).is_some_and(|o| o == Ordering::Greater)
}

#[cfg(test)]
mod tests {
	use std::str::FromStr;

	use super::*;
	use crate::{Decimal, Int};

	#[test]
	fn test_same_tier() {
		assert!(is_greater_than(&Number::Int4(3), &Number::Int4(2)));
		assert!(!is_greater_than(&Number::Int4(2), &Number::Int4(2)));
		assert!(is_greater_than(&Number::Float8(2.5), &Number::Float8(-1.0)));
		assert!(is_greater_than(&Number::Int1(-1), &Number::Int1(-2)));
	}

	#[test]
	fn test_equal_across_tiers() {
		assert!(is_equal(&Number::Int4(2), &Number::Float8(2.0)));
		assert!(is_equal(&Number::Decimal(Decimal::from_str("2.00").unwrap()), &Number::Int8(2)));
		assert!(!is_equal(&Number::Int4(2), &Number::Float4(2.5)));
	}

	#[test]
	fn test_nan_is_unordered() {
		let nan = Number::Float8(f64::NAN);
		assert!(!is_greater_than(&nan, &Number::Int4(1)));
		assert!(!is_greater_than(&Number::Int4(1), &nan));
		assert!(!is_equal(&nan, &nan));
		assert_eq!(total_cmp(&nan, &nan), Ordering::Equal);
	}

	#[test]
	fn test_long_max_against_big_integer() {
		let long_max = Number::Int8(i64::MAX);
		let above = Number::Int(Int::from(i64::MAX as i128 + 1));
		assert!(is_greater_than(&above, &long_max));
		assert!(!is_greater_than(&long_max, &above));
		assert!(!is_equal(&long_max, &above));
	}
}
