// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Debug, Display};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::value::{Class, class, decimal::parse_decimal};

/// A numeric representation the engine does not know about. Comparisons
/// against it go through the conversions below; when neither side of a
/// comparison has a recognized tier, both are compared as `f64`.
pub trait CustomNumber: Debug + Display + Send + Sync {
	fn to_f64(&self) -> f64;

	fn to_i64(&self) -> i64;

	fn to_f32(&self) -> f32 {
		self.to_f64() as f32
	}

	fn to_i32(&self) -> i32 {
		self.to_i64() as i32
	}

	fn to_i16(&self) -> i16 {
		self.to_i32() as i16
	}

	fn to_i8(&self) -> i8 {
		self.to_i32() as i8
	}

	fn to_int(&self) -> BigInt {
		BigInt::from(self.to_i64())
	}

	/// Parsed from the `Display` rendering by default.
	fn to_decimal(&self) -> Option<BigDecimal> {
		parse_decimal(&self.to_string()).ok().map(|d| d.into_inner())
	}

	fn class(&self) -> &'static Class {
		&class::NUMBER
	}
}
