// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
	str::FromStr,
};

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

mod parse;

pub use parse::parse_decimal;

/// An arbitrary-precision decimal. Equality and ordering are numeric, so
/// `2.0` and `2.00` are equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Decimal(BigDecimal);

impl Decimal {
	pub fn new(v: BigDecimal) -> Self {
		Self(v)
	}

	pub fn inner(&self) -> &BigDecimal {
		&self.0
	}

	pub fn into_inner(self) -> BigDecimal {
		self.0
	}
}

impl Deref for Decimal {
	type Target = BigDecimal;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl From<BigDecimal> for Decimal {
	fn from(v: BigDecimal) -> Self {
		Self(v)
	}
}

impl From<i64> for Decimal {
	fn from(v: i64) -> Self {
		Self(BigDecimal::from(v))
	}
}

impl FromStr for Decimal {
	type Err = crate::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_decimal(s)
	}
}
