// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// An arbitrary-precision signed integer
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Int(pub BigInt);

impl Int {
	pub fn new(v: impl Into<BigInt>) -> Self {
		Self(v.into())
	}

	pub fn inner(&self) -> &BigInt {
		&self.0
	}
}

impl Deref for Int {
	type Target = BigInt;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for Int {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl From<BigInt> for Int {
	fn from(v: BigInt) -> Self {
		Self(v)
	}
}

macro_rules! impl_from_primitive {
	($($t:ty),*) => {
		$(
			impl From<$t> for Int {
				fn from(v: $t) -> Self {
					Self(BigInt::from(v))
				}
			}
		)*
	};
}

impl_from_primitive!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
