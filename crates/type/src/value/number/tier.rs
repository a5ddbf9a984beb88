// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::Type;

/// The recognized numeric representations a comparison can promote to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
	Int1,
	Int2,
	Int4,
	Int8,
	Int,
	Float4,
	Float8,
	Decimal,
}

impl Tier {
	/// Order in which tiers are tested when two numbers meet. This is a
	/// priority list, not a widening chain: `Float8` is tested before `Int`,
	/// so an arbitrary-precision integer paired with a double compares as a
	/// double.
	pub const PRECEDENCE: [Tier; 8] =
		[Tier::Decimal, Tier::Float8, Tier::Float4, Tier::Int, Tier::Int8, Tier::Int4, Tier::Int2, Tier::Int1];

	/// The first tier in [`Tier::PRECEDENCE`] that either operand has.
	pub fn resolve(left: Option<Tier>, right: Option<Tier>) -> Option<Tier> {
		Self::PRECEDENCE.into_iter().find(|tier| left == Some(*tier) || right == Some(*tier))
	}

	pub fn get_type(self) -> Type {
		match self {
			Tier::Int1 => Type::Int1,
			Tier::Int2 => Type::Int2,
			Tier::Int4 => Type::Int4,
			Tier::Int8 => Type::Int8,
			Tier::Int => Type::Int,
			Tier::Float4 => Type::Float4,
			Tier::Float8 => Type::Float8,
			Tier::Decimal => Type::Decimal,
		}
	}
}
