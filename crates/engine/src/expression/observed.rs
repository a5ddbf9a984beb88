// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use lumen_type::{Type, Value};
use parking_lot::RwLock;

/// The type most recently seen at one position of an expression tree.
/// Concurrent evaluations overwrite each other; readers may see a stale type.
#[derive(Debug, Default)]
pub struct ObservedType(RwLock<Option<Type>>);

impl ObservedType {
	pub fn record(&self, ty: Type) {
		*self.0.write() = Some(ty);
	}

	pub fn get(&self) -> Option<Type> {
		*self.0.read()
	}
}

/// Runtime types of both operands of a binary operator, as last evaluated.
#[derive(Debug, Default)]
pub struct OperandTypes {
	left: ObservedType,
	right: ObservedType,
}

impl OperandTypes {
	pub fn record(&self, left: &Value, right: &Value) {
		self.left.record(left.get_type());
		self.right.record(right.get_type());
	}

	pub fn left(&self) -> Option<Type> {
		self.left.get()
	}

	pub fn right(&self) -> Option<Type> {
		self.right.get()
	}

	/// Both recorded descriptors, e.g. `"I,J"`; `?` marks a side never seen.
	pub fn descriptor(&self) -> String {
		let tag = |ty: Option<Type>| ty.map_or("?", |t| t.descriptor());
		format!("{},{}", tag(self.left()), tag(self.right()))
	}
}
