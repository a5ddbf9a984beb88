// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod expr;

pub use expr::CompiledExpr;
use lumen_type::{GetType, Number, Type, TypeError, Value, return_error};
use tracing::debug;

use super::compare::values_equal;
use crate::expression::{EqualExpression, Expression, GreaterThanExpression, NotEqualExpression};

/// Compile an `Expression` into a `CompiledExpr`.
///
/// Returns `None` when any node in the tree is not compilable with the
/// operand types observed so far.
pub fn compile_expression(expr: &Expression) -> Option<CompiledExpr> {
	if !expr.is_compilable() {
		return None;
	}
	compile(expr)
}

fn compile(expr: &Expression) -> Option<CompiledExpr> {
	match expr {
		Expression::Constant(e) => {
			let value = e.value.clone();
			Some(CompiledExpr::new(move |_| Ok(value.clone())))
		}
		Expression::Variable(e) => {
			let name = e.name.clone();
			Some(CompiledExpr::new(move |ctx| match ctx.variable(&name) {
				Some(value) => Ok(value.clone()),
				None => return_error!(TypeError::VariableNotFound {
					name: name.clone(),
				}),
			}))
		}
		Expression::GreaterThan(e) => e.compile(),
		Expression::Equal(e) => e.compile(),
		Expression::NotEqual(e) => e.compile(),
	}
}

impl GreaterThanExpression {
	/// A closure comparing the shared primitive type of both operands
	/// directly, or `None` when the operands do not share one.
	pub fn compile(&self) -> Option<CompiledExpr> {
		if !self.is_compilable() {
			return None;
		}
		let ty = self.numeric_type()?;
		debug!(operands = %self.operands.descriptor(), "compiling greater than");
		specialize(ty, &self.left, &self.right, Comparison::GreaterThan)
	}
}

impl EqualExpression {
	pub(crate) fn compile(&self) -> Option<CompiledExpr> {
		debug!(operands = %self.operands.descriptor(), "compiling equal");
		compile_equality(&self.left, &self.right, self.numeric_type(), false)
	}
}

impl NotEqualExpression {
	pub(crate) fn compile(&self) -> Option<CompiledExpr> {
		debug!(operands = %self.operands.descriptor(), "compiling not equal");
		compile_equality(&self.left, &self.right, self.numeric_type(), true)
	}
}

fn compile_equality(
	left: &Expression,
	right: &Expression,
	numeric_type: Option<Type>,
	negate: bool,
) -> Option<CompiledExpr> {
	if let Some(ty) = numeric_type {
		let comparison = if negate {
			Comparison::NotEqual
		} else {
			Comparison::Equal
		};
		return specialize(ty, left, right, comparison);
	}

	let left = compile(left)?;
	let right = compile(right)?;
	Some(CompiledExpr::new(move |ctx| {
		let l = left.execute(ctx)?;
		let r = right.execute(ctx)?;
		Ok(Value::Boolean(values_equal(ctx.comparator(), &l, &r) != negate))
	}))
}

#[derive(Clone, Copy, Debug)]
enum Comparison {
	GreaterThan,
	Equal,
	NotEqual,
}

impl Comparison {
	fn apply<T: PartialOrd>(self, l: T, r: T) -> bool {
		match self {
			Comparison::GreaterThan => l > r,
			Comparison::Equal => l == r,
			Comparison::NotEqual => l != r,
		}
	}
}

trait Primitive: GetType + PartialOrd + Copy + Send + Sync + 'static {
	fn extract(value: &Value) -> Option<Self>;
}

macro_rules! impl_primitive {
	($($t:ty => $variant:ident),*) => {
		$(
			impl Primitive for $t {
				fn extract(value: &Value) -> Option<Self> {
					match value {
						Value::Number(Number::$variant(v)) => Some(*v),
						_ => None,
					}
				}
			}
		)*
	};
}

impl_primitive!(i32 => Int4, i64 => Int8, f32 => Float4, f64 => Float8);

fn specialize(ty: Type, left: &Expression, right: &Expression, comparison: Comparison) -> Option<CompiledExpr> {
	match ty {
		Type::Int4 => specialize_as::<i32>(left, right, comparison),
		Type::Int8 => specialize_as::<i64>(left, right, comparison),
		Type::Float4 => specialize_as::<f32>(left, right, comparison),
		Type::Float8 => specialize_as::<f64>(left, right, comparison),
		_ => None,
	}
}

fn specialize_as<T: Primitive>(left: &Expression, right: &Expression, comparison: Comparison) -> Option<CompiledExpr> {
	let left = compile(left)?;
	let right = compile(right)?;
	Some(CompiledExpr::new(move |ctx| {
		let l = extract::<T>(&left.execute(ctx)?)?;
		let r = extract::<T>(&right.execute(ctx)?)?;
		Ok(Value::Boolean(comparison.apply(l, r)))
	}))
}

fn extract<T: Primitive>(value: &Value) -> crate::Result<T> {
	match T::extract(value) {
		Some(v) => Ok(v),
		None => return_error!(TypeError::CompiledTypeMismatch {
			expected: T::get_type(),
			actual: value.get_type(),
		}),
	}
}
