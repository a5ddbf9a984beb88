// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use lumen_type::{Type, Value};

mod observed;

pub use observed::{ObservedType, OperandTypes};

/// A node of an expression tree.
#[derive(Debug)]
pub enum Expression {
	Constant(ConstantExpression),
	Variable(VariableExpression),
	GreaterThan(GreaterThanExpression),
	Equal(EqualExpression),
	NotEqual(NotEqualExpression),
}

#[derive(Debug)]
pub struct ConstantExpression {
	pub value: Value,
}

/// Reference to a value bound in the evaluation context.
#[derive(Debug)]
pub struct VariableExpression {
	pub name: String,
	pub(crate) observed: ObservedType,
}

/// `left > right`
#[derive(Debug)]
pub struct GreaterThanExpression {
	pub left: Box<Expression>,
	pub right: Box<Expression>,
	pub(crate) operands: OperandTypes,
}

/// `left == right`
#[derive(Debug)]
pub struct EqualExpression {
	pub left: Box<Expression>,
	pub right: Box<Expression>,
	pub(crate) operands: OperandTypes,
}

/// `left != right`
#[derive(Debug)]
pub struct NotEqualExpression {
	pub left: Box<Expression>,
	pub right: Box<Expression>,
	pub(crate) operands: OperandTypes,
}

impl Expression {
	pub fn constant(value: impl Into<Value>) -> Self {
		Expression::Constant(ConstantExpression {
			value: value.into(),
		})
	}

	pub fn variable(name: impl Into<String>) -> Self {
		Expression::Variable(VariableExpression {
			name: name.into(),
			observed: ObservedType::default(),
		})
	}

	pub fn greater_than(left: Expression, right: Expression) -> Self {
		Expression::GreaterThan(GreaterThanExpression {
			left: Box::new(left),
			right: Box::new(right),
			operands: OperandTypes::default(),
		})
	}

	pub fn equal(left: Expression, right: Expression) -> Self {
		Expression::Equal(EqualExpression {
			left: Box::new(left),
			right: Box::new(right),
			operands: OperandTypes::default(),
		})
	}

	pub fn not_equal(left: Expression, right: Expression) -> Self {
		Expression::NotEqual(NotEqualExpression {
			left: Box::new(left),
			right: Box::new(right),
			operands: OperandTypes::default(),
		})
	}

	/// The type this node produces, if known without evaluating it. Variables
	/// report the type of the value they held the last time they were read.
	pub fn exit_type(&self) -> Option<Type> {
		match self {
			Expression::Constant(e) => Some(e.value.get_type()),
			Expression::Variable(e) => e.observed.get(),
			Expression::GreaterThan(_) | Expression::Equal(_) | Expression::NotEqual(_) => Some(Type::Boolean),
		}
	}

	pub fn is_compilable(&self) -> bool {
		match self {
			Expression::Constant(_) => true,
			Expression::Variable(e) => e.observed.get().is_some(),
			Expression::GreaterThan(e) => e.is_compilable(),
			Expression::Equal(e) => {
				e.left.is_compilable()
					&& e.right.is_compilable() && equality_is_compilable(&e.left, &e.right, &e.operands)
			}
			Expression::NotEqual(e) => {
				e.left.is_compilable()
					&& e.right.is_compilable() && equality_is_compilable(&e.left, &e.right, &e.operands)
			}
		}
	}
}

impl GreaterThanExpression {
	/// The operand types seen on the most recent evaluation.
	pub fn operand_types(&self) -> &OperandTypes {
		&self.operands
	}

	/// Compilable only when both operands are the same primitive numeric type.
	pub fn is_compilable(&self) -> bool {
		self.left.is_compilable() && self.right.is_compilable() && self.numeric_type().is_some()
	}

	pub(crate) fn numeric_type(&self) -> Option<Type> {
		numeric_operand_type(&self.left, &self.right, &self.operands)
	}
}

impl EqualExpression {
	pub fn operand_types(&self) -> &OperandTypes {
		&self.operands
	}

	pub(crate) fn numeric_type(&self) -> Option<Type> {
		numeric_operand_type(&self.left, &self.right, &self.operands)
	}
}

impl NotEqualExpression {
	pub fn operand_types(&self) -> &OperandTypes {
		&self.operands
	}

	pub(crate) fn numeric_type(&self) -> Option<Type> {
		numeric_operand_type(&self.left, &self.right, &self.operands)
	}
}

fn operand_type(operand: &Expression, observed: Option<Type>) -> Option<Type> {
	operand.exit_type().or(observed)
}

/// The shared primitive numeric type of both operands, if there is one.
fn numeric_operand_type(left: &Expression, right: &Expression, operands: &OperandTypes) -> Option<Type> {
	let l = operand_type(left, operands.left())?;
	let r = operand_type(right, operands.right())?;
	(l == r && l.is_primitive_number()).then_some(l)
}

/// Equality compiles for any operand types except two primitive numbers of
/// different types.
fn equality_is_compilable(left: &Expression, right: &Expression, operands: &OperandTypes) -> bool {
	match (operand_type(left, operands.left()), operand_type(right, operands.right())) {
		(Some(l), Some(r)) if l.is_primitive_number() && r.is_primitive_number() => l == r,
		_ => true,
	}
}
