// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use lumen_type::Result;

pub mod config;
pub mod evaluate;
pub mod expression;
mod prepared;

pub use config::{CompilerMode, EvaluationConfig};
pub use evaluate::{
	EvaluationContext, StandardTypeComparator, TypeComparator,
	compare::{is_greater_than, values_equal},
	compiled::{CompiledExpr, compile_expression},
};
pub use expression::Expression;
pub use prepared::PreparedExpression;
