// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt;

use lumen_type::Value;

use crate::evaluate::EvaluationContext;

pub struct CompiledExpr(Box<dyn Fn(&EvaluationContext) -> crate::Result<Value> + Send + Sync>);

impl CompiledExpr {
	pub fn new(f: impl Fn(&EvaluationContext) -> crate::Result<Value> + Send + Sync + 'static) -> Self {
		Self(Box::new(f))
	}

	pub fn execute(&self, ctx: &EvaluationContext) -> crate::Result<Value> {
		(self.0)(ctx)
	}
}

impl fmt::Debug for CompiledExpr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("CompiledExpr")
	}
}
