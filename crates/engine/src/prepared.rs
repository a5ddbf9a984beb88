// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::{
	Arc,
	atomic::{AtomicUsize, Ordering},
};

use lumen_type::{Value, error::code};
use parking_lot::RwLock;
use tracing::{debug, instrument};

use crate::{
	config::{CompilerMode, EvaluationConfig},
	evaluate::{
		EvaluationContext,
		compiled::{CompiledExpr, compile_expression},
	},
	expression::Expression,
};

/// An expression tree that is interpreted until the configured
/// [`CompilerMode`] swaps in a compiled form.
///
/// Safe to evaluate from several threads at once. The interpreted result is
/// authoritative: a compiled form only ever returns the same value or fails.
#[derive(Debug)]
pub struct PreparedExpression {
	root: Expression,
	config: EvaluationConfig,
	compiled: RwLock<Option<Arc<CompiledExpr>>>,
	interpreted_count: AtomicUsize,
	failed_attempts: AtomicUsize,
}

impl PreparedExpression {
	pub fn new(root: Expression, config: EvaluationConfig) -> Self {
		Self {
			root,
			config,
			compiled: RwLock::new(None),
			interpreted_count: AtomicUsize::new(0),
			failed_attempts: AtomicUsize::new(0),
		}
	}

	pub fn expression(&self) -> &Expression {
		&self.root
	}

	pub fn config(&self) -> &EvaluationConfig {
		&self.config
	}

	pub fn is_compiled(&self) -> bool {
		self.compiled.read().is_some()
	}

	/// Interpretations since the last compilation or reversion.
	pub fn interpreted_count(&self) -> usize {
		self.interpreted_count.load(Ordering::Relaxed)
	}

	pub fn failed_compilations(&self) -> usize {
		self.failed_attempts.load(Ordering::Relaxed)
	}

	#[instrument(name = "prepared::evaluate", level = "trace", skip_all)]
	pub fn evaluate(&self, ctx: &EvaluationContext) -> crate::Result<Value> {
		let compiled = self.compiled.read().clone();
		if let Some(compiled) = compiled {
			match compiled.execute(ctx) {
				Ok(value) => return Ok(value),
				Err(err)
					if self.config.compiler_mode == CompilerMode::Mixed
						&& err.code == code::COMPILED_TYPE_MISMATCH =>
				{
					debug!(code = %err.code, "compiled expression failed, reverting to interpreter");
					self.revert_to_interpreted();
					let failed = self.failed_attempts.fetch_add(1, Ordering::Relaxed) + 1;
					if failed == self.config.max_failed_compilations {
						debug!(failed, "giving up on compilation");
					}
				}
				Err(err) => return Err(err),
			}
		}

		let value = self.root.evaluate(ctx)?;
		self.check_compile();
		Ok(value)
	}

	/// Compile the tree now, regardless of mode. Returns whether a compiled
	/// form is installed.
	pub fn compile(&self) -> bool {
		let Some(compiled) = compile_expression(&self.root) else {
			return false;
		};
		*self.compiled.write() = Some(Arc::new(compiled));
		self.interpreted_count.store(0, Ordering::Relaxed);
		debug!("compiled expression installed");
		true
	}

	/// Drop the compiled form and restart the interpretation count.
	pub fn revert_to_interpreted(&self) {
		*self.compiled.write() = None;
		self.interpreted_count.store(0, Ordering::Relaxed);
	}

	fn check_compile(&self) {
		let count = self.interpreted_count.fetch_add(1, Ordering::Relaxed) + 1;
		let should_compile = match self.config.compiler_mode {
			CompilerMode::Off => false,
			CompilerMode::Immediate => true,
			CompilerMode::Mixed => {
				count > self.config.compile_threshold
					&& self.failed_compilations() < self.config.max_failed_compilations
			}
		};
		if should_compile && !self.is_compiled() {
			self.compile();
		}
	}
}
