// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// When a [`PreparedExpression`](crate::PreparedExpression) switches from
/// interpretation to its compiled form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompilerMode {
	/// Always interpret.
	#[default]
	Off,
	/// Compile right after the first interpretation. Failures of the compiled
	/// form are returned to the caller.
	Immediate,
	/// Compile after `compile_threshold` interpretations. A type mismatch in
	/// the compiled form drops it and falls back to interpretation; other
	/// errors are returned.
	Mixed,
}

/// Configuration for expression evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
	pub compiler_mode: CompilerMode,
	/// Interpretations before compiling in [`CompilerMode::Mixed`].
	///
	/// Default: 100
	pub compile_threshold: usize,
	/// Failed compilations after which an expression stays interpreted.
	///
	/// Default: 100
	pub max_failed_compilations: usize,
}

impl Default for EvaluationConfig {
	fn default() -> Self {
		Self {
			compiler_mode: CompilerMode::Off,
			compile_threshold: 100,
			max_failed_compilations: 100,
		}
	}
}

impl EvaluationConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn compiler_mode(mut self, mode: CompilerMode) -> Self {
		self.compiler_mode = mode;
		self
	}

	pub fn compile_threshold(mut self, threshold: usize) -> Self {
		self.compile_threshold = threshold;
		self
	}

	pub fn max_failed_compilations(mut self, max: usize) -> Self {
		self.max_failed_compilations = max;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default() {
		let config = EvaluationConfig::default();
		assert_eq!(config.compiler_mode, CompilerMode::Off);
		assert_eq!(config.compile_threshold, 100);
		assert_eq!(config.max_failed_compilations, 100);
	}

	#[test]
	fn test_deserialize_partial() {
		let config: EvaluationConfig = serde_json::from_str(r#"{"compiler_mode":"mixed"}"#).unwrap();
		assert_eq!(config.compiler_mode, CompilerMode::Mixed);
		assert_eq!(config.compile_threshold, 100);
	}

	#[test]
	fn test_deserialize_full() {
		let config: EvaluationConfig = serde_json::from_str(
			r#"{"compiler_mode":"immediate","compile_threshold":5,"max_failed_compilations":2}"#,
		)
		.unwrap();
		assert_eq!(
			config,
			EvaluationConfig::new().compiler_mode(CompilerMode::Immediate).compile_threshold(5).max_failed_compilations(2)
		);
	}

	#[test]
	fn test_unknown_mode_rejected() {
		assert!(serde_json::from_str::<EvaluationConfig>(r#"{"compiler_mode":"eager"}"#).is_err());
	}
}
