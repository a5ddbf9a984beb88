// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use super::{Diagnostic, IntoDiagnostic, TypeError};

/// Stable diagnostic codes.
pub mod code {
	pub const NOT_COMPARABLE: &str = "COMPARE_001";
	pub const COMPILED_TYPE_MISMATCH: &str = "COMPARE_002";
	pub const INVALID_NUMBER_FORMAT: &str = "NUMBER_001";
	pub const VARIABLE_NOT_FOUND: &str = "RUNTIME_001";
}

impl IntoDiagnostic for TypeError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			TypeError::NotComparable {
				left,
				right,
			} => Diagnostic {
				code: code::NOT_COMPARABLE.to_string(),
				message,
				label: Some(format!("{} and {} have no common ordering", left, right)),
				help: Some("Cast both operands to a common type before comparing them".to_string()),
				notes: vec![
					"Numbers compare with numbers, text with text and booleans with booleans".to_string(),
					"Objects compare only when their type defines an ordering".to_string(),
				],
				cause: None,
			},
			TypeError::CompiledTypeMismatch {
				expected,
				actual,
			} => Diagnostic {
				code: code::COMPILED_TYPE_MISMATCH.to_string(),
				message,
				label: Some(format!("operand was specialized for {}", expected)),
				help: Some(format!(
					"The operand changed from {} to {}; evaluate the expression in interpreted mode",
					expected, actual
				)),
				notes: vec![],
				cause: None,
			},
			TypeError::InvalidNumberFormat {
				text,
				target,
			} => Diagnostic {
				code: code::INVALID_NUMBER_FORMAT.to_string(),
				message,
				label: Some(format!("'{}' cannot be read as {}", text, target)),
				help: Some("Use digits with an optional sign, decimal point and exponent".to_string()),
				notes: vec!["Underscores and surrounding whitespace are ignored".to_string()],
				cause: None,
			},
			TypeError::VariableNotFound {
				name,
			} => Diagnostic {
				code: code::VARIABLE_NOT_FOUND.to_string(),
				message,
				label: None,
				help: Some(format!("Bind '{}' in the evaluation context before evaluating", name)),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl Diagnostic {
	/// Render the diagnostic as plain multi-line text.
	pub fn render(&self) -> String {
		let mut out = String::new();
		self.render_into(&mut out, 0);
		out
	}

	fn render_into(&self, out: &mut String, depth: usize) {
		let indent = "  ".repeat(depth);
		let _ = write!(out, "{}[{}] {}", indent, self.code, self.message);
		if let Some(label) = &self.label {
			let _ = write!(out, "\n{}  --> {}", indent, label);
		}
		if let Some(help) = &self.help {
			let _ = write!(out, "\n{}  help: {}", indent, help);
		}
		for note in &self.notes {
			let _ = write!(out, "\n{}  note: {}", indent, note);
		}
		if let Some(cause) = &self.cause {
			out.push('\n');
			cause.render_into(out, depth + 1);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Error, value::Type};

	#[test]
	fn test_not_comparable() {
		let diagnostic = TypeError::NotComparable {
			left: Type::Boolean,
			right: Type::Object,
		}
		.into_diagnostic();

		assert_eq!(diagnostic.code, "COMPARE_001");
		assert_eq!(diagnostic.message, "Cannot compare Boolean with Object");
		assert_eq!(diagnostic.notes.len(), 2);
	}

	#[test]
	fn test_render_nested_cause() {
		let mut outer = TypeError::VariableNotFound {
			name: "x".to_string(),
		}
		.into_diagnostic();
		outer.cause = Some(Box::new(
			TypeError::CompiledTypeMismatch {
				expected: Type::Int4,
				actual: Type::Int8,
			}
			.into_diagnostic(),
		));

		let rendered = Error(outer).to_string();
		assert!(rendered.starts_with("[RUNTIME_001] Variable 'x' is not defined"));
		assert!(rendered.contains("\n  [COMPARE_002] Compiled expression expected Int4 but found Int8"));
	}
}
