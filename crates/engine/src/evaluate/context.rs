// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, fmt, sync::Arc};

use lumen_type::Value;

use super::{StandardTypeComparator, TypeComparator};

/// Everything an evaluation reads from its surroundings: the comparator used
/// for non-numeric ordering and the bound variables.
#[derive(Clone)]
pub struct EvaluationContext {
	comparator: Arc<dyn TypeComparator>,
	variables: HashMap<String, Value>,
}

impl EvaluationContext {
	pub fn new() -> Self {
		Self::with_comparator(Arc::new(StandardTypeComparator))
	}

	pub fn with_comparator(comparator: Arc<dyn TypeComparator>) -> Self {
		Self {
			comparator,
			variables: HashMap::new(),
		}
	}

	pub fn comparator(&self) -> &dyn TypeComparator {
		self.comparator.as_ref()
	}

	pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<Value>) {
		self.variables.insert(name.into(), value.into());
	}

	pub fn variable(&self, name: &str) -> Option<&Value> {
		self.variables.get(name)
	}
}

impl Default for EvaluationContext {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for EvaluationContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EvaluationContext").field("variables", &self.variables).finish_non_exhaustive()
	}
}
