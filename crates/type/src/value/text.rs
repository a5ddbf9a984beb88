// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
	hash::{Hash, Hasher},
	sync::Arc,
};

/// Character data. The representations differ only in ownership; equality,
/// ordering and hashing all go through [`Text::as_str`].
#[derive(Clone, Debug)]
pub enum Text {
	Owned(String),
	Shared(Arc<str>),
	Static(&'static str),
}

impl Text {
	pub fn as_str(&self) -> &str {
		match self {
			Text::Owned(s) => s.as_str(),
			Text::Shared(s) => s,
			Text::Static(s) => s,
		}
	}

	/// The canonical form: an owned UTF-8 string.
	pub fn canonical(&self) -> Text {
		match self {
			Text::Owned(s) => Text::Owned(s.clone()),
			other => Text::Owned(other.as_str().to_string()),
		}
	}
}

impl PartialEq for Text {
	fn eq(&self, other: &Self) -> bool {
		self.as_str() == other.as_str()
	}
}

impl Eq for Text {}

impl PartialOrd for Text {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Text {
	fn cmp(&self, other: &Self) -> Ordering {
		self.as_str().cmp(other.as_str())
	}
}

impl Hash for Text {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.as_str().hash(state)
	}
}

impl Display for Text {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<String> for Text {
	fn from(s: String) -> Self {
		Text::Owned(s)
	}
}

impl From<Arc<str>> for Text {
	fn from(s: Arc<str>) -> Self {
		Text::Shared(s)
	}
}

impl From<&'static str> for Text {
	fn from(s: &'static str) -> Self {
		Text::Static(s)
	}
}
