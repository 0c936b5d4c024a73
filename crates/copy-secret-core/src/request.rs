// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::fmt;

use crate::error::CopyError;

/// Which secrets of the origin namespace to copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
	/// Explicit names, looked up one by one in the given order.
	ByName(Vec<String>),
	/// Everything the origin namespace lists.
	All,
}

impl Selector {
	/// Build a selector from the two mutually exclusive inputs.
	///
	/// Blank entries in `names` are dropped, so `"a,,b"` style input selects
	/// `a` and `b`. Exactly one of a non-empty name list or `all` must be set.
	pub fn from_flags<I, S>(names: I, all: bool) -> Result<Self, CopyError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let names: Vec<String> = names
			.into_iter()
			.map(|n| n.as_ref().trim().to_string())
			.filter(|n| !n.is_empty())
			.collect();

		match (names.is_empty(), all) {
			(false, true) => Err(CopyError::InvalidSelector(
				"explicit secret names and all-secrets are mutually exclusive".to_string(),
			)),
			(true, false) => Err(CopyError::InvalidSelector(
				"either secret names or all-secrets must be selected".to_string(),
			)),
			(true, true) => Ok(Selector::All),
			(false, false) => Ok(Selector::ByName(names)),
		}
	}
}

impl fmt::Display for Selector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Selector::All => write!(f, "all secrets"),
			Selector::ByName(names) => write!(f, "{}", quoted_list(names)),
		}
	}
}

/// `"a", "b", "c"`
pub fn quoted_list(names: &[String]) -> String {
	names
		.iter()
		.map(|n| format!("{n:?}"))
		.collect::<Vec<_>>()
		.join(", ")
}

/// One copy invocation: where from, where to, and what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
	origin: String,
	destination: String,
	selector: Selector,
}

impl CopyRequest {
	pub fn new(
		origin: impl Into<String>,
		destination: impl Into<String>,
		selector: Selector,
	) -> Result<Self, CopyError> {
		let origin = origin.into().trim().to_string();
		let destination = destination.into().trim().to_string();

		if origin.is_empty() {
			return Err(CopyError::InvalidRequest(
				"origin namespace must not be empty".to_string(),
			));
		}
		if destination.is_empty() {
			return Err(CopyError::InvalidRequest(
				"destination namespace must not be empty".to_string(),
			));
		}

		Ok(Self {
			origin,
			destination,
			selector,
		})
	}

	pub fn origin(&self) -> &str {
		&self.origin
	}

	pub fn destination(&self) -> &str {
		&self.destination
	}

	pub fn selector(&self) -> &Selector {
		&self.selector
	}
}
