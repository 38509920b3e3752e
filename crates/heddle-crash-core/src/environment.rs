// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Process environment-variable capture for report annotations.

use std::collections::BTreeMap;

/// Environment variables captured for a report, name → display value.
///
/// Keys are unique; a variable recorded without a value renders as an empty
/// string when the annotation document is serialized.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentVariables {
	variables: BTreeMap<String, Option<String>>,
}

impl EnvironmentVariables {
	/// Captures the current process environment.
	///
	/// Non-UTF-8 values are replaced lossily rather than dropped.
	pub fn capture() -> Self {
		let variables = std::env::vars_os()
			.map(|(name, value)| {
				(
					name.to_string_lossy().into_owned(),
					Some(value.to_string_lossy().into_owned()),
				)
			})
			.collect();
		Self { variables }
	}

	/// Builds the map from explicit entries (tests, engine-provided sets).
	pub fn from_entries<I, K>(entries: I) -> Self
	where
		I: IntoIterator<Item = (K, Option<String>)>,
		K: Into<String>,
	{
		let variables = entries
			.into_iter()
			.map(|(name, value)| (name.into(), value))
			.collect();
		Self { variables }
	}

	/// Iterates entries in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
		self.variables
			.iter()
			.map(|(name, value)| (name.as_str(), value.as_deref()))
	}

	pub fn len(&self) -> usize {
		self.variables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.variables.is_empty()
	}
}
