// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Report model: the per-crash value assembled by the client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a report. The on-device queue keys records by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(pub Uuid);

impl ReportId {
	pub fn new() -> Self {
		Self(Uuid::now_v7())
	}
}

impl Default for ReportId {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Display for ReportId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for ReportId {
	type Err = uuid::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self(Uuid::parse_str(s)?))
	}
}

/// A single crash or error report.
///
/// Flat string attributes ride alongside the report; the annotation
/// document is merged into the payload by the client at submission time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
	pub id: ReportId,
	pub timestamp: DateTime<Utc>,
	/// Error classifier, e.g. the exception type name.
	pub classifier: String,
	pub message: String,
	#[serde(default)]
	pub attributes: HashMap<String, String>,
}

impl Report {
	/// Creates a report stamped with a fresh id and the current time.
	pub fn new(classifier: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			id: ReportId::new(),
			timestamp: Utc::now(),
			classifier: classifier.into(),
			message: message.into(),
			attributes: HashMap::new(),
		}
	}

	/// Adds a flat attribute.
	pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.insert(key.into(), value.into());
		self
	}
}
