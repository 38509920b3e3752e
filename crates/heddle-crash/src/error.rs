// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the crash SDK.

use heddle_crash_core::CredentialsError;
use thiserror::Error;

/// Result type alias for crash SDK operations.
pub type Result<T> = std::result::Result<T, CrashSdkError>;

/// Errors that can occur in the crash SDK.
#[derive(Debug, Error)]
pub enum CrashSdkError {
	/// No submission endpoint was configured on the builder.
	#[error("no submission endpoint configured")]
	MissingEndpoint,

	/// Credential validation or submission-URL construction failed.
	#[error(transparent)]
	Credentials(#[from] CredentialsError),

	/// The report queue rejected a record.
	#[error("report queue error: {0}")]
	Queue(String),

	/// Failed to serialize a report payload.
	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	/// Lock acquisition failed.
	#[error("failed to acquire lock")]
	LockError,
}
