// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for credential validation and submission-URL construction.

use thiserror::Error;

/// Result type for credential operations.
pub type Result<T> = std::result::Result<T, CredentialsError>;

/// Errors raised while validating credentials or building the submission URL.
///
/// All variants are local, synchronous validation failures raised at
/// construction or URL computation. Nothing is retried internally; callers
/// decide whether to disable reporting, skip the upload, or abort startup.
#[derive(Debug, Error)]
pub enum CredentialsError {
	/// The URL-only constructor was given a host that is not a recognized
	/// submission endpoint.
	#[error("not a recognized submission endpoint: {0}")]
	InvalidEndpoint(String),

	/// The host+token constructor was given an empty token or a host that
	/// does not parse as a URL.
	#[error("invalid credentials: token is empty or host is malformed")]
	InvalidCredentials,

	/// Submission-URL computation was attempted with no host configured.
	#[error("no submission host configured")]
	InvalidState,

	/// Submission-URL computation requires a token for non-first-party hosts.
	#[error("token is required for custom submission endpoints")]
	MissingToken,
}
