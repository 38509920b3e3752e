// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client configuration record.

use heddle_crash_core::Credentials;
use serde::{Deserialize, Serialize};

use crate::error::{CrashSdkError, Result};

/// Configuration for the crash client, as stored by the host application.
///
/// With a token, `server_url` is a plain host and the submission URL is
/// synthesized from both. Without one, `server_url` must be a complete
/// first-party submission URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
	/// Submission endpoint: a first-party submission URL, or a custom host
	/// when paired with `token`.
	pub server_url: String,
	/// Access token for custom hosts.
	pub token: Option<String>,
	/// Whether reporting is enabled at all. A disabled client drops
	/// reports without error.
	pub enabled: bool,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			server_url: String::new(),
			token: None,
			enabled: true,
		}
	}
}

impl ClientConfig {
	/// Validates the record into submission credentials.
	pub fn credentials(&self) -> Result<Credentials> {
		if self.server_url.is_empty() {
			return Err(CrashSdkError::MissingEndpoint);
		}
		let credentials = match self.token.as_deref() {
			Some(token) if !token.is_empty() => {
				Credentials::with_token(&self.server_url, token)?
			}
			_ => Credentials::from_submission_url(&self.server_url)?,
		};
		Ok(credentials)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_config_has_no_endpoint() {
		let err = ClientConfig::default().credentials().unwrap_err();
		assert!(matches!(err, CrashSdkError::MissingEndpoint));
	}

	#[test]
	fn host_and_token_build_generic_credentials() {
		let config = ClientConfig {
			server_url: "https://foo.example.com".to_string(),
			token: Some("abc".to_string()),
			..Default::default()
		};
		let credentials = config.credentials().unwrap();
		assert!(!credentials.is_first_party());
		assert_eq!(
			credentials.submission_url().unwrap().as_str(),
			"https://foo.example.com/post?format=json&token=abc"
		);
	}

	#[test]
	fn bare_first_party_url_needs_no_token() {
		let config = ClientConfig {
			server_url: "https://test.sp.backtrace.io:6097/".to_string(),
			..Default::default()
		};
		let credentials = config.credentials().unwrap();
		assert!(credentials.is_first_party());
	}

	#[test]
	fn config_roundtrips_through_json() {
		let config = ClientConfig {
			server_url: "https://foo.example.com".to_string(),
			token: Some("abc".to_string()),
			enabled: false,
		};
		let json = serde_json::to_string(&config).unwrap();
		let parsed: ClientConfig = serde_json::from_str(&json).unwrap();
		assert_eq!(parsed.server_url, config.server_url);
		assert_eq!(parsed.token, config.token);
		assert!(!parsed.enabled);
	}
}
