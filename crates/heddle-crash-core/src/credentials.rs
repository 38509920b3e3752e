// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Submission credentials: endpoint validation and submission-URL construction.

use url::{Position, Url};

use crate::error::{CredentialsError, Result};

/// First-party submission hosts are pre-resolved and need no path/query
/// synthesis.
const SUBMIT_HOST_PREFIX: &str = "www.submit.backtrace.io";
const SUBMIT_HOST_FRAGMENT: &str = "sp.backtrace.io";

/// Returns true if `host` is a recognized first-party submission host.
///
/// The host is normalized with a `www.` prefix before matching, so
/// `submit.backtrace.io` and `www.submit.backtrace.io` are equivalent.
pub fn is_first_party_host(host: &str) -> bool {
	let normalized = if host.starts_with("www.") {
		host.to_string()
	} else {
		format!("www.{host}")
	};
	normalized.starts_with(SUBMIT_HOST_PREFIX) || normalized.contains(SUBMIT_HOST_FRAGMENT)
}

/// Credentials for the report submission endpoint.
///
/// Immutable once constructed; replacing credentials means constructing a
/// new value. Either the host is a recognized first-party endpoint (token
/// optional) or the token is non-empty and the host parses as a URL.
///
/// The default value is the unconfigured state (no host, no token) that a
/// client reads out of an empty configuration record; `submission_url` on
/// it fails with [`CredentialsError::InvalidState`].
#[derive(Debug, Clone, Default)]
pub struct Credentials {
	host: Option<Url>,
	token: Vec<u8>,
	first_party: bool,
}

impl Credentials {
	/// Builds credentials from a complete submission URL.
	///
	/// The URL must point at a recognized first-party endpoint and is
	/// assumed to already carry its token; it is returned unchanged by
	/// [`Credentials::submission_url`]. Arbitrary third-party hosts are
	/// rejected with [`CredentialsError::InvalidEndpoint`] — use
	/// [`Credentials::with_token`] for those.
	pub fn from_submission_url(submission_url: &str) -> Result<Self> {
		let url = Url::parse(submission_url)
			.map_err(|_| CredentialsError::InvalidEndpoint(submission_url.to_string()))?;
		Self::from_submission_uri(url)
	}

	/// Builds credentials from an already-parsed submission URL.
	///
	/// See [`Credentials::from_submission_url`].
	pub fn from_submission_uri(submission_url: Url) -> Result<Self> {
		let host = submission_url
			.host_str()
			.ok_or_else(|| CredentialsError::InvalidEndpoint(submission_url.to_string()))?;
		if !is_first_party_host(host) {
			return Err(CredentialsError::InvalidEndpoint(host.to_string()));
		}
		Ok(Self {
			host: Some(submission_url),
			token: Vec::new(),
			first_party: true,
		})
	}

	/// Builds credentials from a host URL and an access token.
	///
	/// The host may omit its scheme (`foo.example.com`); `https` is assumed.
	/// No first-party check is applied. Fails with
	/// [`CredentialsError::InvalidCredentials`] when the token is empty or
	/// the host does not parse.
	pub fn with_token(host: &str, token: &str) -> Result<Self> {
		Self::with_token_bytes(host, token.as_bytes().to_vec())
	}

	/// Builds credentials from a host URL and a raw token byte sequence.
	///
	/// See [`Credentials::with_token`].
	pub fn with_token_bytes(host: &str, token: Vec<u8>) -> Result<Self> {
		let host = parse_host(host)?;
		Self::from_parts(host, token)
	}

	/// Builds credentials from an already-parsed host URL and a raw token.
	pub fn from_parts(host: Url, token: Vec<u8>) -> Result<Self> {
		if token.is_empty() {
			return Err(CredentialsError::InvalidCredentials);
		}
		Ok(Self {
			host: Some(host),
			token,
			first_party: false,
		})
	}

	/// The configured host URL, if any.
	pub fn host(&self) -> Option<&Url> {
		self.host.as_ref()
	}

	/// The access token decoded as UTF-8.
	pub fn token(&self) -> String {
		String::from_utf8_lossy(&self.token).into_owned()
	}

	/// Whether the host was accepted through the first-party endpoint path.
	pub fn is_first_party(&self) -> bool {
		self.first_party
	}

	/// Computes the URL report payloads are uploaded to.
	///
	/// First-party endpoints are pre-complete and returned unchanged. For
	/// generic hosts the URL is synthesized: scheme forced to `https` when
	/// the current one does not start with `http`, a `/` appended to a
	/// non-empty path that lacks one, the literal segment `post` appended,
	/// and the query replaced with `format=json&token=<token>`.
	pub fn submission_url(&self) -> Result<Url> {
		let host = self.host.as_ref().ok_or(CredentialsError::InvalidState)?;
		if self.first_party {
			return Ok(host.clone());
		}
		if self.token.is_empty() {
			return Err(CredentialsError::MissingToken);
		}

		let mut url = ensure_https(host);
		let mut path = url.path().to_string();
		if !path.is_empty() && !path.ends_with('/') {
			path.push('/');
		}
		path.push_str("post");
		url.set_path(&path);
		url.set_query(Some(&format!("format=json&token={}", self.token())));
		Ok(url)
	}
}

/// Parse a host that may omit its scheme.
fn parse_host(host: &str) -> Result<Url> {
	match Url::parse(host) {
		Ok(url) => Ok(url),
		Err(url::ParseError::RelativeUrlWithoutBase) => {
			Url::parse(&format!("https://{host}")).map_err(|_| CredentialsError::InvalidCredentials)
		}
		Err(_) => Err(CredentialsError::InvalidCredentials),
	}
}

/// Rewrite `url` onto the `https` scheme unless it already speaks HTTP(S).
fn ensure_https(url: &Url) -> Url {
	if url.scheme().starts_with("http") {
		return url.clone();
	}
	let rest = &url[Position::BeforeUsername..];
	Url::parse(&format!("https://{rest}")).unwrap_or_else(|_| url.clone())
}
