// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Crash client: assembles report payloads and hands them to the queue.

use std::collections::HashMap;
use std::sync::Arc;

use heddle_crash_core::{Annotations, Credentials, NoScene, Report, ReportId, SceneQuery};
use serde_json::{json, Map, Value};
use tracing::{debug, info};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{CrashSdkError, Result};
use crate::queue::{MemoryQueue, ReportQueue, SubmissionRecord};

/// SDK name for identification.
const SDK_NAME: &str = "heddle-crash-rust";
/// SDK version for identification.
const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builder for constructing a [`CrashClient`].
pub struct CrashClientBuilder {
	config: Option<ClientConfig>,
	submission_url: Option<String>,
	host: Option<String>,
	token: Option<String>,
	attributes: HashMap<String, String>,
	annotation_attributes: Map<String, Value>,
	scene: Option<Arc<dyn SceneQuery + Send + Sync>>,
	queue: Option<Arc<dyn ReportQueue>>,
	enabled: bool,
}

impl CrashClientBuilder {
	/// Creates a new builder with default settings.
	pub fn new() -> Self {
		Self {
			config: None,
			submission_url: None,
			host: None,
			token: None,
			attributes: HashMap::new(),
			annotation_attributes: Map::new(),
			scene: None,
			queue: None,
			enabled: true,
		}
	}

	/// Configures endpoint, token, and enablement from a stored record.
	pub fn config(mut self, config: &ClientConfig) -> Self {
		self.config = Some(config.clone());
		self
	}

	/// Sets a complete first-party submission URL.
	///
	/// The URL must pass the first-party endpoint check; use
	/// [`CrashClientBuilder::host`] + [`CrashClientBuilder::token`] for
	/// custom endpoints.
	pub fn submission_url(mut self, url: impl Into<String>) -> Self {
		self.submission_url = Some(url.into());
		self
	}

	/// Sets a custom endpoint host. Requires a token.
	pub fn host(mut self, host: impl Into<String>) -> Self {
		self.host = Some(host.into());
		self
	}

	/// Sets the access token for a custom endpoint host.
	pub fn token(mut self, token: impl Into<String>) -> Self {
		self.token = Some(token.into());
		self
	}

	/// Adds a flat attribute stamped on every report.
	pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.insert(key.into(), value.into());
		self
	}

	/// Adds a complex attribute merged into every annotation document.
	pub fn annotation_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
		self.annotation_attributes.insert(key.into(), value);
		self
	}

	/// Sets the scene query surface. Defaults to [`NoScene`].
	pub fn scene_query(mut self, scene: Arc<dyn SceneQuery + Send + Sync>) -> Self {
		self.scene = Some(scene);
		self
	}

	/// Sets the report queue collaborator. Defaults to a bounded
	/// [`MemoryQueue`].
	pub fn queue(mut self, queue: Arc<dyn ReportQueue>) -> Self {
		self.queue = Some(queue);
		self
	}

	/// Enables or disables reporting. A disabled client drops reports
	/// without error.
	pub fn enabled(mut self, enabled: bool) -> Self {
		self.enabled = enabled;
		self
	}

	/// Builds the client. Credentials are validated here, once; the client
	/// is immutable afterwards.
	pub fn build(self) -> Result<CrashClient> {
		let (credentials, enabled) = if let Some(config) = &self.config {
			(config.credentials()?, self.enabled && config.enabled)
		} else if let Some(url) = &self.submission_url {
			(Credentials::from_submission_url(url)?, self.enabled)
		} else if let Some(host) = &self.host {
			(
				Credentials::with_token(host, self.token.as_deref().unwrap_or_default())?,
				self.enabled,
			)
		} else {
			return Err(CrashSdkError::MissingEndpoint);
		};

		let inner = Arc::new(CrashClientInner {
			credentials,
			attributes: self.attributes,
			annotation_attributes: self.annotation_attributes,
			scene: self.scene.unwrap_or_else(|| Arc::new(NoScene)),
			queue: self.queue.unwrap_or_else(|| Arc::new(MemoryQueue::default())),
			enabled,
		});

		info!(enabled, first_party = inner.credentials.is_first_party(), "Crash client initialized");

		Ok(CrashClient { inner })
	}
}

impl Default for CrashClientBuilder {
	fn default() -> Self {
		Self::new()
	}
}

struct CrashClientInner {
	credentials: Credentials,
	attributes: HashMap<String, String>,
	annotation_attributes: Map<String, Value>,
	scene: Arc<dyn SceneQuery + Send + Sync>,
	queue: Arc<dyn ReportQueue>,
	enabled: bool,
}

/// Client for assembling crash reports and handing them to the on-device
/// queue.
///
/// Holds one [`Credentials`] value, constructed once at build time; the
/// submission URL is computed from it for every report. Each capture
/// snapshots a fresh annotation document against the configured scene
/// query.
///
/// # Example
///
/// ```ignore
/// use heddle_crash::CrashClient;
///
/// let client = CrashClient::builder()
///     .host("https://acme.example.com")
///     .token("token_xxx")
///     .attribute("application", "redrunner")
///     .build()?;
///
/// if let Err(e) = load_level() {
///     client.capture_error(&e)?;
/// }
/// ```
#[derive(Clone)]
pub struct CrashClient {
	inner: Arc<CrashClientInner>,
}

impl CrashClient {
	/// Creates a new builder for constructing a client.
	pub fn builder() -> CrashClientBuilder {
		CrashClientBuilder::new()
	}

	/// Whether reporting is enabled.
	pub fn is_enabled(&self) -> bool {
		self.inner.enabled
	}

	/// Computes the submission URL for the configured credentials.
	pub fn submission_url(&self) -> Result<Url> {
		Ok(self.inner.credentials.submission_url()?)
	}

	/// Captures a report with a fresh annotation snapshot.
	///
	/// Returns the queued report id, or `None` when reporting is disabled.
	pub fn capture(&self, report: Report) -> Result<Option<ReportId>> {
		let annotations = Annotations::new(self.inner.annotation_attributes.clone());
		self.capture_with_annotations(report, &annotations)
	}

	/// Captures an error value as a report.
	pub fn capture_error<E: std::error::Error>(&self, error: &E) -> Result<Option<ReportId>> {
		self.capture(Report::new(
			std::any::type_name_of_val(error),
			error.to_string(),
		))
	}

	/// Captures a report with an explicit annotation collector.
	///
	/// Used when re-submitting a record restored from the on-device store:
	/// a restored collector serializes its original document verbatim
	/// instead of re-deriving scene state.
	pub fn capture_with_annotations(
		&self,
		report: Report,
		annotations: &Annotations,
	) -> Result<Option<ReportId>> {
		if !self.inner.enabled {
			debug!(report_id = %report.id, "Reporting disabled; dropping report");
			return Ok(None);
		}

		let url = self.inner.credentials.submission_url()?;
		let payload = self.assemble_payload(&report, annotations);
		let id = report.id;

		debug!(url = %url, report_id = %id, "Queueing crash report");
		self.inner.queue.enqueue(SubmissionRecord { id, url, payload })?;
		info!(report_id = %id, "Crash report queued");

		Ok(Some(id))
	}

	fn assemble_payload(&self, report: &Report, annotations: &Annotations) -> Value {
		let mut attributes = self.inner.attributes.clone();
		for (key, value) in &report.attributes {
			attributes.insert(key.clone(), value.clone());
		}
		attributes.insert("sdk.name".to_string(), SDK_NAME.to_string());
		attributes.insert("sdk.version".to_string(), SDK_VERSION.to_string());

		json!({
			"uuid": report.id,
			"timestamp": report.timestamp.to_rfc3339(),
			"classifiers": [report.classifier],
			"message": report.message,
			"attributes": attributes,
			"annotations": annotations.to_json(&*self.inner.scene),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use heddle_crash_core::{GameObjectSnapshot, SceneSnapshot};

	struct FakeScene;

	impl SceneQuery for FakeScene {
		fn active_scene(&self) -> Option<SceneSnapshot> {
			Some(SceneSnapshot {
				name: "level-1".to_string(),
				root_objects: vec![GameObjectSnapshot {
					name: "Player".to_string(),
					instance_id: 4210,
					..Default::default()
				}],
			})
		}
	}

	fn test_client(queue: Arc<MemoryQueue>) -> CrashClient {
		CrashClient::builder()
			.host("https://acme.example.com")
			.token("abc")
			.queue(queue)
			.build()
			.unwrap()
	}

	#[test]
	fn builder_requires_an_endpoint() {
		let result = CrashClient::builder().build();
		assert!(matches!(result, Err(CrashSdkError::MissingEndpoint)));
	}

	#[test]
	fn builder_rejects_third_party_submission_url() {
		let result = CrashClient::builder()
			.submission_url("https://foo.example.com/post")
			.build();
		assert!(matches!(result, Err(CrashSdkError::Credentials(_))));
	}

	#[test]
	fn builder_requires_token_for_custom_host() {
		let result = CrashClient::builder()
			.host("https://acme.example.com")
			.build();
		assert!(matches!(result, Err(CrashSdkError::Credentials(_))));
	}

	#[test]
	fn capture_queues_record_with_submission_url() {
		let queue = Arc::new(MemoryQueue::default());
		let client = test_client(queue.clone());

		let report = Report::new("Panic", "boom");
		let id = client.capture(report).unwrap().unwrap();

		let records = queue.drain().unwrap();
		assert_eq!(records.len(), 1);
		assert_eq!(records[0].id, id);
		assert_eq!(
			records[0].url.as_str(),
			"https://acme.example.com/post?format=json&token=abc"
		);
		assert_eq!(records[0].payload["uuid"], id.to_string());
		assert_eq!(records[0].payload["classifiers"][0], "Panic");
	}

	#[test]
	fn payload_is_stamped_with_sdk_attributes() {
		let queue = Arc::new(MemoryQueue::default());
		let client = test_client(queue.clone());

		client.capture(Report::new("Panic", "boom")).unwrap();

		let records = queue.drain().unwrap();
		let attributes = &records[0].payload["attributes"];
		assert_eq!(attributes["sdk.name"], SDK_NAME);
		assert_eq!(attributes["sdk.version"], SDK_VERSION);
	}

	#[test]
	fn report_attributes_override_client_attributes() {
		let queue = Arc::new(MemoryQueue::default());
		let client = CrashClient::builder()
			.host("https://acme.example.com")
			.token("abc")
			.attribute("application", "redrunner")
			.attribute("stage", "default")
			.queue(queue.clone())
			.build()
			.unwrap();

		let report = Report::new("Panic", "boom").attribute("stage", "boss-fight");
		client.capture(report).unwrap();

		let records = queue.drain().unwrap();
		let attributes = &records[0].payload["attributes"];
		assert_eq!(attributes["application"], "redrunner");
		assert_eq!(attributes["stage"], "boss-fight");
	}

	#[test]
	fn annotations_include_scene_when_active() {
		let queue = Arc::new(MemoryQueue::default());
		let client = CrashClient::builder()
			.host("https://acme.example.com")
			.token("abc")
			.scene_query(Arc::new(FakeScene))
			.queue(queue.clone())
			.build()
			.unwrap();

		client.capture(Report::new("Panic", "boom")).unwrap();

		let records = queue.drain().unwrap();
		let annotations = &records[0].payload["annotations"];
		assert!(annotations.get("Environment Variables").is_some());
		assert_eq!(annotations["Game objects"][0]["name"], "Player");
	}

	#[test]
	fn headless_capture_omits_game_objects() {
		let queue = Arc::new(MemoryQueue::default());
		let client = test_client(queue.clone());

		client.capture(Report::new("Panic", "boom")).unwrap();

		let records = queue.drain().unwrap();
		let annotations = &records[0].payload["annotations"];
		assert!(annotations.get("Environment Variables").is_some());
		assert!(annotations.get("Game objects").is_none());
	}

	#[test]
	fn restored_annotations_are_submitted_verbatim() {
		let queue = Arc::new(MemoryQueue::default());
		let client = CrashClient::builder()
			.host("https://acme.example.com")
			.token("abc")
			.scene_query(Arc::new(FakeScene))
			.queue(queue.clone())
			.build()
			.unwrap();

		let stored = serde_json::json!({ "Environment Variables": { "PATH": "/old" } });
		let annotations = Annotations::restore(stored.clone());
		client
			.capture_with_annotations(Report::new("Panic", "boom"), &annotations)
			.unwrap();

		let records = queue.drain().unwrap();
		assert_eq!(records[0].payload["annotations"], stored);
	}

	#[test]
	fn disabled_client_drops_reports() {
		let queue = Arc::new(MemoryQueue::default());
		let client = CrashClient::builder()
			.host("https://acme.example.com")
			.token("abc")
			.enabled(false)
			.queue(queue.clone())
			.build()
			.unwrap();

		let result = client.capture(Report::new("Panic", "boom")).unwrap();
		assert!(result.is_none());
		assert!(queue.is_empty().unwrap());
	}

	#[test]
	fn disabled_config_wins_over_builder_default() {
		let config = ClientConfig {
			server_url: "https://acme.example.com".to_string(),
			token: Some("abc".to_string()),
			enabled: false,
		};
		let client = CrashClient::builder().config(&config).build().unwrap();
		assert!(!client.is_enabled());
	}

	#[test]
	fn capture_error_uses_error_display_as_message() {
		let queue = Arc::new(MemoryQueue::default());
		let client = test_client(queue.clone());

		let error = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
		client.capture_error(&error).unwrap();

		let records = queue.drain().unwrap();
		assert_eq!(records[0].payload["message"], "disk on fire");
	}
}
