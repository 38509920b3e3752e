// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Report annotations: environment variables, caller attributes, and the
//! active scene's root objects, serialized into one document.

use serde_json::{json, Map, Value};

use crate::environment::EnvironmentVariables;
use crate::scene::{GameObjectSnapshot, SceneQuery};

/// Document key for the environment-variable object.
const ENVIRONMENT_KEY: &str = "Environment Variables";
/// Document key for the root-object listing.
const GAME_OBJECTS_KEY: &str = "Game objects";

/// Collector for the annotation document attached to a report.
///
/// A fresh collector snapshots environment variables, caller-supplied
/// complex attributes, and the live scene at serialization time. A restored
/// collector is a passive carrier: it returns the restored document
/// verbatim and never re-derives scene data.
#[derive(Debug, Clone)]
pub struct Annotations {
	state: State,
}

#[derive(Debug, Clone)]
enum State {
	Fresh {
		environment: EnvironmentVariables,
		attributes: Map<String, Value>,
	},
	Restored(Value),
}

impl Annotations {
	/// Creates a fresh collector over the current process environment.
	///
	/// `attributes` are caller-supplied complex values merged at the top
	/// level of the serialized document.
	pub fn new(attributes: Map<String, Value>) -> Self {
		Self::with_environment(attributes, EnvironmentVariables::capture())
	}

	/// Creates a fresh collector over an explicit environment map.
	pub fn with_environment(
		attributes: Map<String, Value>,
		environment: EnvironmentVariables,
	) -> Self {
		Self {
			state: State::Fresh {
				environment,
				attributes,
			},
		}
	}

	/// Restores a collector from a previously serialized document.
	///
	/// The document is stored verbatim and trusted; no validation is
	/// performed. [`Annotations::to_json`] returns it unchanged.
	pub fn restore(document: Value) -> Self {
		Self {
			state: State::Restored(document),
		}
	}

	/// Whether this instance carries a restored document.
	pub fn is_restored(&self) -> bool {
		matches!(self.state, State::Restored(_))
	}

	/// Serializes the annotation document.
	///
	/// Restored instances return their stored document unchanged. Fresh
	/// instances build a new document: an `"Environment Variables"` object,
	/// the caller attributes at the top level, and — only when `scene`
	/// reports an active scene — a `"Game objects"` array of root-object
	/// descriptors. A missing scene is absent data, not an error.
	///
	/// A fresh snapshot re-traverses the live scene on every call and may
	/// observe different transient state each time; treat it as single-use
	/// per report.
	pub fn to_json(&self, scene: &dyn SceneQuery) -> Value {
		let (environment, attributes) = match &self.state {
			State::Restored(document) => return document.clone(),
			State::Fresh {
				environment,
				attributes,
			} => (environment, attributes),
		};

		let mut document = Map::new();

		let mut variables = Map::new();
		for (name, value) in environment.iter() {
			variables.insert(
				name.to_string(),
				Value::String(value.unwrap_or_default().to_string()),
			);
		}
		document.insert(ENVIRONMENT_KEY.to_string(), Value::Object(variables));

		for (key, value) in attributes {
			document.insert(key.clone(), value.clone());
		}

		if let Some(active) = scene.active_scene() {
			let objects: Vec<Value> = active.root_objects.iter().map(object_json).collect();
			document.insert(GAME_OBJECTS_KEY.to_string(), Value::Array(objects));
		}

		Value::Object(document)
	}
}

/// Serializes one root-object descriptor with the wire field names.
fn object_json(object: &GameObjectSnapshot) -> Value {
	json!({
		"name": object.name,
		"isStatic": object.is_static,
		"layer": object.layer,
		"tag": object.tag,
		"transform.position": object.position.clone().unwrap_or_default(),
		"transform.rotation": object.rotation.clone().unwrap_or_default(),
		"activeInHierarchy": object.active_in_hierarchy,
		"activeSelf": object.active_self,
		"hideFlags": object.hide_flags,
		"instanceId": object.instance_id,
	})
}
