// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Read-only scene introspection seam.
//!
//! The annotation collector consumes scene state through [`SceneQuery`] so
//! it carries no dependency on any specific engine's object model. Engine
//! integrations implement the trait over their scene graph; tests supply
//! synthetic scenes.

use serde::{Deserialize, Serialize};

/// Read-only query surface over the host engine's scene graph.
pub trait SceneQuery {
	/// The currently active scene, or `None` when no scene is loaded.
	fn active_scene(&self) -> Option<SceneSnapshot>;
}

/// A snapshot of the active scene's root-level objects, in the engine's
/// natural traversal order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSnapshot {
	pub name: String,
	pub root_objects: Vec<GameObjectSnapshot>,
}

/// Descriptor for one root-level scene object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameObjectSnapshot {
	pub name: String,
	pub is_static: bool,
	pub layer: u32,
	pub tag: String,
	/// Transform position formatted by the engine; `None` when the object
	/// has no transform.
	pub position: Option<String>,
	/// Transform rotation formatted by the engine; `None` when the object
	/// has no transform.
	pub rotation: Option<String>,
	pub active_in_hierarchy: bool,
	pub active_self: bool,
	/// Engine-internal state flags, as their raw integer value.
	pub hide_flags: i32,
	/// Process-unique object instance identifier.
	pub instance_id: i64,
}

impl Default for GameObjectSnapshot {
	fn default() -> Self {
		Self {
			name: String::new(),
			is_static: false,
			layer: 0,
			tag: String::new(),
			position: None,
			rotation: None,
			active_in_hierarchy: false,
			active_self: false,
			hide_flags: 0,
			instance_id: 0,
		}
	}
}

/// A scene query for headless processes: there is never an active scene.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoScene;

impl SceneQuery for NoScene {
	fn active_scene(&self) -> Option<SceneSnapshot> {
		None
	}
}
