// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Heddle crash reporting SDK.
//!
//! This crate provides the engine-independent pieces of the SDK: submission
//! credentials, annotation collection, scene introspection seams, and the
//! report model. It is consumed by `heddle-crash` (the client surface) and
//! by engine integrations.
//!
//! # Overview
//!
//! The crash reporting system supports:
//! - Endpoint credential validation and submission-URL construction for the
//!   Backtrace ingestion protocol
//! - Annotation documents combining environment variables, caller-supplied
//!   attributes, and the active scene's root objects
//! - Restoration of previously serialized annotation documents from the
//!   on-device queue, returned verbatim on re-serialization
//! - A narrow read-only scene query seam so no engine types leak into the
//!   core
//!
//! Everything here is synchronous and free of I/O; persistence and upload
//! live behind collaborator traits in `heddle-crash`.

pub mod annotations;
pub mod credentials;
pub mod environment;
pub mod error;
pub mod report;
pub mod scene;

pub use annotations::Annotations;
pub use credentials::{is_first_party_host, Credentials};
pub use environment::EnvironmentVariables;
pub use error::{CredentialsError, Result};
pub use report::{Report, ReportId};
pub use scene::{GameObjectSnapshot, NoScene, SceneQuery, SceneSnapshot};
