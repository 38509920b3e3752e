// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Crash reporting SDK for game runtimes.
//!
//! The client validates submission credentials once at build time, then
//! assembles one payload per report: flat attributes, an annotation
//! document snapshotting environment variables and the active scene, and
//! the submission URL computed from the credentials. Finished records go to
//! a [`ReportQueue`] collaborator that owns persistence and upload.
//!
//! ```ignore
//! use heddle_crash::{CrashClient, Report};
//!
//! let client = CrashClient::builder()
//!     .host("https://acme.example.com")
//!     .token("token_xxx")
//!     .build()?;
//!
//! client.capture(Report::new("Panic", "index out of bounds"))?;
//! ```

mod client;
mod config;
mod error;
mod queue;

pub use client::{CrashClient, CrashClientBuilder};
pub use config::ClientConfig;
pub use error::{CrashSdkError, Result};
pub use queue::{MemoryQueue, ReportQueue, SubmissionRecord};

// Core types callers interact with directly.
pub use heddle_crash_core::{
	Annotations, Credentials, EnvironmentVariables, GameObjectSnapshot, NoScene, Report, ReportId,
	SceneQuery, SceneSnapshot,
};
