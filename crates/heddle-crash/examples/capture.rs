// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Example: Capture a crash report using the heddle-crash SDK.
//!
//! Run with:
//!   cargo run --example capture -p heddle-crash

use std::sync::Arc;

use heddle_crash::{CrashClient, MemoryQueue, Report};

fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Configure from environment or use defaults for testing
	let host = std::env::var("HEDDLE_HOST")
		.unwrap_or_else(|_| "https://acme.example.com".to_string());
	let token =
		std::env::var("HEDDLE_TOKEN").expect("HEDDLE_TOKEN environment variable required");

	println!("Initializing crash client...");
	println!("  Host: {}", host);

	// Build the client with an inspectable queue
	let queue = Arc::new(MemoryQueue::default());
	let client = CrashClient::builder()
		.host(&host)
		.token(&token)
		.attribute("application", "capture-example")
		.attribute("application.version", env!("CARGO_PKG_VERSION"))
		.queue(queue.clone())
		.build()?;

	println!("  Submission URL: {}", client.submission_url()?);

	// Capture a test report
	println!("\nCapturing test report...");
	let report = Report::new("ExampleError", "Example test error from heddle-crash SDK")
		.attribute("stage", "example");
	let id = client.capture(report)?.expect("client is enabled");

	println!("\nCapture successful!");
	println!("  Report ID: {}", id);

	// Inspect what would be uploaded
	for record in queue.drain()? {
		println!("  Queued for: {}", record.url);
		println!("  Payload: {}", serde_json::to_string_pretty(&record.payload)?);
	}

	Ok(())
}
