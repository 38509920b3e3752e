// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Report queue seam between the client and the on-device store.
//!
//! Persistence and upload are collaborator concerns; the SDK only hands a
//! finished [`SubmissionRecord`] across this trait.

use std::sync::Mutex;

use heddle_crash_core::ReportId;
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use crate::error::{CrashSdkError, Result};

/// A fully assembled report ready for persistence and upload, keyed by its
/// report id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
	pub id: ReportId,
	/// The exact URL the payload is uploaded to.
	pub url: Url,
	pub payload: serde_json::Value,
}

/// Sink accepting finished reports for persistence and eventual upload.
pub trait ReportQueue: Send + Sync {
	/// Accepts one record. Implementations own retry/upload policy.
	fn enqueue(&self, record: SubmissionRecord) -> Result<()>;
}

/// In-memory bounded queue.
///
/// Keeps the newest records, dropping the oldest on overflow. Serves as the
/// default sink and as a test double for store-backed implementations.
#[derive(Debug)]
pub struct MemoryQueue {
	records: Mutex<Vec<SubmissionRecord>>,
	max_records: usize,
}

/// Default record cap before the oldest are dropped.
const MAX_RECORDS: usize = 1000;

impl MemoryQueue {
	pub fn new(max_records: usize) -> Self {
		Self {
			records: Mutex::new(Vec::new()),
			max_records,
		}
	}

	/// Number of records currently held.
	pub fn len(&self) -> Result<usize> {
		Ok(self.lock()?.len())
	}

	pub fn is_empty(&self) -> Result<bool> {
		Ok(self.lock()?.is_empty())
	}

	/// Takes all held records, oldest first.
	pub fn drain(&self) -> Result<Vec<SubmissionRecord>> {
		Ok(std::mem::take(&mut *self.lock()?))
	}

	fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<SubmissionRecord>>> {
		self.records.lock().map_err(|_| CrashSdkError::LockError)
	}
}

impl Default for MemoryQueue {
	fn default() -> Self {
		Self::new(MAX_RECORDS)
	}
}

impl ReportQueue for MemoryQueue {
	fn enqueue(&self, record: SubmissionRecord) -> Result<()> {
		let mut records = self.lock()?;
		while records.len() >= self.max_records {
			let dropped = records.remove(0);
			warn!(report_id = %dropped.id, "Dropped report due to queue overflow");
		}
		records.push(record);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(tag: &str) -> SubmissionRecord {
		SubmissionRecord {
			id: ReportId::new(),
			url: Url::parse("https://foo.example.com/post").unwrap(),
			payload: serde_json::json!({ "tag": tag }),
		}
	}

	#[test]
	fn enqueue_keeps_insertion_order() {
		let queue = MemoryQueue::default();
		queue.enqueue(record("first")).unwrap();
		queue.enqueue(record("second")).unwrap();

		let records = queue.drain().unwrap();
		assert_eq!(records.len(), 2);
		assert_eq!(records[0].payload["tag"], "first");
		assert_eq!(records[1].payload["tag"], "second");
	}

	#[test]
	fn overflow_drops_oldest() {
		let queue = MemoryQueue::new(2);
		queue.enqueue(record("a")).unwrap();
		queue.enqueue(record("b")).unwrap();
		queue.enqueue(record("c")).unwrap();

		let records = queue.drain().unwrap();
		assert_eq!(records.len(), 2);
		assert_eq!(records[0].payload["tag"], "b");
		assert_eq!(records[1].payload["tag"], "c");
	}

	#[test]
	fn drain_empties_the_queue() {
		let queue = MemoryQueue::default();
		queue.enqueue(record("only")).unwrap();
		assert_eq!(queue.drain().unwrap().len(), 1);
		assert!(queue.is_empty().unwrap());
	}

	proptest::proptest! {
		#[test]
		fn queue_never_exceeds_its_cap(cap in 1usize..8, pushes in 0usize..32) {
			let queue = MemoryQueue::new(cap);
			for i in 0..pushes {
				queue.enqueue(record(&i.to_string())).unwrap();
			}
			proptest::prop_assert!(queue.len().unwrap() <= cap);

			// Whatever survived must be the newest records, oldest first.
			let kept = queue.drain().unwrap();
			let expected: Vec<String> =
				(pushes.saturating_sub(cap)..pushes).map(|i| i.to_string()).collect();
			let tags: Vec<String> = kept
				.iter()
				.map(|r| r.payload["tag"].as_str().unwrap().to_string())
				.collect();
			proptest::prop_assert_eq!(tags, expected);
		}
	}
}
