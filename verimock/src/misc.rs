//! The [`misc`](self) module contains process wide counters used to identify
//! mocked objects and to order recorded invocations.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Get the next id for a mocked object.
pub fn next_mock_id() -> usize {
    NEXT_MOCK_ID.fetch_add(1, Ordering::Relaxed)
}

/// Get the next sequence number for a recorded invocation.
///
/// Sequence numbers are strictly increasing in the order they are requested.
pub fn next_sequence_number() -> usize {
    NEXT_SEQUENCE_NUMBER.fetch_add(1, Ordering::Relaxed)
}

static NEXT_MOCK_ID: AtomicUsize = AtomicUsize::new(0);
static NEXT_SEQUENCE_NUMBER: AtomicUsize = AtomicUsize::new(1);
