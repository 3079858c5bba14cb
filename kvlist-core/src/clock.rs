//! Wall-clock timestamping for `submittedAt` fields
//!
//! The protocol itself never reasons about wall-clock time (ordering is
//! driven entirely by page numbers and append-return offsets); this is
//! only used to stamp `Summary`/`Page` creation.

use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch, clamped to 0 if the clock is
/// somehow set before it
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
