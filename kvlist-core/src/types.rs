//! Core types used throughout kvlist
//!
//! This module contains the fundamental data types that form the basis
//! of kvlist's data model: list/page addressing, the opaque payload
//! shape, and the read-side cursor.

use crate::error::KvListError;

/// A caller-chosen opaque identifier for one logical list
pub type ListId = String;

/// A non-negative page index within a list, `0, 1, 2, ...`
pub type PageNumber = u64;

/// The zero-based offset of an item within a page at the time it was read
///
/// Best-effort only: under concurrent appends this offset can shift
/// relative to other appenders' returned offsets, so it is a
/// snapshot-local identifier, not a stable rank.
pub type SequenceId = u64;

/// The opaque payload appended to a list
///
/// Represented as a JSON value rather than raw bytes so callers can
/// append arbitrary structured payloads without kvlist imposing its own
/// encoding on top of whatever the backing store already does.
pub type Value = serde_json::Value;

/// One item returned by the retrieval engine, decorated with its address
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// The appended payload
    pub value: Value,
    /// The page this item was read from
    pub page_id: PageNumber,
    /// This item's offset within `page_id` at read time
    pub sequence_id: SequenceId,
    /// The list this item belongs to
    pub resource_id_parent: ListId,
}

/// A position in a list for resuming a backward walk
///
/// Both fields are always present on a `Cursor`; callers receiving a
/// cursor from an external representation (e.g. deserialized from a
/// partially-populated request) should go through [`RawCursor`] and its
/// `TryFrom` impl, which is where a missing field is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub page_id: PageNumber,
    pub sequence_id: SequenceId,
}

impl Cursor {
    pub fn new(page_id: PageNumber, sequence_id: SequenceId) -> Self {
        Self {
            page_id,
            sequence_id,
        }
    }
}

impl From<&Item> for Cursor {
    fn from(item: &Item) -> Self {
        Cursor::new(item.page_id, item.sequence_id)
    }
}

/// A cursor as it arrives from an external caller, before validation
///
/// `retrieve_next_most_recent` rejects a cursor missing either field with
/// [`KvListError::InvalidCursor`] per the protocol's error taxonomy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawCursor {
    pub page_id: Option<PageNumber>,
    pub sequence_id: Option<SequenceId>,
}

impl TryFrom<RawCursor> for Cursor {
    type Error = KvListError;

    fn try_from(raw: RawCursor) -> Result<Self, Self::Error> {
        match (raw.page_id, raw.sequence_id) {
            (Some(page_id), Some(sequence_id)) => Ok(Cursor::new(page_id, sequence_id)),
            _ => Err(KvListError::InvalidCursor),
        }
    }
}

impl From<Cursor> for RawCursor {
    fn from(cursor: Cursor) -> Self {
        RawCursor {
            page_id: Some(cursor.page_id),
            sequence_id: Some(cursor.sequence_id),
        }
    }
}
