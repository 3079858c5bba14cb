//! Process-wide constants: key suffixes and key formatting
//!
//! See DESIGN NOTES in SPEC_FULL.md for the open question this resolves:
//! a `listId` containing an underscore can collide with the page-key
//! encoding below. This implementation does not attempt to escape `_`;
//! callers choosing list ids should avoid a trailing `_<digits>` or
//! `_summary` segment.

use crate::types::{ListId, PageNumber};

/// The label constants used to suffix keys
pub struct Constants;

impl Constants {
    /// Suffix appended to a list id to form its summary item's key
    pub const SUMMARY_SUFFIX: &'static str = "_summary";

    /// The key of the summary item for `list_id`
    pub fn summary_key(list_id: &ListId) -> String {
        format!("{list_id}{}", Self::SUMMARY_SUFFIX)
    }

    /// The key of data page `page_number` for `list_id`
    pub fn page_key(list_id: &ListId, page_number: PageNumber) -> String {
        format!("{list_id}_{page_number}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_summary_and_page_keys() {
        assert_eq!(Constants::summary_key(&"abc".to_string()), "abc_summary");
        assert_eq!(Constants::page_key(&"abc".to_string(), 7), "abc_7");
    }
}
