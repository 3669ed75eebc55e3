use serde::{Deserialize, Serialize};

use crate::constants::HASHTAG_PREFIX;
use crate::types::{Tag, TagCount};

/// One row of the ranked trend list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendEntry {
    /// Canonical tag: lowercase, without `#`.
    pub tag: Tag,
    /// Total occurrences across every scanned text field.
    pub count: TagCount,
}

impl TrendEntry {
    /// The tag in display form, e.g. `#react`.
    pub fn hashtag(&self) -> String {
        format!("{}{}", HASHTAG_PREFIX, self.tag)
    }
}
