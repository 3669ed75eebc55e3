use crate::constants::HASHTAG_PREFIX;
use crate::types::Tag;

/// Converts a raw hashtag (e.g. `#Gatos`) into its trend bucket (`gatos`).
///
/// Input without a leading `#` is lowercased as-is.
pub fn canonicalize_tag(hashtag: &str) -> Tag {
    hashtag
        .strip_prefix(HASHTAG_PREFIX)
        .unwrap_or(hashtag)
        .to_lowercase()
}
