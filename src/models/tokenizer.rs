use regex::Regex;
use std::sync::LazyLock;

use crate::constants::HASHTAG_PATTERN;
use crate::models::Segment;
use crate::types::{Hashtag, Tag};
use crate::utils::canonicalize_tag;

static HASHTAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HASHTAG_PATTERN).expect("HASHTAG_PATTERN must compile"));

/// Splits text into plain-text and hashtag segments, and extracts raw hashtags.
///
/// Every call site (post bodies, comments, bios, composer previews, trend
/// counting) goes through the same compiled pattern, so rendering and counting
/// always agree on what is a hashtag.
#[derive(Copy, Clone)]
pub struct Tokenizer {
    pattern: &'static Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::hashtag_parser()
    }
}

impl Tokenizer {
    pub fn hashtag_parser() -> Self {
        Self {
            pattern: &HASHTAG_REGEX,
        }
    }

    /// Returns every hashtag in `text`, in order of appearance, including the
    /// leading `#`.
    ///
    /// Note: This explicitly does not modify the case of the text.
    pub fn extract_hashtags(self, text: &str) -> Vec<Hashtag> {
        self.pattern
            .find_iter(text)
            .map(|hashtag| hashtag.as_str().to_string())
            .collect()
    }

    /// Same as `extract_hashtags`, but yields canonical (lowercased, no `#`) tags.
    pub fn extract_tags(self, text: &str) -> Vec<Tag> {
        self.pattern
            .find_iter(text)
            .map(|hashtag| canonicalize_tag(hashtag.as_str()))
            .collect()
    }

    /// Splits `text` into segments in document order.
    ///
    /// An empty input yields no segments. A non-empty input without hashtags
    /// yields a single plain-text segment holding the whole input.
    pub fn tokenize(self, text: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut last_end = 0;

        for captures in self.pattern.captures_iter(text) {
            // Both groups participate in every match
            let (Some(hashtag), Some(tag)) = (captures.get(0), captures.get(1)) else {
                continue;
            };

            if hashtag.start() > last_end {
                segments.push(Segment::plain_text(&text[last_end..hashtag.start()]));
            }

            segments.push(Segment::hashtag(hashtag.as_str(), tag.as_str()));
            last_end = hashtag.end();
        }

        if last_end < text.len() {
            segments.push(Segment::plain_text(&text[last_end..]));
        }

        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_rejects_bare_hash() {
        let tokenizer = Tokenizer::hashtag_parser();
        assert!(tokenizer.extract_hashtags("# ## #!").is_empty());
    }

    #[test]
    fn test_adjacent_hashtags_split_on_hash() {
        let tokenizer = Tokenizer::hashtag_parser();
        assert_eq!(tokenizer.extract_hashtags("#one#two"), vec!["#one", "#two"]);
    }

    #[test]
    fn test_extract_tags_are_canonical() {
        let tokenizer = Tokenizer::hashtag_parser();
        assert_eq!(
            tokenizer.extract_tags("#React and #ÉXITO"),
            vec!["react", "éxito"]
        );
    }
}
