use serde::{Deserialize, Serialize};

use crate::types::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    PlainText,
    Hashtag,
}

/// A run of text produced by [`Tokenizer::tokenize`](crate::Tokenizer::tokenize).
///
/// `display_text` is the exact substring of the input, so concatenating the
/// `display_text` of every segment reproduces the input. `tag` is only present
/// for hashtag segments and holds the characters after `#`, case preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub display_text: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tag: Option<Tag>,
}

impl Segment {
    pub fn plain_text(display_text: &str) -> Self {
        Self {
            kind: SegmentKind::PlainText,
            display_text: display_text.to_string(),
            tag: None,
        }
    }

    pub fn hashtag(display_text: &str, tag: &str) -> Self {
        Self {
            kind: SegmentKind::Hashtag,
            display_text: display_text.to_string(),
            tag: Some(tag.to_string()),
        }
    }

    pub fn is_hashtag(&self) -> bool {
        self.kind == SegmentKind::Hashtag
    }
}
