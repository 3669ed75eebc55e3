use crate::models::{Segment, Tokenizer};

/// Receives the tag of a clicked hashtag. Bound by the host, e.g. to navigate
/// to a tag search.
pub trait TagClickHandler {
    fn on_tag_click(&mut self, tag: &str);
}

impl<F> TagClickHandler for F
where
    F: FnMut(&str),
{
    fn on_tag_click(&mut self, tag: &str) {
        self(tag)
    }
}

/// A tokenized text field ready for display (a post body, comment, bio or
/// composer preview).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashtagText {
    segments: Vec<Segment>,
}

impl HashtagText {
    pub fn new(text: &str) -> Self {
        Self {
            segments: Tokenizer::hashtag_parser().tokenize(text),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Dispatches a click on the segment at `segment_index`.
    ///
    /// Returns `true` when the segment is a hashtag and `handler` was called
    /// with its tag (case as written).
    pub fn click<H>(&self, segment_index: usize, handler: &mut H) -> bool
    where
        H: TagClickHandler + ?Sized,
    {
        match self.segments.get(segment_index).and_then(|segment| segment.tag.as_deref()) {
            Some(tag) => {
                handler.on_tag_click(tag);
                true
            }
            None => false,
        }
    }

    /// Reassembles the original text.
    pub fn to_text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.display_text.as_str())
            .collect()
    }
}
