use crate::models::{Segment, SegmentKind};

pub trait SegmentRenderer {
    type Output;

    fn render_plain_text(&mut self, text: &str);

    fn render_hashtag(&mut self, display_text: &str, tag: &str);

    fn finish(self) -> Self::Output;
}

pub fn render_segments<R: SegmentRenderer>(segments: &[Segment], mut renderer: R) -> R::Output {
    for segment in segments {
        match (segment.kind, segment.tag.as_deref()) {
            (SegmentKind::Hashtag, Some(tag)) => {
                renderer.render_hashtag(&segment.display_text, tag)
            }
            _ => renderer.render_plain_text(&segment.display_text),
        }
    }

    renderer.finish()
}

pub const DEFAULT_HASHTAG_CLASS: &str = "hashtag";

/// Renders segments to an HTML fragment. Plain text is escaped; hashtags are
/// wrapped in a `span` carrying the tag in `data-tag` for click binding.
pub struct HtmlRenderer {
    hashtag_class: String,
    output: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_HASHTAG_CLASS)
    }
}

impl HtmlRenderer {
    pub fn new(hashtag_class: &str) -> Self {
        Self {
            hashtag_class: hashtag_class.to_string(),
            output: String::new(),
        }
    }
}

impl SegmentRenderer for HtmlRenderer {
    type Output = String;

    fn render_plain_text(&mut self, text: &str) {
        push_escaped(&mut self.output, text);
    }

    fn render_hashtag(&mut self, display_text: &str, tag: &str) {
        self.output.push_str("<span class=\"");
        push_escaped(&mut self.output, &self.hashtag_class);
        self.output.push_str("\" data-tag=\"");
        push_escaped(&mut self.output, tag);
        self.output.push_str("\">");
        push_escaped(&mut self.output, display_text);
        self.output.push_str("</span>");
    }

    fn finish(self) -> String {
        self.output
    }
}

fn push_escaped(output: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            _ => output.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tokenizer;

    #[test]
    fn test_html_renderer_escapes_and_wraps() {
        let segments = Tokenizer::hashtag_parser().tokenize("a<b> #Rust & co");
        let html = render_segments(&segments, HtmlRenderer::default());

        assert_eq!(
            html,
            "a&lt;b&gt; <span class=\"hashtag\" data-tag=\"Rust\">#Rust</span> &amp; co"
        );
    }
}
