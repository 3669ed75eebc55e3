#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_TREND_AGGREGATOR_CONFIG;
pub mod constants;
pub mod models;
pub use models::{
    compute_trends, render_segments, Error, FnSourceGroup, HashtagText, HtmlRenderer,
    KeyValueStore, KeyValueStoreSources, RecomputeTicket, SeedPosts, Segment, SegmentKind,
    SegmentRenderer, SourceGroup, StaticSourceGroup, StoreSourceGroup, StoreSourceKind,
    TagClickHandler, Tokenizer, TrendAggregator, TrendAggregatorConfig, TrendEntry,
};
pub mod types;
mod utils;
pub use types::{Hashtag, SourceText, SourceTexts, Tag, TagCount, TagFrequencies};
pub use utils::canonicalize_tag;

/// Extracts every hashtag in `text`, in order, including the leading `#` and
/// with case preserved.
pub fn extract_hashtags(text: &str) -> Vec<Hashtag> {
    Tokenizer::hashtag_parser().extract_hashtags(text)
}

/// Splits `text` into plain-text and hashtag segments.
pub fn tokenize(text: &str) -> Vec<Segment> {
    Tokenizer::hashtag_parser().tokenize(text)
}

/// Tokenizes `text` and renders it as an HTML fragment with the default
/// hashtag class.
pub fn render_html(text: &str) -> String {
    render_segments(&tokenize(text), HtmlRenderer::default())
}
