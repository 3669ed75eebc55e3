pub mod error;
pub use error::Error;

pub mod segment;
pub use segment::{Segment, SegmentKind};

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod hashtag_text;
pub use hashtag_text::{HashtagText, TagClickHandler};

pub mod segment_renderer;
pub use segment_renderer::{render_segments, HtmlRenderer, SegmentRenderer};

pub mod trend_entry;
pub use trend_entry::TrendEntry;

pub mod source_group;
pub use source_group::{FnSourceGroup, SourceGroup, StaticSourceGroup};

pub mod key_value_store_sources;
pub use key_value_store_sources::{
    KeyValueStore, KeyValueStoreSources, StoreSourceGroup, StoreSourceKind,
};

pub mod seed_posts;
pub use seed_posts::SeedPosts;

pub mod trend_aggregator;
pub use trend_aggregator::{
    compute_trends, RecomputeTicket, TrendAggregator, TrendAggregatorConfig,
};
