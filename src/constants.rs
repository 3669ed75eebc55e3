/// A hashtag is `#` followed by one or more tag characters: ASCII letters,
/// digits, underscore, and U+00C0..=U+017F (accented Latin letters).
///
/// The class is spelled out explicitly so matching never depends on locale or
/// Unicode property tables. Capture group 1 is the tag without `#`.
pub const HASHTAG_PATTERN: &str = r"#([A-Za-z0-9_\x{00C0}-\x{017F}]+)";

pub const HASHTAG_PREFIX: char = '#';

pub const DEFAULT_TREND_LIMIT: usize = 5;

/// Store key holding a JSON array of posts.
pub const POSTS_STORE_KEY: &str = "posts";

/// Store key holding a JSON object of post id to an array of comments.
pub const COMMENTS_STORE_KEY: &str = "postComments";

/// Prefix of store keys each holding one JSON profile.
pub const PROFILE_STORE_KEY_PREFIX: &str = "profile_";

pub const SEED_POSTS_CONTENT_COLUMN: &str = "Content";
