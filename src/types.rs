use std::borrow::Cow;

use crate::Error;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// A hashtag exactly as written in a source text, including the leading `#`
/// (e.g. `#Gatos`).
pub type Hashtag = String;

/// The canonical form of a hashtag: the characters following `#`, lowercased
/// (e.g. `gatos`). Two hashtags that differ only by case share one `Tag`.
pub type Tag = String;

/// The number of times a tag occurred across the scanned source texts.
pub type TagCount = usize;

/// Tag counts in the order each tag was first seen.
pub type TagFrequencies = Vec<(Tag, TagCount)>;

/// A single text field yielded by a source group, or the reason it could not
/// be read.
pub type SourceText<'a> = Result<Cow<'a, str>, Error>;

/// A lazy sequence of text fields belonging to one source group.
pub type SourceTexts<'a> = Box<dyn Iterator<Item = SourceText<'a>> + 'a>;
