use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use std::borrow::Cow;

use crate::constants::SEED_POSTS_CONTENT_COLUMN;
use crate::models::SourceGroup;
use crate::types::SourceTexts;
use crate::Error;

// Gzipped `data/seed_posts.csv`, written by `build.rs`
#[cfg(feature = "embed-seed")]
const COMPRESSED_SEED_POSTS: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/seed_posts.csv.gz"));

/// The fixed demo posts shown to every visitor, as a source group.
///
/// Data is a gzipped CSV with a `Content` column. It is decoded on every scan.
/// A corrupt payload makes the whole group unavailable, while a malformed
/// record only drops that record.
#[derive(Debug, Clone)]
pub struct SeedPosts {
    compressed: Cow<'static, [u8]>,
}

impl SeedPosts {
    #[cfg(feature = "embed-seed")]
    pub fn embedded() -> Self {
        Self::from_compressed(COMPRESSED_SEED_POSTS)
    }

    pub fn from_compressed(compressed: impl Into<Cow<'static, [u8]>>) -> Self {
        Self {
            compressed: compressed.into(),
        }
    }

    /// Decodes every record, keeping malformed records as individual errors.
    ///
    /// Fails as a whole only when the payload cannot be decompressed or has no
    /// `Content` column.
    pub fn read_entries(&self) -> Result<Vec<Result<String, Error>>, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(GzDecoder::new(&self.compressed[..]));

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        let content_position = headers
            .iter()
            .position(|header| header == SEED_POSTS_CONTENT_COLUMN)
            .ok_or_else(|| {
                Error::ParserError(format!("Missing '{}' column", SEED_POSTS_CONTENT_COLUMN))
            })?;

        let mut entries = Vec::new();

        for record in reader.records() {
            match record {
                Ok(record) => {
                    if let Some(content) = record.get(content_position) {
                        entries.push(Ok(content.to_string()));
                    }
                }
                // A broken gzip stream cannot be resynchronized
                Err(e) if e.is_io_error() => {
                    return Err(Error::ParserError(format!("Failed to decompress: {}", e)));
                }
                Err(e) => {
                    entries.push(Err(Error::ParserError(format!("Failed to read record: {}", e))));
                }
            }
        }

        Ok(entries)
    }

    /// The readable post contents; malformed records are dropped.
    pub fn read_contents(&self) -> Result<Vec<String>, Error> {
        Ok(self.read_entries()?.into_iter().filter_map(Result::ok).collect())
    }
}

impl SourceGroup for SeedPosts {
    fn name(&self) -> &str {
        "seed_posts"
    }

    fn texts(&self) -> Result<SourceTexts<'_>, Error> {
        let entries = self.read_entries()?;

        Ok(Box::new(entries.into_iter().map(|entry| entry.map(Cow::<str>::Owned))))
    }
}
