use flate2::write::GzEncoder;
use flate2::Compression;
use hashtag_trends::{SeedPosts, SourceGroup, StaticSourceGroup, TrendAggregator};
use std::io::Write;

fn gzip(data: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data.as_bytes())
        .expect("Failed to compress test data");
    encoder.finish().expect("Failed to finalize compression")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "embed-seed")]
    fn test_embedded_seed_posts_decode() {
        let contents = SeedPosts::embedded()
            .read_contents()
            .expect("Embedded seed posts should decode");

        assert_eq!(contents.len(), 3);
        assert!(contents[0].contains("#React"));
    }

    #[test]
    #[cfg(feature = "embed-seed")]
    fn test_embedded_seed_trends() {
        let seed_posts = SeedPosts::embedded();

        let mut aggregator = TrendAggregator::new();
        let tags: Vec<String> = aggregator
            .recompute(&[&seed_posts])
            .iter()
            .map(|trend| trend.tag.clone())
            .collect();

        assert_eq!(
            tags,
            vec![
                "react",
                "programación",
                "javascript",
                "desarrollo",
                "naturaleza"
            ]
        );
    }

    #[test]
    fn test_custom_seed_payload() {
        let seed_posts =
            SeedPosts::from_compressed(gzip("Author,Content\nana,\"hola #mundo, #Mundo\"\n"));

        assert_eq!(seed_posts.read_contents().unwrap(), vec!["hola #mundo, #Mundo"]);
    }

    #[test]
    fn test_malformed_record_skips_only_that_record() {
        let seed_posts =
            SeedPosts::from_compressed(gzip("Author,Content\nana,#one\nbad\nbob,#two\n"));

        let entries = seed_posts.read_entries().expect("Header and payload are readable");
        assert_eq!(entries.len(), 3);
        assert!(entries[1].is_err());

        assert_eq!(seed_posts.read_contents().unwrap(), vec!["#one", "#two"]);

        let mut aggregator = TrendAggregator::new();
        let tags: Vec<(String, usize)> = aggregator
            .recompute(&[&seed_posts])
            .iter()
            .map(|trend| (trend.tag.clone(), trend.count))
            .collect();

        assert_eq!(tags, vec![("one".to_string(), 1), ("two".to_string(), 1)]);
    }

    #[test]
    fn test_missing_content_column_is_an_error() {
        let seed_posts = SeedPosts::from_compressed(gzip("Author,Body\nana,#nope\n"));

        assert!(seed_posts.texts().is_err());
    }

    #[test]
    fn test_corrupt_seed_payload_is_skipped_by_aggregator() {
        let corrupt = SeedPosts::from_compressed(b"definitely not gzip".to_vec());
        let posts = StaticSourceGroup::new("posts", ["#survivor"]);

        assert!(corrupt.read_contents().is_err());

        let mut aggregator = TrendAggregator::new();
        let trends = aggregator.recompute(&[&corrupt, &posts]);

        assert_eq!(trends.len(), 1);
        assert_eq!(trends[0].tag, "survivor");
    }
}
