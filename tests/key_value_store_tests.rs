use hashtag_trends::{
    KeyValueStoreSources, SourceGroup, StaticSourceGroup, StoreSourceGroup, StoreSourceKind,
    TrendAggregator, TrendEntry,
};
use std::collections::HashMap;

fn store(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn readable_texts<S: SourceGroup>(group: &S) -> Vec<String> {
    group
        .texts()
        .expect("group should be readable")
        .filter_map(Result::ok)
        .map(|text| text.into_owned())
        .collect()
}

fn entry(tag: &str, count: usize) -> TrendEntry {
    TrendEntry {
        tag: tag.to_string(),
        count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_has_no_texts() {
        let store = store(&[]);
        let sources = KeyValueStoreSources::new(&store);

        for group in sources.groups() {
            assert_eq!(group.texts().unwrap().count(), 0);
        }
    }

    #[test]
    fn test_reads_post_contents() {
        let store = store(&[(
            "posts",
            r##"[{"content":"I love #react"},{"content":null},{"id":3},42,{"content":"#React again"}]"##,
        )]);
        let posts = StoreSourceGroup::new(&store, StoreSourceKind::Posts);

        assert_eq!(posts.name(), "posts");
        assert_eq!(readable_texts(&posts), vec!["I love #react", "#React again"]);

        // `42` is not a post object
        let failures = posts.texts().unwrap().filter(Result::is_err).count();
        assert_eq!(failures, 1);
    }

    #[test]
    fn test_reads_comments_grouped_by_post() {
        let store = store(&[(
            "postComments",
            r##"{"1":[{"content":"#rust"}],"2":"oops","3":[{"content":"#Rust #go"},{"author":"x"}]}"##,
        )]);
        let comments = StoreSourceGroup::new(&store, StoreSourceKind::Comments);

        assert_eq!(readable_texts(&comments), vec!["#rust", "#Rust #go"]);
    }

    #[test]
    fn test_reads_profile_bios_only() {
        let store = store(&[
            ("profile_b", r##"{"bio":"#second"}"##),
            ("profile_a", r##"{"bio":"#first","name":"Ana"}"##),
            ("profile_c", "not json"),
            ("profile_d", r##"{"name":"no bio"}"##),
            ("settings", r##"{"bio":"#ignored"}"##),
        ]);
        let bios = StoreSourceGroup::new(&store, StoreSourceKind::Bios);

        assert_eq!(readable_texts(&bios), vec!["#first", "#second"]);
        assert_eq!(bios.texts().unwrap().filter(Result::is_err).count(), 1);
    }

    #[test]
    fn test_trends_from_store() {
        let store = store(&[
            (
                "posts",
                r##"[{"content":"I love #react"},42,{"content":"#React again"}]"##,
            ),
            (
                "postComments",
                r##"{"1":[{"content":"#rust"}],"2":"oops","3":[{"content":"#Rust #go"}]}"##,
            ),
            ("profile_a", r##"{"bio":"#go dev"}"##),
            ("profile_b", "{broken"),
        ]);
        let sources = KeyValueStoreSources::new(&store);

        let mut aggregator = TrendAggregator::new();
        let trends = aggregator.recompute(&sources.groups());

        assert_eq!(
            trends,
            &[entry("react", 2), entry("rust", 2), entry("go", 2)]
        );
    }

    #[test]
    fn test_seed_posts_scanned_after_stored_posts() {
        let store = store(&[
            ("profile_a", r##"{"bio":"#bio"}"##),
            ("postComments", r##"{"1":[{"content":"#comment"}]}"##),
            ("posts", r##"[{"content":"#post"}]"##),
        ]);
        let seed_posts = StaticSourceGroup::new("seed_posts", ["#seed"]);
        let sources = KeyValueStoreSources::new(&store);

        let mut aggregator = TrendAggregator::new();
        let trends = aggregator.recompute(&sources.groups_with_seed(&seed_posts));

        assert_eq!(
            trends,
            &[
                entry("post", 1),
                entry("seed", 1),
                entry("comment", 1),
                entry("bio", 1)
            ]
        );
    }

    #[test]
    fn test_malformed_posts_key_skips_only_posts() {
        let store = store(&[
            ("posts", "{not json"),
            ("postComments", r##"{"1":[{"content":"#kept"}]}"##),
        ]);
        let sources = KeyValueStoreSources::new(&store);

        assert!(sources.posts.texts().is_err());

        let mut aggregator = TrendAggregator::new();
        assert_eq!(aggregator.recompute(&sources.groups()), &[entry("kept", 1)]);
    }

    #[test]
    fn test_source_keys() {
        type Sources<'a> = KeyValueStoreSources<'a, HashMap<String, String>>;

        assert!(Sources::is_source_key("posts"));
        assert!(Sources::is_source_key("postComments"));
        assert!(Sources::is_source_key("profile_42"));
        assert!(!Sources::is_source_key("likes"));
        assert!(!Sources::is_source_key("following_42"));
    }
}
