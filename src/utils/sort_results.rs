use crate::models::TrendEntry;
use crate::types::TagFrequencies;

/// Ranks tag frequencies into at most `limit` trend entries.
///
/// ### Sorting Order:
/// - **Primary:** count, descending.
/// - **Secondary:** the input order. The sort is stable, so tags with equal
///   counts keep the first-seen order produced by `count_tag_frequencies`.
pub fn sort_results(frequencies: TagFrequencies, limit: usize) -> Vec<TrendEntry> {
    let mut sorted_results = frequencies;

    sorted_results.sort_by(|a, b| b.1.cmp(&a.1));
    sorted_results.truncate(limit);

    sorted_results
        .into_iter()
        .map(|(tag, count)| TrendEntry { tag, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frequencies(pairs: &[(&str, usize)]) -> TagFrequencies {
        pairs
            .iter()
            .map(|(tag, count)| (tag.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let sorted = sort_results(frequencies(&[("b", 1), ("a", 2), ("c", 1)]), 5);
        let tags: Vec<&str> = sorted.iter().map(|entry| entry.tag.as_str()).collect();
        assert_eq!(tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let sorted = sort_results(
            frequencies(&[("a", 1), ("b", 1), ("c", 1), ("d", 1)]),
            2,
        );
        assert_eq!(sorted.len(), 2);
    }

    #[test]
    fn test_zero_limit() {
        assert!(sort_results(frequencies(&[("a", 1)]), 0).is_empty());
    }
}
