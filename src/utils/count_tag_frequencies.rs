use crate::types::{Tag, TagFrequencies};
use std::collections::HashMap;

/// Counts every occurrence of each tag.
///
/// The same tag appearing twice counts twice. Entries are returned in the
/// order each tag was first seen, which `sort_results` relies on for
/// tie-breaking.
pub fn count_tag_frequencies<I>(tags: I) -> TagFrequencies
where
    I: IntoIterator<Item = Tag>,
{
    let mut frequencies: TagFrequencies = Vec::new();
    let mut positions: HashMap<Tag, usize> = HashMap::new();

    for tag in tags {
        match positions.get(&tag) {
            Some(&position) => frequencies[position].1 += 1,
            None => {
                positions.insert(tag.clone(), frequencies.len());
                frequencies.push((tag, 1));
            }
        }
    }

    frequencies
}
