#![allow(dead_code)] // Not every test binary uses every helper

use hashtag_trends::{SourceGroup, StaticSourceGroup, TrendAggregator, TrendEntry};
use std::fs;
use std::path::Path;

pub const DEFAULT_GROUP_NAME: &str = "default";

/// Source groups and expected trends parsed from a fixture file.
///
/// Fixture lines:
/// - `GROUP: <name>` starts a new source group
/// - `EXPECTED: <tag> <count>` appends an expected trend, in rank order
/// - `COMMENT: ...` is ignored
/// - anything else non-empty is one text field of the current group
pub struct Fixture {
    pub groups: Vec<StaticSourceGroup>,
    pub expected: Vec<TrendEntry>,
}

impl Fixture {
    pub fn group_refs(&self) -> Vec<&dyn SourceGroup> {
        self.groups
            .iter()
            .map(|group| group as &dyn SourceGroup)
            .collect()
    }
}

pub fn load_fixture(file_path: &Path) -> Fixture {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    let mut groups: Vec<StaticSourceGroup> = Vec::new();
    let mut expected = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with("COMMENT:") {
            continue;
        }

        if let Some(name) = trimmed.strip_prefix("GROUP:") {
            groups.push(StaticSourceGroup::new(name.trim(), Vec::<String>::new()));
        } else if let Some(entry) = trimmed.strip_prefix("EXPECTED:") {
            let (tag, count) = entry
                .trim()
                .rsplit_once(' ')
                .expect("EXPECTED lines must be `<tag> <count>`");

            expected.push(TrendEntry {
                tag: tag.trim().to_string(),
                count: count.parse().expect("EXPECTED count must be an integer"),
            });
        } else {
            if groups.is_empty() {
                groups.push(StaticSourceGroup::new(DEFAULT_GROUP_NAME, Vec::<String>::new()));
            }

            if let Some(group) = groups.last_mut() {
                group.push(line);
            }
        }
    }

    Fixture { groups, expected }
}

/// Recomputes trends for a fixture and asserts they match its expectations
/// exactly, including order.
pub fn run_test_for_file(test_file_path: &Path) {
    let fixture = load_fixture(test_file_path);

    eprintln!("Testing file: {}", test_file_path.display());

    let mut aggregator = TrendAggregator::new();
    let trends = aggregator.recompute(&fixture.group_refs());

    assert_eq!(
        trends,
        fixture.expected.as_slice(),
        "Unexpected trends for {}",
        test_file_path.display()
    );
}
