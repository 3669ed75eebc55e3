use log::{debug, trace, warn};

use crate::config::DEFAULT_TREND_AGGREGATOR_CONFIG;
use crate::models::{SourceGroup, Tokenizer, TrendEntry};
use crate::types::Tag;
use crate::utils::{count_tag_frequencies, sort_results};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendAggregatorConfig {
    /// Maximum number of entries kept in the ranked list.
    pub trend_limit: usize,
}

impl Default for TrendAggregatorConfig {
    fn default() -> Self {
        DEFAULT_TREND_AGGREGATOR_CONFIG
    }
}

/// Identifies one recompute request. Only the most recently issued ticket may
/// publish its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecomputeTicket {
    generation: u64,
}

/// Owns the most recently computed trend list.
///
/// The list starts empty and is replaced wholesale by each recompute. There
/// is no scheduling here: the host decides when to call `recompute` (page
/// load, timer, storage change, new post).
pub struct TrendAggregator {
    config: TrendAggregatorConfig,
    trends: Vec<TrendEntry>,
    issued_generation: u64,
}

impl Default for TrendAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendAggregator {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_TREND_AGGREGATOR_CONFIG)
    }

    pub fn with_config(config: TrendAggregatorConfig) -> Self {
        Self {
            config,
            trends: Vec::new(),
            issued_generation: 0,
        }
    }

    pub fn config(&self) -> &TrendAggregatorConfig {
        &self.config
    }

    /// The last published trend list; empty until the first recompute.
    pub fn trends(&self) -> &[TrendEntry] {
        &self.trends
    }

    /// Rescans every group and replaces the cached trend list.
    pub fn recompute(&mut self, groups: &[&dyn SourceGroup]) -> &[TrendEntry] {
        let ticket = self.begin_recompute();
        let trends = compute_trends(groups, &self.config);
        self.complete_recompute(ticket, trends);

        &self.trends
    }

    /// Starts a recompute whose scan runs elsewhere (e.g. an async task over
    /// real I/O). Issuing a new ticket supersedes every earlier one.
    pub fn begin_recompute(&mut self) -> RecomputeTicket {
        self.issued_generation += 1;

        RecomputeTicket {
            generation: self.issued_generation,
        }
    }

    /// Publishes `trends` if `ticket` is still the latest one issued.
    ///
    /// Returns `false`, leaving the cached list untouched, for a superseded
    /// ticket.
    pub fn complete_recompute(&mut self, ticket: RecomputeTicket, trends: Vec<TrendEntry>) -> bool {
        if ticket.generation != self.issued_generation {
            debug!(
                "Dropping superseded trend result (generation {} < {})",
                ticket.generation, self.issued_generation
            );
            return false;
        }

        self.trends = trends;
        true
    }
}

/// Scans every text field of every group and ranks the hashtags found.
///
/// Each occurrence counts, so `"#x #x"` contributes 2 to `x`. Unreadable
/// groups and entries are logged and skipped; they never abort the scan.
pub fn compute_trends(
    groups: &[&dyn SourceGroup],
    config: &TrendAggregatorConfig,
) -> Vec<TrendEntry> {
    let tokenizer = Tokenizer::hashtag_parser();
    let mut tags: Vec<Tag> = Vec::new();

    for group in groups {
        let texts = match group.texts() {
            Ok(texts) => texts,
            Err(err) => {
                warn!("Skipping source group `{}`: {}", group.name(), err);
                continue;
            }
        };

        let mut scanned = 0;
        let mut skipped = 0;

        for text in texts {
            match text {
                Ok(text) => {
                    tags.extend(tokenizer.extract_tags(&text));
                    scanned += 1;
                }
                Err(err) => {
                    warn!("Skipping entry in source group `{}`: {}", group.name(), err);
                    skipped += 1;
                }
            }
        }

        trace!(
            "Scanned {} text(s) from source group `{}` ({} skipped)",
            scanned,
            group.name(),
            skipped
        );
    }

    let total_occurrences = tags.len();
    let trends = sort_results(count_tag_frequencies(tags), config.trend_limit);

    debug!(
        "Computed {} trend(s) from {} hashtag occurrence(s) across {} source group(s)",
        trends.len(),
        total_occurrences,
        groups.len()
    );

    trends
}
