use crate::constants::DEFAULT_TREND_LIMIT;
use crate::models::TrendAggregatorConfig;

pub const DEFAULT_TREND_AGGREGATOR_CONFIG: TrendAggregatorConfig = TrendAggregatorConfig {
    trend_limit: DEFAULT_TREND_LIMIT,
};
