//! Report structures returned by the [`StrategyEngine`](crate::StrategyEngine).
//!
//! Reports borrow the stint records they were built from and serialize to
//! plain nested maps and sequences. Maps are ordered, so serializing the same
//! report twice yields identical output.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::analysis::{PitStopTiming, StrategyRanking};
use crate::types::{CompoundStats, DriverStrategy, StintDegradation, StintPerformance, StintRecord};

/// Whole-session strategy analysis.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RaceStrategyReport<'a> {
    /// One entry per driver, in finishing order
    pub driver_strategies: Vec<DriverStrategy<'a>>,
    pub compound_performance: BTreeMap<String, CompoundStats>,
    pub pit_stop_timing: PitStopTiming,
    pub optimal_strategies: StrategyRanking<'a>,
    pub summary: RaceSummary,
}

/// Headline numbers for a session.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct RaceSummary {
    pub total_drivers: usize,
    /// Drivers per stop count
    pub strategy_distribution: BTreeMap<u32, usize>,
    /// Number of different stop counts used
    pub distinct_stop_counts: usize,
    /// Compound with the lowest average lap time
    pub fastest_compound: Option<String>,
    pub fastest_compound_avg_time: Option<f64>,
}

impl RaceSummary {
    /// Summarise strategies and compound stats.
    ///
    /// On equal averages the alphabetically first compound wins.
    pub fn new(strategies: &[DriverStrategy<'_>], compounds: &BTreeMap<String, CompoundStats>) -> Self {
        let mut strategy_distribution = BTreeMap::new();
        for strategy in strategies {
            *strategy_distribution.entry(strategy.num_stops).or_insert(0) += 1;
        }

        let mut fastest: Option<&CompoundStats> = None;
        for stats in compounds.values() {
            if fastest.is_none_or(|best| stats.avg_lap_time < best.avg_lap_time) {
                fastest = Some(stats);
            }
        }

        Self {
            total_drivers: strategies.len(),
            distinct_stop_counts: strategy_distribution.len(),
            strategy_distribution,
            fastest_compound: fastest.map(|s| s.compound.clone()),
            fastest_compound_avg_time: fastest.map(|s| s.avg_lap_time),
        }
    }
}

/// Single-driver deep dive.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DriverStrategyReport<'a> {
    /// Uppercased driver code
    pub driver: String,
    pub total_stints: usize,
    pub stints: Vec<&'a StintRecord>,
    pub strategy: DriverStrategy<'a>,
    pub degradation_analysis: Vec<StintDegradation>,
    pub stint_performance: Vec<StintPerformance>,
}
