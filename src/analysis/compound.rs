//! Lap time aggregation by tyre compound

use std::collections::BTreeMap;

use crate::types::{CompoundStats, LapRecord};

/// Aggregate lap times per compound.
///
/// Laps without a time or without a compound are skipped; a blank compound
/// label counts as no compound. A compound with no
/// timed laps never appears in the result.
pub fn compound_performance(laps: &[LapRecord]) -> BTreeMap<String, CompoundStats> {
    let mut sums: BTreeMap<&str, (CompoundStats, f64)> = BTreeMap::new();

    for (compound, lap_time) in laps.iter().filter_map(LapRecord::timed_compound) {
        match sums.get_mut(compound) {
            Some((stats, total)) => {
                stats.total_laps += 1;
                stats.fastest_lap = stats.fastest_lap.min(lap_time);
                stats.slowest_lap = stats.slowest_lap.max(lap_time);
                *total += lap_time;
            }
            None => {
                sums.insert(compound, (CompoundStats::first(compound, lap_time), lap_time));
            }
        }
    }

    sums.into_iter()
        .map(|(compound, (mut stats, total))| {
            stats.avg_lap_time = total / stats.total_laps as f64;
            (compound.to_string(), stats)
        })
        .collect()
}
