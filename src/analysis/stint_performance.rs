//! Per-stint pace summary for a single driver

use crate::types::{LapRecord, StintPerformance, StintRecord};

use super::degradation::timed_laps_in;

/// Summarise pace for each stint, ordered by stint number.
///
/// `laps_completed` counts every lap inside the stint's range, timed or not.
/// Stints with no timed laps are left out.
pub fn stint_performance(stints: &[&StintRecord], laps: &[&LapRecord]) -> Vec<StintPerformance> {
    let mut ordered: Vec<&StintRecord> = stints.to_vec();
    ordered.sort_by_key(|s| s.stint);

    ordered
        .into_iter()
        .filter_map(|stint| {
            let lap_times = timed_laps_in(stint, laps);
            if lap_times.is_empty() {
                return None;
            }
            let laps_completed = laps.iter().filter(|lap| stint.contains_lap(lap.lap_number)).count();

            Some(StintPerformance {
                stint: stint.stint,
                compound: stint.compound.clone(),
                laps_completed,
                avg_lap_time: lap_times.iter().sum::<f64>() / lap_times.len() as f64,
                fastest_lap: lap_times.iter().copied().fold(f64::INFINITY, f64::min),
                slowest_lap: lap_times.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            })
        })
        .collect()
}
