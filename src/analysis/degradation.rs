//! Intra-stint lap time decay

use crate::types::{LapRecord, StintDegradation, StintRecord};

/// Timed laps needed before a stint is analysed. Fewer laps give a
/// noise-dominated slope.
pub const MIN_DEGRADATION_LAPS: usize = 3;

/// Compute lap time degradation for each of one driver's stints.
///
/// For every stint the timed laps inside `start_lap..=end_lap` are taken in
/// lap order. Stints with fewer than `min_laps` timed laps are left out of the
/// result. Output is ordered by stint number.
pub fn tire_degradation(stints: &[&StintRecord], laps: &[&LapRecord], min_laps: usize) -> Vec<StintDegradation> {
    let mut ordered: Vec<&StintRecord> = stints.to_vec();
    ordered.sort_by_key(|s| s.stint);

    ordered
        .into_iter()
        .filter_map(|stint| {
            let lap_times = timed_laps_in(stint, laps);
            if lap_times.len() < min_laps.max(1) {
                return None;
            }

            let num_laps = lap_times.len();
            let first_lap_time = lap_times[0];
            let last_lap_time = lap_times[num_laps - 1];
            let total_degradation = last_lap_time - first_lap_time;

            Some(StintDegradation {
                stint: stint.stint,
                compound: stint.compound.clone(),
                num_laps,
                first_lap_time,
                last_lap_time,
                total_degradation,
                degradation_per_lap: total_degradation / num_laps as f64,
                avg_lap_time: lap_times.iter().sum::<f64>() / num_laps as f64,
            })
        })
        .collect()
}

/// Lap times inside a stint's range, in lap order, untimed laps dropped.
pub(crate) fn timed_laps_in(stint: &StintRecord, laps: &[&LapRecord]) -> Vec<f64> {
    let mut in_stint: Vec<(u32, f64)> = laps
        .iter()
        .filter(|lap| stint.contains_lap(lap.lap_number))
        .filter_map(|lap| Some((lap.lap_number, lap.lap_time_seconds?)))
        .collect();
    in_stint.sort_by_key(|(lap_number, _)| *lap_number);
    in_stint.into_iter().map(|(_, time)| time).collect()
}
