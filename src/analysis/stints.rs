//! Stint reconstruction from lap records
//!
//! Some timing sources only deliver laps. Each lap carries its stint number,
//! which is enough to rebuild the stint records.

use std::collections::BTreeMap;

use crate::types::{LapRecord, StintRecord};

/// Rebuild stint records from laps.
///
/// Laps are grouped by driver and stint number. A lap number repeated within
/// a stint is counted once, keeping the first record seen. The compound is
/// taken from the stint's earliest lap; the lap range spans the lowest to
/// highest lap number; the average covers timed laps only. Output is ordered
/// by driver code, then stint number.
pub fn derive_stints(laps: &[LapRecord]) -> Vec<StintRecord> {
    let mut grouped: BTreeMap<(&str, u32), Vec<&LapRecord>> = BTreeMap::new();
    for lap in laps {
        grouped.entry((lap.driver.as_str(), lap.stint)).or_default().push(lap);
    }

    grouped
        .into_iter()
        .map(|((driver, stint), mut stint_laps)| {
            stint_laps.sort_by_key(|lap| lap.lap_number);
            stint_laps.dedup_by_key(|lap| lap.lap_number);
            let first = stint_laps[0];
            let last = stint_laps[stint_laps.len() - 1];

            let times: Vec<f64> = stint_laps.iter().filter_map(|lap| lap.lap_time_seconds).collect();
            let avg_lap_time =
                (!times.is_empty()).then(|| times.iter().sum::<f64>() / times.len() as f64);

            StintRecord {
                driver: driver.to_string(),
                stint,
                compound: first.compound_label().map(str::to_string),
                start_lap: first.lap_number,
                end_lap: last.lap_number,
                num_laps: stint_laps.len() as u32,
                avg_lap_time,
            }
        })
        .collect()
}
