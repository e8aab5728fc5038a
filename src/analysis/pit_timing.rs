//! Pit stop clustering by lap

use serde::Serialize;
use std::collections::BTreeMap;

use crate::types::{PitWindow, StintRecord};

/// Number of windows reported by default.
pub const DEFAULT_PIT_WINDOWS: usize = 5;

/// Pit stops per lap across all drivers.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PitStopTiming {
    /// Stops tallied by the lap they lead into
    pub pit_stops_by_lap: BTreeMap<u32, u32>,
    /// Busiest laps, most stops first, lower lap first on ties
    pub most_common_windows: Vec<PitWindow>,
}

impl PitStopTiming {
    /// Total stops counted.
    pub fn total_stops(&self) -> u32 {
        self.pit_stops_by_lap.values().sum()
    }
}

/// Tally pit stops by lap.
///
/// Every stint after a driver's first one starts with a stop, so its start
/// lap is counted.
pub fn pit_stop_timing(stints: &[StintRecord], window_count: usize) -> PitStopTiming {
    let mut pit_stops_by_lap: BTreeMap<u32, u32> = BTreeMap::new();
    for stint in stints.iter().filter(|s| s.stint > 1) {
        *pit_stops_by_lap.entry(stint.start_lap).or_insert(0) += 1;
    }

    let mut most_common_windows: Vec<PitWindow> =
        pit_stops_by_lap.iter().map(|(&lap, &count)| PitWindow { lap, count }).collect();
    most_common_windows.sort_by(|a, b| b.count.cmp(&a.count).then(a.lap.cmp(&b.lap)));
    most_common_windows.truncate(window_count);

    PitStopTiming { pit_stops_by_lap, most_common_windows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stint(driver: &str, n: u32, start: u32) -> StintRecord {
        StintRecord::new(driver, n, None, start, start + 10).unwrap()
    }

    #[test]
    fn opening_stints_are_not_stops() {
        let stints = vec![stint("VER", 1, 1), stint("HAM", 1, 1), stint("VER", 2, 18)];
        let timing = pit_stop_timing(&stints, DEFAULT_PIT_WINDOWS);

        assert_eq!(timing.total_stops(), 1);
        assert_eq!(timing.pit_stops_by_lap.get(&18), Some(&1));
        assert!(!timing.pit_stops_by_lap.contains_key(&1));
    }

    #[test]
    fn windows_sorted_by_count_then_lap() {
        let stints = vec![
            stint("A", 2, 20),
            stint("B", 2, 15),
            stint("C", 2, 20),
            stint("D", 2, 30),
            stint("E", 2, 15),
            stint("F", 2, 10),
            stint("G", 2, 12),
            stint("H", 2, 11),
            stint("I", 2, 40),
        ];
        let timing = pit_stop_timing(&stints, 5);

        let laps: Vec<u32> = timing.most_common_windows.iter().map(|w| w.lap).collect();
        assert_eq!(laps, vec![15, 20, 10, 11, 12]);
        assert_eq!(timing.most_common_windows[0].count, 2);
    }

    #[test]
    fn no_stops_no_windows() {
        let timing = pit_stop_timing(&[stint("VER", 1, 1)], 5);
        assert!(timing.pit_stops_by_lap.is_empty());
        assert!(timing.most_common_windows.is_empty());
    }

    proptest! {
        #[test]
        fn prop_window_order_is_deterministic(
            starts in prop::collection::vec((2u32..4, 2u32..60), 0..80),
        ) {
            let stints: Vec<StintRecord> = starts
                .iter()
                .enumerate()
                .map(|(i, (n, start))| stint(&format!("D{i}"), *n, *start))
                .collect();

            let first = pit_stop_timing(&stints, 5);
            let mut reversed = stints.clone();
            reversed.reverse();
            let second = pit_stop_timing(&reversed, 5);
            prop_assert_eq!(&first, &second);

            for pair in first.most_common_windows.windows(2) {
                prop_assert!(
                    pair[0].count > pair[1].count
                        || (pair[0].count == pair[1].count && pair[0].lap < pair[1].lap)
                );
            }
            prop_assert_eq!(first.total_stops() as usize, stints.len());
        }
    }
}
