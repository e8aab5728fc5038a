//! Test utilities for building synthetic race sessions
//!
//! Sessions are generated deterministically so that tests and benchmarks see
//! identical records on every run.

#![cfg(any(test, feature = "benchmark"))]

use crate::session::SessionData;
use crate::types::{LapRecord, StintRecord};

/// Compounds cycled through by generated strategies.
pub const COMPOUNDS: [&str; 3] = ["SOFT", "MEDIUM", "HARD"];

/// Shape of a generated session.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticRace {
    pub drivers: usize,
    pub race_laps: u32,
    /// Base lap time of the fastest car, in seconds
    pub base_lap_time: f64,
}

impl Default for SyntheticRace {
    fn default() -> Self {
        Self { drivers: 20, race_laps: 57, base_lap_time: 92.0 }
    }
}

impl SyntheticRace {
    /// Generate the session.
    ///
    /// Driver `i` makes `i % 3` stops spread evenly through the race, loses
    /// `0.05 * i` seconds per lap to the leader, and gains 0.04s per lap of
    /// tyre age. Every seventh lap of every driver is left untimed. The last
    /// `i / 8` laps are not completed, so back markers finish laps down.
    pub fn build(&self) -> SessionData {
        let mut laps = Vec::new();
        let mut stints = Vec::new();

        for i in 0..self.drivers {
            let driver = driver_code(i);
            let completed = self.race_laps.saturating_sub((i / 8) as u32).max(1);
            let stops = (i % 3) as u32;
            let stint_len = (completed / (stops + 1)).max(1);

            let mut start = 1;
            for n in 1..=stops + 1 {
                let end = if n == stops + 1 { completed } else { (start + stint_len - 1).min(completed) };
                if start > end {
                    break;
                }
                let compound = COMPOUNDS[(i + n as usize) % COMPOUNDS.len()];

                for lap_number in start..=end {
                    let tyre_age = lap_number - start + 1;
                    let mut lap = LapRecord::new(&driver, lap_number, n)
                        .expect("generated lap is valid")
                        .with_compound(compound)
                        .with_tyre_life(tyre_age);
                    if lap_number % 7 != 0 {
                        let time = self.base_lap_time + 0.05 * i as f64 + 0.04 * tyre_age as f64;
                        lap = lap.with_lap_time(time).expect("generated lap time is valid");
                    }
                    laps.push(lap);
                }

                stints.push(
                    StintRecord::new(&driver, n, Some(compound.to_string()), start, end)
                        .expect("generated stint is valid"),
                );
                start = end + 1;
            }
        }

        SessionData::new(laps, stints)
    }
}

/// Three-letter code for the `index`th generated driver: AAA, AAB, ...
pub fn driver_code(index: usize) -> String {
    let letter = |n: usize| (b'A' + (n % 26) as u8) as char;
    [letter(index / 676), letter(index / 26), letter(index)].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::check_stint_sequence;

    #[test]
    fn generated_session_is_consistent() {
        let session = SyntheticRace::default().build();

        assert!(check_stint_sequence(&session.stints).is_ok());
        for stint in &session.stints {
            let laps_in_stint = session
                .laps
                .iter()
                .filter(|l| l.driver == stint.driver && stint.contains_lap(l.lap_number))
                .count();
            assert_eq!(laps_in_stint as u32, stint.num_laps);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let race = SyntheticRace { drivers: 6, race_laps: 30, base_lap_time: 80.0 };
        assert_eq!(race.build(), race.build());
    }

    #[test]
    fn driver_codes_are_unique() {
        let codes: std::collections::BTreeSet<String> = (0..100).map(driver_code).collect();
        assert_eq!(codes.len(), 100);
        assert_eq!(driver_code(0), "AAA");
        assert_eq!(driver_code(27), "ABB");
    }
}
