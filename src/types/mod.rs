//! Core types for session records and derived strategy data.
//!
//! ## Architecture
//!
//! - [`LapRecord`] and [`StintRecord`] are the normalized inputs supplied by a
//!   session data provider. Constructors validate their invariants.
//! - [`DriverStrategy`] and [`StrategyGroup`] are borrowed views over stint
//!   records, built fresh for each report.
//! - [`CompoundStats`], [`StintDegradation`], [`StintPerformance`] and
//!   [`PitWindow`] are owned aggregates.
//!
//! ## Usage Example
//!
//! ```rust
//! use stintlab::types::{DriverStrategy, StintRecord};
//!
//! let stints = vec![
//!     StintRecord::new("VER", 1, Some("MEDIUM".into()), 1, 20).unwrap(),
//!     StintRecord::new("VER", 2, Some("HARD".into()), 21, 40).unwrap(),
//! ];
//!
//! let strategy = DriverStrategy::from_stints("VER", stints.iter().collect()).unwrap();
//! assert_eq!(strategy.strategy_name, "1-stop (MEDIUM-HARD)");
//! assert_eq!(strategy.total_laps, 40);
//! ```

mod lap;
mod stats;
mod stint;
mod strategy;

pub use lap::LapRecord;
pub use stats::{CompoundStats, PitWindow, StintDegradation, StintPerformance};
pub use stint::{StintRecord, check_stint_sequence};
pub use strategy::{DriverStrategy, StrategyGroup, strategy_signature};

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    prop_compose! {
        fn arb_stint_plan()(
            lengths in prop::collection::vec(1u32..30, 1..5),
            compounds in prop::collection::vec(
                prop::option::weighted(0.9, prop::sample::select(vec!["SOFT", "MEDIUM", "HARD", "INTERMEDIATE"])),
                5,
            ),
        ) -> Vec<StintRecord> {
            let mut start = 1;
            lengths
                .iter()
                .enumerate()
                .map(|(i, len)| {
                    let end = start + len - 1;
                    let compound = compounds[i].map(str::to_string);
                    let stint = StintRecord::new("TST", i as u32 + 1, compound, start, end).unwrap();
                    start = end + 1;
                    stint
                })
                .collect()
        }
    }

    proptest! {
        #[test]
        fn prop_stops_are_stints_minus_one(stints in arb_stint_plan()) {
            let strategy = DriverStrategy::from_stints("TST", stints.iter().collect()).unwrap();

            prop_assert_eq!(strategy.num_stops as usize, strategy.stint_count() - 1);
            let expected_prefix = format!("{}-stop (", strategy.num_stops);
            prop_assert!(strategy.strategy_name.starts_with(&expected_prefix));
            // One segment per stint, even when compounds are missing
            let inner = &strategy.strategy_name[strategy.strategy_name.find('(').unwrap() + 1..strategy.strategy_name.len() - 1];
            prop_assert_eq!(inner.split('-').count(), stints.len());
        }

        #[test]
        fn prop_generated_plans_are_valid_sequences(stints in arb_stint_plan()) {
            prop_assert!(check_stint_sequence(&stints).is_ok());
            let strategy = DriverStrategy::from_stints("TST", stints.iter().collect()).unwrap();
            prop_assert_eq!(strategy.total_laps, stints.last().unwrap().end_lap);
        }
    }
}
