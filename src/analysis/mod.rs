//! Strategy analyzers.
//!
//! Every analyzer is a pure function over borrowed records. None of them
//! fail: records missing the field an analyzer needs are skipped, and a
//! sub-result with nothing to report is simply absent from its map or list.
//!
//! | Analyzer | Input | Output |
//! |----------|-------|--------|
//! | [`compound_performance`] | all laps | stats per compound |
//! | [`tire_degradation`] | one driver's stints and laps | decay per stint |
//! | [`pit_stop_timing`] | all stints | stops per lap, busiest laps |
//! | [`driver_strategies`] | all stints | strategy per driver, finishing order |
//! | [`rank_strategies`] | ordered strategies | groups by mean position |
//! | [`stint_performance`] | one driver's stints and laps | pace per stint |

mod compound;
mod degradation;
mod pit_timing;
mod ranking;
mod stint_performance;
mod stints;
mod strategy;

pub use compound::compound_performance;
pub use degradation::{MIN_DEGRADATION_LAPS, tire_degradation};
pub use pit_timing::{DEFAULT_PIT_WINDOWS, PitStopTiming, pit_stop_timing};
pub use ranking::{StrategyRanking, rank_strategies};
pub use stint_performance::stint_performance;
pub use stints::derive_stints;
pub use strategy::{FinishingOrder, apply_finishing_order, driver_strategies};
