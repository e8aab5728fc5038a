//! Race strategy analytics from lap and tyre stint records.
//!
//! Stintlab takes the raw per-lap timing records and tyre stint records of a
//! completed session and derives pit-stop strategies, tyre compound
//! performance, degradation across stints, and a ranking of which strategy
//! pattern produced the best result.
//!
//! # Features
//!
//! - **Pure analysis**: every analyzer is a side-effect-free function over
//!   borrowed records, safe to call concurrently for any number of sessions
//! - **Typed records**: [`LapRecord`] and [`StintRecord`] validate their invariants
//! - **Stable output**: reports use ordered maps and deterministic tie-breaks,
//!   so identical inputs serialize identically
//! - **Provider seam**: [`SessionDataProvider`] abstracts where records come from
//!
//! # Quick Start
//!
//! ```rust
//! use stintlab::{LapRecord, StintRecord, StrategyEngine};
//!
//! # fn main() -> stintlab::Result<()> {
//! let stints = vec![
//!     StintRecord::new("VER", 1, Some("MEDIUM".into()), 1, 20)?,
//!     StintRecord::new("VER", 2, Some("HARD".into()), 21, 40)?,
//! ];
//! let laps = vec![
//!     LapRecord::new("VER", 1, 1)?.with_compound("MEDIUM").with_lap_time(90.1)?,
//!     LapRecord::new("VER", 21, 2)?.with_compound("HARD").with_lap_time(91.4)?,
//! ];
//!
//! let engine = StrategyEngine::default();
//! let report = engine.analyze_race(&laps, &stints)?;
//! assert_eq!(report.driver_strategies[0].strategy_name, "1-stop (MEDIUM-HARD)");
//!
//! let driver = engine.analyze_driver(&laps, &stints, "ver")?;
//! assert_eq!(driver.total_stints, 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Finishing order
//!
//! Strategy ranking needs a finishing order. By default drivers are ordered by
//! laps completed, an approximation that cannot separate cars on the same lap.
//! When the official classification is known, pass it through
//! [`StrategyEngine::analyze_race_classified`] or configure
//! [`FinishingOrder::Classified`].

// Core types and error handling
pub mod analysis;
mod config;
mod engine;
mod error;
pub mod report;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

// Data sources
pub mod provider;
pub mod providers;
mod session;

// Core exports
pub use analysis::FinishingOrder;
pub use config::AnalysisConfig;
pub use engine::StrategyEngine;
pub use error::*;
pub use report::{DriverStrategyReport, RaceStrategyReport, RaceSummary};
pub use types::*;

// Data source exports
pub use provider::{SessionDataProvider, SessionId};
pub use providers::FixtureProvider;
pub use session::SessionData;

/// Analyse a whole session with the default configuration.
///
/// Shorthand for `StrategyEngine::default().analyze_race(laps, stints)`.
pub fn analyze_race<'a>(laps: &[LapRecord], stints: &'a [StintRecord]) -> Result<RaceStrategyReport<'a>> {
    StrategyEngine::default().analyze_race(laps, stints)
}

/// Analyse one driver with the default configuration.
///
/// Shorthand for `StrategyEngine::default().analyze_driver(laps, stints, driver)`.
pub fn analyze_driver<'a>(
    laps: &[LapRecord],
    stints: &'a [StintRecord],
    driver: &str,
) -> Result<DriverStrategyReport<'a>> {
    StrategyEngine::default().analyze_driver(laps, stints, driver)
}
