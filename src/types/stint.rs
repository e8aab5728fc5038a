//! Per-stint tyre records
//!
//! A [`StintRecord`] describes one continuous run on one set of tyres. For a
//! given driver the stints are contiguous and non-overlapping when ordered by
//! stint number; [`check_stint_sequence`] verifies that across records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{Result, StrategyError};

/// One continuous tyre usage by one driver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct StintRecord {
    /// Driver abbreviation
    pub driver: String,
    /// Stint number, starting at 1, strictly increasing per driver
    pub stint: u32,
    /// Tyre compound label; absent when the provider did not report it
    #[serde(default)]
    pub compound: Option<String>,
    /// First lap of the stint
    pub start_lap: u32,
    /// Last lap of the stint (inclusive)
    pub end_lap: u32,
    /// Laps recorded in the stint
    pub num_laps: u32,
    /// Mean lap time across the stint's timed laps
    #[serde(default)]
    pub avg_lap_time: Option<f64>,
}

impl StintRecord {
    /// Create a stint covering `start_lap..=end_lap`.
    ///
    /// The lap count defaults to the length of the range.
    pub fn new(
        driver: impl Into<String>,
        stint: u32,
        compound: Option<String>,
        start_lap: u32,
        end_lap: u32,
    ) -> Result<Self> {
        let num_laps = end_lap.saturating_sub(start_lap).saturating_add(1);
        let record =
            Self { driver: driver.into(), stint, compound, start_lap, end_lap, num_laps, avg_lap_time: None };
        record.validate()?;
        Ok(record)
    }

    /// Override the recorded lap count (laps can be missing from a range).
    pub fn with_num_laps(mut self, num_laps: u32) -> Result<Self> {
        self.num_laps = num_laps;
        self.validate()?;
        Ok(self)
    }

    /// Attach the stint's average lap time.
    pub fn with_avg_lap_time(mut self, seconds: f64) -> Result<Self> {
        self.avg_lap_time = Some(seconds);
        self.validate()?;
        Ok(self)
    }

    /// Check the record invariants.
    pub fn validate(&self) -> Result<()> {
        let fail = |reason: String| Err(StrategyError::invalid_record("stint", reason));

        if self.driver.trim().is_empty() {
            return fail("driver code is empty".to_string());
        }
        if self.stint == 0 {
            return fail(format!("{}: stint number must be positive", self.driver));
        }
        if self.start_lap == 0 {
            return fail(format!("{} stint {}: start lap must be positive", self.driver, self.stint));
        }
        if self.start_lap > self.end_lap {
            return fail(format!(
                "{} stint {}: start lap {} is after end lap {}",
                self.driver, self.stint, self.start_lap, self.end_lap
            ));
        }
        if self.num_laps > self.lap_span() {
            return fail(format!(
                "{} stint {}: {} laps do not fit in laps {}-{}",
                self.driver, self.stint, self.num_laps, self.start_lap, self.end_lap
            ));
        }
        if let Some(avg) = self.avg_lap_time {
            if !(avg.is_finite() && avg > 0.0) {
                return fail(format!("{} stint {}: average lap time {}", self.driver, self.stint, avg));
            }
        }
        Ok(())
    }

    /// Whether `lap_number` falls within this stint.
    pub fn contains_lap(&self, lap_number: u32) -> bool {
        (self.start_lap..=self.end_lap).contains(&lap_number)
    }

    /// Number of laps in `start_lap..=end_lap`.
    pub fn lap_span(&self) -> u32 {
        self.end_lap - self.start_lap + 1
    }
}

/// Verify the per-driver stint invariants across a session's records.
///
/// Stint numbers must be unique per driver, and when ordered by stint number
/// each stint must start on the lap after the previous one ends. The first
/// violation found is returned.
pub fn check_stint_sequence(stints: &[StintRecord]) -> Result<()> {
    let mut by_driver: BTreeMap<&str, Vec<&StintRecord>> = BTreeMap::new();
    for stint in stints {
        by_driver.entry(stint.driver.as_str()).or_default().push(stint);
    }

    for (driver, mut driver_stints) in by_driver {
        driver_stints.sort_by_key(|s| s.stint);
        for pair in driver_stints.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if prev.stint == next.stint {
                return Err(StrategyError::invalid_stint_sequence(
                    driver,
                    format!("stint {} appears more than once", next.stint),
                ));
            }
            if next.start_lap <= prev.end_lap {
                return Err(StrategyError::invalid_stint_sequence(
                    driver,
                    format!(
                        "stint {} starts on lap {} before stint {} ends on lap {}",
                        next.stint, next.start_lap, prev.stint, prev.end_lap
                    ),
                ));
            }
            if next.start_lap != prev.end_lap + 1 {
                return Err(StrategyError::invalid_stint_sequence(
                    driver,
                    format!(
                        "laps {}-{} fall between stint {} and stint {}",
                        prev.end_lap + 1,
                        next.start_lap - 1,
                        prev.stint,
                        next.stint
                    ),
                ));
            }
        }
    }

    Ok(())
}
