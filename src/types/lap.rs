//! Per-lap timing records
//!
//! One [`LapRecord`] is one observed lap by one driver, as normalized by the
//! session data provider.

use serde::{Deserialize, Serialize};

use crate::{Result, StrategyError};

/// One observed lap by one driver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct LapRecord {
    /// Driver abbreviation, e.g. "VER"
    pub driver: String,
    /// Lap number, starting at 1
    pub lap_number: u32,
    /// Total lap time in seconds; absent when not recorded or invalid
    #[serde(default)]
    pub lap_time_seconds: Option<f64>,
    /// Sector 1 time in seconds
    #[serde(default)]
    pub sector1_time: Option<f64>,
    /// Sector 2 time in seconds
    #[serde(default)]
    pub sector2_time: Option<f64>,
    /// Sector 3 time in seconds
    #[serde(default)]
    pub sector3_time: Option<f64>,
    /// Tyre compound label, e.g. "SOFT"
    #[serde(default)]
    pub compound: Option<String>,
    /// Tyre age in laps
    #[serde(default)]
    pub tyre_life: Option<u32>,
    /// Stint this lap belongs to, starting at 1
    pub stint: u32,
    /// Whether this lap was the driver's personal best at the time
    #[serde(default)]
    pub is_personal_best: bool,
}

impl LapRecord {
    /// Create a lap with no timing data attached.
    ///
    /// Fails when the driver code is empty or when the lap or stint number is zero.
    pub fn new(driver: impl Into<String>, lap_number: u32, stint: u32) -> Result<Self> {
        let lap = Self {
            driver: driver.into(),
            lap_number,
            lap_time_seconds: None,
            sector1_time: None,
            sector2_time: None,
            sector3_time: None,
            compound: None,
            tyre_life: None,
            stint,
            is_personal_best: false,
        };
        lap.validate()?;
        Ok(lap)
    }

    /// Attach a total lap time.
    pub fn with_lap_time(mut self, seconds: f64) -> Result<Self> {
        check_duration("lap time", seconds)?;
        self.lap_time_seconds = Some(seconds);
        Ok(self)
    }

    /// Attach sector times. Individual sectors may be missing.
    pub fn with_sectors(mut self, sectors: [Option<f64>; 3]) -> Result<Self> {
        for seconds in sectors.iter().flatten() {
            check_duration("sector time", *seconds)?;
        }
        let [s1, s2, s3] = sectors;
        self.sector1_time = s1;
        self.sector2_time = s2;
        self.sector3_time = s3;
        Ok(self)
    }

    /// Attach the tyre compound label. A blank label leaves the compound unset.
    pub fn with_compound(mut self, compound: impl Into<String>) -> Self {
        let compound = compound.into();
        self.compound = (!compound.trim().is_empty()).then_some(compound);
        self
    }

    /// Attach the tyre age in laps.
    pub fn with_tyre_life(mut self, laps: u32) -> Self {
        self.tyre_life = Some(laps);
        self
    }

    /// Mark this lap as a personal best.
    pub fn personal_best(mut self) -> Self {
        self.is_personal_best = true;
        self
    }

    /// Check the record invariants.
    ///
    /// Records built with [`LapRecord::new`] are already valid; this exists for
    /// records that arrive through deserialization.
    pub fn validate(&self) -> Result<()> {
        if self.driver.trim().is_empty() {
            return Err(StrategyError::invalid_record("lap", "driver code is empty"));
        }
        if self.lap_number == 0 {
            return Err(StrategyError::invalid_record(
                "lap",
                format!("{}: lap number must be positive", self.driver),
            ));
        }
        if self.stint == 0 {
            return Err(StrategyError::invalid_record(
                "lap",
                format!("{} lap {}: stint number must be positive", self.driver, self.lap_number),
            ));
        }
        if let Some(seconds) = self.lap_time_seconds {
            check_duration("lap time", seconds)?;
        }
        for seconds in self.sector_times().iter().flatten() {
            check_duration("sector time", *seconds)?;
        }
        Ok(())
    }

    /// Sector times in order.
    pub fn sector_times(&self) -> [Option<f64>; 3] {
        [self.sector1_time, self.sector2_time, self.sector3_time]
    }

    /// Compound label, treating a blank label as unknown.
    pub fn compound_label(&self) -> Option<&str> {
        self.compound.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// Lap time and compound, when both are known.
    pub(crate) fn timed_compound(&self) -> Option<(&str, f64)> {
        Some((self.compound_label()?, self.lap_time_seconds?))
    }
}

fn check_duration(what: &str, seconds: f64) -> Result<()> {
    if seconds.is_finite() && seconds > 0.0 {
        Ok(())
    } else {
        Err(StrategyError::invalid_record("lap", format!("{} must be positive, got {}", what, seconds)))
    }
}
