//! Derived per-compound and per-stint statistics

use serde::{Deserialize, Serialize};

/// Lap time aggregate for one tyre compound.
///
/// Only laps with both a compound and a lap time contribute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct CompoundStats {
    pub compound: String,
    pub total_laps: usize,
    pub fastest_lap: f64,
    pub slowest_lap: f64,
    pub avg_lap_time: f64,
}

impl CompoundStats {
    /// Start an aggregate from a compound's first timed lap.
    pub(crate) fn first(compound: &str, lap_time: f64) -> Self {
        Self {
            compound: compound.to_string(),
            total_laps: 1,
            fastest_lap: lap_time,
            slowest_lap: lap_time,
            avg_lap_time: lap_time,
        }
    }
}

/// Lap time decay across one stint.
///
/// Degradation may be negative: fuel burn can outweigh tyre wear.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct StintDegradation {
    pub stint: u32,
    pub compound: Option<String>,
    /// Timed laps used for the analysis
    pub num_laps: usize,
    pub first_lap_time: f64,
    pub last_lap_time: f64,
    /// `last_lap_time - first_lap_time`
    pub total_degradation: f64,
    /// `total_degradation / num_laps`
    pub degradation_per_lap: f64,
    pub avg_lap_time: f64,
}

/// Pace summary for one stint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct StintPerformance {
    pub stint: u32,
    pub compound: Option<String>,
    /// Laps inside the stint's range, timed or not
    pub laps_completed: usize,
    pub avg_lap_time: f64,
    pub fastest_lap: f64,
    pub slowest_lap: f64,
}

/// A lap on which pit stops cluster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct PitWindow {
    pub lap: u32,
    pub count: u32,
}
