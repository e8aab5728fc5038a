//! Strategy views derived from a session's stint records
//!
//! These types borrow from the records they were built from and live only as
//! long as the report that owns them.

use serde::Serialize;
use std::collections::BTreeSet;

use super::StintRecord;

/// One driver's ordered stint sequence.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DriverStrategy<'a> {
    pub driver: &'a str,
    /// `stints.len() - 1`
    pub num_stops: u32,
    /// Stints in stint-number order
    pub stints: Vec<&'a StintRecord>,
    /// Distinct compounds used, sorted; stints without a compound (or with a blank one) are not listed
    pub compounds_used: BTreeSet<&'a str>,
    /// Highest end lap across the driver's stints
    pub total_laps: u32,
    /// e.g. `"2-stop (MEDIUM-HARD-HARD)"`
    pub strategy_name: String,
}

impl<'a> DriverStrategy<'a> {
    /// Build a strategy from one driver's stints. Stints are sorted here.
    ///
    /// Returns `None` when `stints` is empty.
    pub fn from_stints(driver: &'a str, mut stints: Vec<&'a StintRecord>) -> Option<Self> {
        if stints.is_empty() {
            return None;
        }
        stints.sort_by_key(|s| s.stint);

        let num_stops = (stints.len() - 1) as u32;
        let compounds_used = stints
            .iter()
            .copied()
            .filter_map(|s: &'a StintRecord| s.compound.as_deref())
            .filter(|c| !c.trim().is_empty())
            .collect();
        let total_laps = stints.iter().map(|s| s.end_lap).max().unwrap_or(0);
        let strategy_name = strategy_signature(num_stops, &stints);

        Some(Self { driver, num_stops, stints, compounds_used, total_laps, strategy_name })
    }

    /// Number of stints driven.
    pub fn stint_count(&self) -> usize {
        self.stints.len()
    }
}

/// Format `"{stops}-stop ({compound}-{compound}-...)"`.
///
/// A stint with no compound contributes an empty segment, so `"1-stop (SOFT-)"`
/// still shows two stints.
pub fn strategy_signature(num_stops: u32, stints: &[&StintRecord]) -> String {
    let compounds: Vec<&str> = stints.iter().map(|s| s.compound.as_deref().unwrap_or("")).collect();
    format!("{}-stop ({})", num_stops, compounds.join("-"))
}

/// Drivers sharing one strategy signature, with their mean finishing position.
///
/// The average is descriptive only. It does not control for car or driver
/// pace, so a strategy used by the two fastest cars will rank well regardless
/// of its merit.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StrategyGroup<'a> {
    pub strategy: String,
    /// Members in finishing order
    pub drivers: Vec<&'a str>,
    /// Sum of members' 1-based finishing positions
    pub position_sum: usize,
    pub avg_finishing_position: f64,
    pub count: usize,
}
