//! Per-driver strategy assembly and finishing order

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{DriverStrategy, StintRecord};

/// How drivers are put in finishing order before strategies are ranked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "drivers")]
pub enum FinishingOrder {
    /// Most laps completed first, driver code ascending on ties.
    ///
    /// An approximation: drivers on the lead lap are not separated by it.
    #[default]
    LapsCompleted,
    /// Official classification, winner first. Drivers missing from it follow
    /// in laps-completed order.
    Classified(Vec<String>),
}

/// Build every driver's strategy, ordered by laps completed.
///
/// Ties on laps completed are broken by driver code ascending.
pub fn driver_strategies(stints: &[StintRecord]) -> Vec<DriverStrategy<'_>> {
    let mut by_driver: BTreeMap<&str, Vec<&StintRecord>> = BTreeMap::new();
    for stint in stints {
        by_driver.entry(stint.driver.as_str()).or_default().push(stint);
    }

    let mut strategies: Vec<DriverStrategy<'_>> = by_driver
        .into_iter()
        .filter_map(|(driver, driver_stints)| DriverStrategy::from_stints(driver, driver_stints))
        .collect();

    // BTreeMap iteration already yields driver codes ascending; the stable
    // sort keeps that order within equal lap counts.
    strategies.sort_by(|a, b| b.total_laps.cmp(&a.total_laps));
    strategies
}

/// Reorder laps-completed strategies according to `order`.
pub fn apply_finishing_order<'a>(
    mut strategies: Vec<DriverStrategy<'a>>,
    order: &FinishingOrder,
) -> Vec<DriverStrategy<'a>> {
    if let FinishingOrder::Classified(classification) = order {
        let position: BTreeMap<String, usize> = classification
            .iter()
            .enumerate()
            .rev()
            .map(|(i, code)| (code.trim().to_uppercase(), i))
            .collect();

        strategies.sort_by_key(|s| position.get(&s.driver.to_uppercase()).copied().unwrap_or(usize::MAX));
    }
    strategies
}
