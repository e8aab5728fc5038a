//! Strategy ranking by average finishing position

use serde::Serialize;
use std::collections::HashMap;

use crate::types::{DriverStrategy, StrategyGroup};

/// Strategy groups ranked best first.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct StrategyRanking<'a> {
    /// Head of `all_strategies`, `None` when there were no stints at all
    pub best_strategy: Option<StrategyGroup<'a>>,
    pub all_strategies: Vec<StrategyGroup<'a>>,
}

/// Group drivers by strategy signature and rank the groups.
///
/// `strategies` must already be in finishing order: a driver's position is its
/// 1-based index in the slice. Groups are sorted by average position
/// ascending; equal averages keep the order in which the signature first
/// appeared.
///
/// This is a descriptive summary. Shared-strategy averaging does not control
/// for car or driver pace.
pub fn rank_strategies<'a>(strategies: &[DriverStrategy<'a>]) -> StrategyRanking<'a> {
    let mut groups: Vec<StrategyGroup<'a>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for (i, strategy) in strategies.iter().enumerate() {
        let slot = *index.entry(strategy.strategy_name.as_str()).or_insert_with(|| {
            groups.push(StrategyGroup {
                strategy: strategy.strategy_name.clone(),
                drivers: Vec::new(),
                position_sum: 0,
                avg_finishing_position: 0.0,
                count: 0,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.drivers.push(strategy.driver);
        group.position_sum += i + 1;
        group.count += 1;
    }

    for group in &mut groups {
        group.avg_finishing_position = group.position_sum as f64 / group.count as f64;
    }
    groups.sort_by(|a, b| a.avg_finishing_position.total_cmp(&b.avg_finishing_position));

    StrategyRanking { best_strategy: groups.first().cloned(), all_strategies: groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::driver_strategies;
    use crate::types::StintRecord;

    fn stint(driver: &str, n: u32, compound: &str, start: u32, end: u32) -> StintRecord {
        StintRecord::new(driver, n, Some(compound.to_string()), start, end).unwrap()
    }

    #[test]
    fn groups_ranked_by_average_position() {
        let stints = vec![
            // 1st and 4th on a one-stopper
            stint("VER", 1, "MEDIUM", 1, 20),
            stint("VER", 2, "HARD", 21, 60),
            stint("LEC", 1, "MEDIUM", 1, 22),
            stint("LEC", 2, "HARD", 23, 57),
            // 2nd on a two-stopper
            stint("NOR", 1, "SOFT", 1, 12),
            stint("NOR", 2, "MEDIUM", 13, 35),
            stint("NOR", 3, "HARD", 36, 59),
            // 3rd, no stop
            stint("STR", 1, "HARD", 1, 58),
        ];
        let strategies = driver_strategies(&stints);
        let ranking = rank_strategies(&strategies);

        assert_eq!(ranking.all_strategies.len(), 3);
        let best = ranking.best_strategy.as_ref().unwrap();
        assert_eq!(best.strategy, "2-stop (SOFT-MEDIUM-HARD)");
        assert_eq!(best.avg_finishing_position, 2.0);

        let one_stop = &ranking.all_strategies[1];
        assert_eq!(one_stop.strategy, "1-stop (MEDIUM-HARD)");
        assert_eq!(one_stop.drivers, vec!["VER", "LEC"]);
        assert_eq!(one_stop.position_sum, 5);
        assert_eq!(one_stop.avg_finishing_position, 2.5);
        assert_eq!(one_stop.count, 2);

        assert_eq!(ranking.all_strategies[2].avg_finishing_position, 3.0);
    }

    #[test]
    fn equal_averages_keep_first_appearance() {
        // Positions 1 and 4 versus 2 and 3: both average 2.5
        let stints = vec![
            stint("AAA", 1, "SOFT", 1, 60),
            stint("BBB", 1, "HARD", 1, 59),
            stint("CCC", 1, "HARD", 1, 58),
            stint("DDD", 1, "SOFT", 1, 57),
        ];
        let strategies = driver_strategies(&stints);
        let ranking = rank_strategies(&strategies);

        assert_eq!(ranking.all_strategies[0].strategy, "0-stop (SOFT)");
        assert_eq!(ranking.all_strategies[1].strategy, "0-stop (HARD)");
    }

    #[test]
    fn no_strategies_no_best() {
        let ranking = rank_strategies(&[]);
        assert!(ranking.best_strategy.is_none());
        assert!(ranking.all_strategies.is_empty());
    }
}
