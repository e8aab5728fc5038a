//! Report orchestration

use tracing::debug;

use crate::analysis::{
    FinishingOrder, apply_finishing_order, compound_performance, driver_strategies, pit_stop_timing,
    rank_strategies, stint_performance, tire_degradation,
};
use crate::report::{DriverStrategyReport, RaceStrategyReport, RaceSummary};
use crate::types::{DriverStrategy, LapRecord, StintRecord};
use crate::{AnalysisConfig, Result, StrategyError};

/// A stateless calculator turning one session's records into strategy reports.
///
/// The engine holds only configuration, so one instance can serve any number
/// of sessions and drivers concurrently.
#[derive(Debug, Clone, Default)]
pub struct StrategyEngine {
    config: AnalysisConfig,
}

impl StrategyEngine {
    /// Create an engine with a validated configuration.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyse a whole session using the configured finishing order.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::InsufficientData`] when both `laps` and `stints`
    /// are empty. Any other input, however sparse, produces a report with
    /// empty or zero-valued sections.
    pub fn analyze_race<'a>(
        &self,
        laps: &[LapRecord],
        stints: &'a [StintRecord],
    ) -> Result<RaceStrategyReport<'a>> {
        self.analyze_race_ordered(laps, stints, &self.config.finishing_order)
    }

    /// Analyse a whole session ranking strategies by an official classification.
    ///
    /// Drivers missing from `classification` are ranked after the classified
    /// ones, in laps-completed order.
    pub fn analyze_race_classified<'a>(
        &self,
        laps: &[LapRecord],
        stints: &'a [StintRecord],
        classification: &[String],
    ) -> Result<RaceStrategyReport<'a>> {
        let order = FinishingOrder::Classified(classification.to_vec());
        self.analyze_race_ordered(laps, stints, &order)
    }

    fn analyze_race_ordered<'a>(
        &self,
        laps: &[LapRecord],
        stints: &'a [StintRecord],
        order: &FinishingOrder,
    ) -> Result<RaceStrategyReport<'a>> {
        if laps.is_empty() && stints.is_empty() {
            return Err(StrategyError::insufficient_data("race"));
        }

        debug!(laps = laps.len(), stints = stints.len(), "Analysing race strategy");

        let strategies = apply_finishing_order(driver_strategies(stints), order);
        let compounds = compound_performance(laps);
        let pit_timing = pit_stop_timing(stints, self.config.pit_window_count);
        let ranking = rank_strategies(&strategies);
        let summary = RaceSummary::new(&strategies, &compounds);

        if strategies.is_empty() {
            debug!("No stint records, strategy sections are empty");
        }
        if compounds.is_empty() {
            debug!("No timed laps with a compound, compound section is empty");
        }

        debug!(
            drivers = summary.total_drivers,
            compounds = compounds.len(),
            pit_stops = pit_timing.total_stops(),
            best = ranking.best_strategy.as_ref().map(|g| g.strategy.as_str()).unwrap_or("-"),
            "Race strategy report built"
        );

        Ok(RaceStrategyReport {
            driver_strategies: strategies,
            compound_performance: compounds,
            pit_stop_timing: pit_timing,
            optimal_strategies: ranking,
            summary,
        })
    }

    /// Analyse one driver's session.
    ///
    /// The driver code is matched case-insensitively and reported uppercased.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::DriverNotFound`] when no stint record belongs to
    /// `driver`.
    pub fn analyze_driver<'a>(
        &self,
        laps: &[LapRecord],
        stints: &'a [StintRecord],
        driver: &str,
    ) -> Result<DriverStrategyReport<'a>> {
        let code = driver.trim().to_uppercase();

        let driver_stints: Vec<&'a StintRecord> =
            stints.iter().filter(|s| s.driver.eq_ignore_ascii_case(&code)).collect();
        let driver_laps: Vec<&LapRecord> = laps.iter().filter(|l| l.driver.eq_ignore_ascii_case(&code)).collect();

        let Some(strategy) = driver_stints
            .first()
            .copied()
            .and_then(|first: &'a StintRecord| DriverStrategy::from_stints(first.driver.as_str(), driver_stints.clone()))
        else {
            return Err(StrategyError::driver_not_found(&code));
        };

        debug!(driver = %code, stints = driver_stints.len(), laps = driver_laps.len(), "Analysing driver strategy");

        let degradation_analysis =
            tire_degradation(&strategy.stints, &driver_laps, self.config.min_degradation_laps);
        let stint_performance = stint_performance(&strategy.stints, &driver_laps);

        Ok(DriverStrategyReport {
            driver: code,
            total_stints: strategy.stint_count(),
            stints: strategy.stints.clone(),
            strategy,
            degradation_analysis,
            stint_performance,
        })
    }
}
