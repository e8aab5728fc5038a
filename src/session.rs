//! Owned session records and loading from a provider

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::provider::{SessionDataProvider, SessionId};
use crate::report::{DriverStrategyReport, RaceStrategyReport};
use crate::types::{LapRecord, StintRecord, check_stint_sequence};
use crate::{Result, StrategyEngine};

/// All records of one session.
///
/// Reports built from a `SessionData` borrow from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default)]
    pub laps: Vec<LapRecord>,
    #[serde(default)]
    pub stints: Vec<StintRecord>,
}

impl SessionData {
    pub fn new(laps: Vec<LapRecord>, stints: Vec<StintRecord>) -> Self {
        Self { laps, stints }
    }

    /// Fetch a session's laps and stints concurrently.
    ///
    /// Stint sequences that break the per-driver invariants are logged and
    /// kept; the analyzers tolerate them.
    pub async fn load<P>(provider: &P, session: &SessionId) -> Result<Self>
    where
        P: SessionDataProvider + ?Sized,
    {
        debug!(%session, "Loading session records");

        let (laps, stints) = tokio::try_join!(provider.get_laps(session), provider.get_stints(session))?;

        if let Err(e) = check_stint_sequence(&stints) {
            warn!(%session, error = %e, "Stint records are not a clean sequence");
        }

        info!(%session, laps = laps.len(), stints = stints.len(), "Session records loaded");
        Ok(Self { laps, stints })
    }

    /// Whole-session report, see [`StrategyEngine::analyze_race`].
    pub fn race_report(&self, engine: &StrategyEngine) -> Result<RaceStrategyReport<'_>> {
        engine.analyze_race(&self.laps, &self.stints)
    }

    /// Single-driver report, see [`StrategyEngine::analyze_driver`].
    pub fn driver_report(&self, engine: &StrategyEngine, driver: &str) -> Result<DriverStrategyReport<'_>> {
        engine.analyze_driver(&self.laps, &self.stints, driver)
    }

    /// Whether the session holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.laps.is_empty() && self.stints.is_empty()
    }
}
