//! Fixture provider backed by recorded session documents

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use crate::analysis::derive_stints;
use crate::provider::{SessionDataProvider, SessionId};
use crate::session::SessionData;
use crate::types::{LapRecord, StintRecord};
use crate::{Result, StrategyError};

/// Provider serving sessions recorded in a YAML document.
///
/// ```yaml
/// sessions:
///   2024-05-R:
///     laps:
///       - { driver: VER, lap_number: 1, stint: 1, compound: MEDIUM, lap_time_seconds: 95.1 }
///     stints:
///       - { driver: VER, stint: 1, compound: MEDIUM, start_lap: 1, end_lap: 1, num_laps: 1 }
/// ```
///
/// A session listing laps but no stints gets its stints rebuilt from the laps.
#[derive(Debug, Clone, Default)]
pub struct FixtureProvider {
    sessions: BTreeMap<SessionId, SessionData>,
}

#[derive(Deserialize)]
struct FixtureDocument {
    #[serde(default)]
    sessions: BTreeMap<SessionId, SessionData>,
}

impl FixtureProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a fixture document. Every record is validated.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let document: FixtureDocument = serde_yaml_ng::from_str(yaml).map_err(|e| {
            StrategyError::provider_failed_with_source("fixture document is not valid", Box::new(e))
        })?;

        let mut provider = Self::new();
        for (id, data) in document.sessions {
            provider.insert(id, data)?;
        }
        Ok(provider)
    }

    /// Read and parse a fixture file.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StrategyError::file_error(path.to_path_buf(), e))?;

        let provider = Self::from_yaml_str(&yaml)?;
        info!("Opened session fixture: {} ({} sessions)", path.display(), provider.sessions.len());
        Ok(provider)
    }

    /// Add or replace a session. Every record is validated, including stints
    /// derived from laps when the session has none.
    pub fn insert(&mut self, id: SessionId, mut data: SessionData) -> Result<()> {
        for lap in &data.laps {
            lap.validate()?;
        }
        for stint in &data.stints {
            stint.validate()?;
        }

        if data.stints.is_empty() && !data.laps.is_empty() {
            let derived = derive_stints(&data.laps);
            for stint in &derived {
                stint.validate()?;
            }
            debug!(session = %id, stints = derived.len(), "Derived stints from laps");
            data.stints = derived;
        }

        self.sessions.insert(id, data);
        Ok(())
    }

    /// Identifiers of all loaded sessions, in order.
    pub fn session_ids(&self) -> impl Iterator<Item = &SessionId> {
        self.sessions.keys()
    }

    fn session(&self, id: &SessionId) -> Result<&SessionData> {
        self.sessions.get(id).ok_or_else(|| StrategyError::SessionNotFound { session: id.to_string() })
    }
}

#[async_trait::async_trait]
impl SessionDataProvider for FixtureProvider {
    async fn get_laps(&self, session: &SessionId) -> Result<Vec<LapRecord>> {
        Ok(self.session(session)?.laps.clone())
    }

    async fn get_stints(&self, session: &SessionId) -> Result<Vec<StintRecord>> {
        Ok(self.session(session)?.stints.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StrategyEngine;

    const FIXTURE: &str = r#"
sessions:
  2024-05-R:
    laps:
      - { driver: VER, lap_number: 1, stint: 1, compound: MEDIUM, lap_time_seconds: 95.0 }
      - { driver: VER, lap_number: 2, stint: 1, compound: MEDIUM, lap_time_seconds: 94.5 }
      - { driver: VER, lap_number: 3, stint: 2, compound: HARD, lap_time_seconds: 96.0 }
    stints:
      - { driver: VER, stint: 1, compound: MEDIUM, start_lap: 1, end_lap: 2, num_laps: 2 }
      - { driver: VER, stint: 2, compound: HARD, start_lap: 3, end_lap: 3, num_laps: 1 }
  2024-06-R:
    laps:
      - { driver: NOR, lap_number: 1, stint: 1, compound: SOFT, lap_time_seconds: 80.0 }
      - { driver: NOR, lap_number: 2, stint: 2, compound: HARD, lap_time_seconds: 81.0 }
"#;

    #[tokio::test]
    async fn serves_recorded_sessions() {
        let provider = FixtureProvider::from_yaml_str(FIXTURE).unwrap();
        let session = SessionData::load(&provider, &"2024-05-R".into()).await.unwrap();

        assert_eq!(session.laps.len(), 3);
        assert_eq!(session.stints.len(), 2);

        let engine = StrategyEngine::default();
        let report = session.race_report(&engine).unwrap();
        assert_eq!(report.driver_strategies[0].strategy_name, "1-stop (MEDIUM-HARD)");
    }

    #[tokio::test]
    async fn derives_missing_stints() {
        let provider = FixtureProvider::from_yaml_str(FIXTURE).unwrap();
        let stints = provider.get_stints(&"2024-06-R".into()).await.unwrap();

        assert_eq!(stints.len(), 2);
        assert_eq!(stints[1].compound.as_deref(), Some("HARD"));
        assert_eq!(stints[1].start_lap, 2);
    }

    #[tokio::test]
    async fn repeated_lap_derives_a_valid_stint() {
        let lap = LapRecord::new("VER", 1, 1).unwrap().with_compound("SOFT").with_lap_time(90.0).unwrap();
        let mut provider = FixtureProvider::new();
        provider.insert("2024-07-R".into(), SessionData::new(vec![lap.clone(), lap], Vec::new())).unwrap();

        let stints = provider.get_stints(&"2024-07-R".into()).await.unwrap();
        assert_eq!(stints.len(), 1);
        assert_eq!(stints[0].num_laps, 1);
        assert!(stints[0].validate().is_ok());
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let provider = FixtureProvider::from_yaml_str(FIXTURE).unwrap();
        let err = provider.get_laps(&"1999-01-R".into()).await.unwrap_err();
        assert!(matches!(err, StrategyError::SessionNotFound { .. }));
        assert!(err.is_not_found());
    }

    #[test]
    fn invalid_records_are_rejected() {
        let yaml = "sessions:\n  x:\n    stints:\n      - { driver: VER, stint: 1, start_lap: 9, end_lap: 3, num_laps: 1 }\n";
        assert!(matches!(FixtureProvider::from_yaml_str(yaml), Err(StrategyError::InvalidRecord { .. })));
    }

    #[test]
    fn malformed_document_is_a_provider_error() {
        let err = FixtureProvider::from_yaml_str("sessions: [not, a, map]").unwrap_err();
        assert!(matches!(err, StrategyError::Provider { .. }));
    }

    #[test]
    fn lists_session_ids_in_order() {
        let provider = FixtureProvider::from_yaml_str(FIXTURE).unwrap();
        let ids: Vec<&str> = provider.session_ids().map(SessionId::as_str).collect();
        assert_eq!(ids, vec!["2024-05-R", "2024-06-R"]);
    }
}
