//! Provider trait for session data sources

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Result;
use crate::types::{LapRecord, StintRecord};

/// Opaque identifier of one session, e.g. `"2024-05-R"`.
///
/// Resolving a season, round and session type into an identifier is the
/// caller's job.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Trait for session data sources
///
/// Providers deliver the normalized records of a completed session. They own
/// any fetching, caching and timeout handling; the analysis core never calls
/// out to a network or storage service itself.
#[async_trait::async_trait]
pub trait SessionDataProvider: Send + Sync {
    /// Get every lap record of the session
    ///
    /// Returns:
    /// - `Ok(laps)` - Records, possibly empty
    /// - `Err(StrategyError::SessionNotFound)` - Unknown session
    /// - `Err(e)` - Any other provider failure
    async fn get_laps(&self, session: &SessionId) -> Result<Vec<LapRecord>>;

    /// Get every stint record of the session
    async fn get_stints(&self, session: &SessionId) -> Result<Vec<StintRecord>>;
}
