use serde::{Deserialize, Serialize};

use super::report::ReportEnvelope;

/// Identifier of one monitored evaluation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where behaviour reports come from (the analysis backend, a fixture file, ...).
///
/// Credentials and endpoints belong to the implementor; nothing here reads ambient state.
pub trait ReportSource: Send + Sync {
    fn fetch(&self, session: &SessionId) -> Result<Option<ReportEnvelope>, SourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("report source unavailable: {0}")]
    Unavailable(String),
}
