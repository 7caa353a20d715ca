use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::report::ReportEnvelope;
use super::repository::{ReportSource, SessionId, SourceError};
use super::scoring::{PenaltyRubric, PenaltyScorer, ScoreCard, ScoreCardView};

/// Service composing a report source with the penalty scorer.
pub struct ReportScoringService<S> {
    source: Arc<S>,
    scorer: PenaltyScorer,
}

impl<S> ReportScoringService<S>
where
    S: ReportSource + 'static,
{
    pub fn new(source: Arc<S>, rubric: PenaltyRubric) -> Self {
        Self {
            source,
            scorer: PenaltyScorer::new(rubric),
        }
    }

    /// Score a report payload that was delivered directly by the caller.
    pub fn score_envelope(&self, envelope: ReportEnvelope) -> ScoreCard {
        let report = envelope.into_report();
        let card = self.scorer.score(&report);
        debug!(
            overall = card.overall_score,
            faces = report.faces.len(),
            "scored inline behaviour report"
        );
        card
    }

    /// Fetch the report for a session from the source and score it.
    pub fn score_session(&self, session: &SessionId) -> Result<SessionScore, ScoringServiceError> {
        let envelope = self
            .source
            .fetch(session)?
            .ok_or_else(|| ScoringServiceError::NotFound(session.clone()))?;

        let card = self.scorer.score(&envelope.into_report());
        info!(session = %session, overall = card.overall_score, "scored session report");

        Ok(SessionScore {
            session_id: session.clone(),
            score_card: card.view(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionScore {
    pub session_id: SessionId,
    pub score_card: ScoreCardView,
}

/// Error raised by the report scoring service.
#[derive(Debug, thiserror::Error)]
pub enum ScoringServiceError {
    #[error("no behaviour report for session {0}")]
    NotFound(SessionId),
    #[error(transparent)]
    Source(#[from] SourceError),
}
