//! Behaviour-report scoring: the report model, penalty rubric, and the service and
//! HTTP router that put a report source in front of the scorer.

pub mod report;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use report::{BehaviorReport, ReportEnvelope, ReportError};
pub use repository::{ReportSource, SessionId, SourceError};
pub use router::report_router;
pub use scoring::{
    compute_score_card, ComplianceLevel, Dimension, DimensionScore, PenaltyRubric, PenaltyScorer,
    ScoreCard, ScoreCardView,
};
pub use service::{ReportScoringService, ScoringServiceError, SessionScore};
