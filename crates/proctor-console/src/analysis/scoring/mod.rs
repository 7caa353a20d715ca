mod config;
mod dimension;
mod rules;
pub mod views;

pub use config::PenaltyRubric;
pub use dimension::Dimension;
pub use views::{ComplianceLevel, DimensionScoreView, ScoreCardView};

use super::report::BehaviorReport;
use serde::Serialize;

/// Stateless scorer that applies a penalty rubric to a behaviour report.
#[derive(Debug, Clone, Default)]
pub struct PenaltyScorer {
    rubric: PenaltyRubric,
}

impl PenaltyScorer {
    pub fn new(rubric: PenaltyRubric) -> Self {
        Self { rubric }
    }

    pub fn standard() -> Self {
        Self::new(PenaltyRubric::standard())
    }

    pub fn rubric(&self) -> &PenaltyRubric {
        &self.rubric
    }

    pub fn score(&self, report: &BehaviorReport) -> ScoreCard {
        let (dimensions, overall_score) = rules::score_report(report, &self.rubric);
        ScoreCard {
            dimensions,
            overall_score,
        }
    }
}

/// Score a report with the standard rubric.
pub fn compute_score_card(report: &BehaviorReport) -> ScoreCard {
    PenaltyScorer::standard().score(report)
}

/// One dimension's contribution, kept with its audit note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub name: &'static str,
    pub score: f64,
    pub weight: u8,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCard {
    /// Always eight entries, in [`Dimension::ordered`] order.
    pub dimensions: Vec<DimensionScore>,
    pub overall_score: f64,
}

impl ScoreCard {
    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionScore> {
        self.dimensions
            .iter()
            .find(|entry| entry.dimension == dimension)
    }

    pub fn level(&self) -> ComplianceLevel {
        ComplianceLevel::from_score(self.overall_score)
    }

    pub fn view(&self) -> ScoreCardView {
        views::score_card_view(self)
    }
}
