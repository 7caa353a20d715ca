use super::dimension::Dimension;
use super::ScoreCard;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceLevel {
    Compliant,
    Review,
    Flagged,
}

impl ComplianceLevel {
    pub fn from_score(overall_score: f64) -> Self {
        if overall_score >= 80.0 {
            Self::Compliant
        } else if overall_score >= 60.0 {
            Self::Review
        } else {
            Self::Flagged
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Compliant => "Compliant",
            Self::Review => "Needs Review",
            Self::Flagged => "Flagged",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DimensionScoreView {
    pub dimension: Dimension,
    pub label: &'static str,
    pub score_pct: u8,
    pub weight: u8,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreCardView {
    pub overall_score: f64,
    pub level: ComplianceLevel,
    pub level_label: &'static str,
    pub dimensions: Vec<DimensionScoreView>,
}

pub(crate) fn score_card_view(card: &ScoreCard) -> ScoreCardView {
    let level = card.level();
    ScoreCardView {
        overall_score: (card.overall_score * 10.0).round() / 10.0,
        level,
        level_label: level.label(),
        dimensions: card
            .dimensions
            .iter()
            .map(|entry| DimensionScoreView {
                dimension: entry.dimension,
                label: entry.name,
                score_pct: entry.score.round().clamp(0.0, 100.0) as u8,
                weight: entry.weight,
                notes: entry.notes.clone(),
            })
            .collect(),
    }
}
