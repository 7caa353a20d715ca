use serde::{Deserialize, Serialize};

/// Penalty coefficients applied per detected anomaly.
///
/// Dimension weights are deliberately absent: they are fixed on [`super::Dimension`]
/// so that they always partition 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenaltyRubric {
    pub absence_penalty_per_second: f64,
    /// Absence share of the session above which presence is halved (strictly greater).
    pub absence_ratio_threshold: f64,
    pub gesture_penalty: f64,
    pub whisper_penalty: f64,
    pub multiple_speaker_penalty: f64,
    pub extra_persona_penalty: f64,
    pub blocked_request_penalty: f64,
    pub proxy_disconnection_penalty: f64,
    pub extra_session_penalty: f64,
    pub lipsync_penalty: f64,
    pub lighting_penalty: f64,
}

impl PenaltyRubric {
    pub const fn standard() -> Self {
        Self {
            absence_penalty_per_second: 2.0,
            absence_ratio_threshold: 0.10,
            gesture_penalty: 3.0,
            whisper_penalty: 5.0,
            multiple_speaker_penalty: 20.0,
            extra_persona_penalty: 20.0,
            blocked_request_penalty: 5.0,
            proxy_disconnection_penalty: 15.0,
            extra_session_penalty: 10.0,
            lipsync_penalty: 6.0,
            lighting_penalty: 3.0,
        }
    }
}

impl Default for PenaltyRubric {
    fn default() -> Self {
        Self::standard()
    }
}
