use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Normalised behaviour report for one candidate's proctored session.
///
/// Every counter is already defaulted and non-negative; scorers never see
/// missing or negative values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BehaviorReport {
    pub monitoring: MonitoringSummary,
    pub statistics: BehaviorStatistics,
    pub faces: Vec<FaceRecord>,
}

impl BehaviorReport {
    /// Number of distinct, non-null persona identifiers across all face records.
    pub fn distinct_persona_count(&self) -> usize {
        self.faces
            .iter()
            .filter_map(|face| face.persona_id.as_deref())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Share of the session spent off camera. A zero-length session divides by one.
    pub fn absence_ratio(&self) -> f64 {
        let duration = self.monitoring.total_duration_seconds.max(1) as f64;
        self.statistics.absence_seconds / duration
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoringSummary {
    pub total_duration_seconds: u64,
    /// Always at least one once sanitised.
    pub sessions_count: u32,
}

impl Default for MonitoringSummary {
    fn default() -> Self {
        Self {
            total_duration_seconds: 0,
            sessions_count: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BehaviorStatistics {
    pub absence_seconds: f64,
    pub gesture_count: u32,
    pub whisper_count: u32,
    pub speaker_count: u32,
    pub lipsync_anomaly_count: u32,
    pub lighting_anomaly_count: u32,
    pub blocked_request_count: u32,
    pub proxy_disconnection_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceRecord {
    pub persona_id: Option<String>,
    pub interval: FaceInterval,
}

/// Offsets (seconds from session start) during which the face was tracked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceInterval {
    pub start_seconds: Option<f64>,
    pub end_seconds: Option<f64>,
}
