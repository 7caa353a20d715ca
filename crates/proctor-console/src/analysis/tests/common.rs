use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::analysis::report::{
    BehaviorReport, BehaviorStatistics, FaceInterval, FaceRecord, MonitoringSummary,
    ReportEnvelope,
};
use crate::analysis::repository::{ReportSource, SessionId, SourceError};
use crate::analysis::{report_router, PenaltyRubric, ReportScoringService};

/// A clean ten-minute session with one identified candidate.
pub(super) fn clean_report() -> BehaviorReport {
    BehaviorReport {
        monitoring: MonitoringSummary {
            total_duration_seconds: 600,
            sessions_count: 1,
        },
        statistics: BehaviorStatistics::default(),
        faces: vec![face(Some("cand-1")), face(Some("cand-1"))],
    }
}

pub(super) fn face(persona: Option<&str>) -> FaceRecord {
    FaceRecord {
        persona_id: persona.map(str::to_string),
        interval: FaceInterval {
            start_seconds: Some(0.0),
            end_seconds: Some(60.0),
        },
    }
}

pub(super) fn report_json() -> Value {
    json!({
        "monitoring": { "total_duration_seconds": 600, "sessions_count": 2 },
        "statistics": {
            "tiempo_total_ausencia_segundos": 30,
            "total_gestos": 4,
            "total_anomalias_voz": 1,
            "total_hablantes": 2,
            "total_anomalias_lipsync": 0,
            "total_anomalias_iluminacion": 5,
            "total_blocked_requests": 1,
            "total_proxy_disconnections": 1
        },
        "registros": { "rostros": [
            { "persona_id": "cand-1", "tiempo_inicio": 0, "tiempo_fin": 300 },
            { "persona_id": "cand-1", "tiempo_inicio": 320, "tiempo_fin": 600 }
        ] }
    })
}

pub(super) fn envelope() -> ReportEnvelope {
    ReportEnvelope::from_value(report_json()).expect("fixture parses")
}

#[derive(Default, Clone)]
pub(super) struct MemorySource {
    reports: Arc<Mutex<HashMap<SessionId, ReportEnvelope>>>,
}

impl MemorySource {
    pub(super) fn with_report(session: &str, envelope: ReportEnvelope) -> Self {
        let source = Self::default();
        source
            .reports
            .lock()
            .expect("source mutex poisoned")
            .insert(SessionId(session.to_string()), envelope);
        source
    }
}

impl ReportSource for MemorySource {
    fn fetch(&self, session: &SessionId) -> Result<Option<ReportEnvelope>, SourceError> {
        let guard = self.reports.lock().expect("source mutex poisoned");
        Ok(guard.get(session).cloned())
    }
}

pub(super) struct UnavailableSource;

impl ReportSource for UnavailableSource {
    fn fetch(&self, _session: &SessionId) -> Result<Option<ReportEnvelope>, SourceError> {
        Err(SourceError::Unavailable("backend offline".to_string()))
    }
}

pub(super) fn service_with<S: ReportSource + 'static>(source: S) -> ReportScoringService<S> {
    ReportScoringService::new(Arc::new(source), PenaltyRubric::standard())
}

pub(super) fn router_with<S: ReportSource + 'static>(source: S) -> axum::Router {
    report_router(Arc::new(service_with(source)))
}
