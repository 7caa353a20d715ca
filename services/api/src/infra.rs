use metrics_exporter_prometheus::PrometheusHandle;
use proctor_console::analysis::{ReportEnvelope, ReportError, ReportSource, SessionId, SourceError};
use proctor_console::error::AppError;
use proctor_console::schedule::{DateTimeLocalizer, Tz};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) default_time_zone: Tz,
}

/// Report source backed by a fixture file or reports pushed in by tests.
#[derive(Default, Clone)]
pub(crate) struct InMemoryReportSource {
    reports: Arc<Mutex<HashMap<SessionId, ReportEnvelope>>>,
}

impl InMemoryReportSource {
    /// Load a JSON object keyed by session id; each value may use either report envelope.
    pub(crate) fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        let reports: HashMap<SessionId, ReportEnvelope> =
            serde_json::from_str(&raw).map_err(ReportError::from)?;
        Ok(Self {
            reports: Arc::new(Mutex::new(reports)),
        })
    }

    #[cfg(test)]
    pub(crate) fn insert(&self, session: SessionId, envelope: ReportEnvelope) {
        let mut guard = self.reports.lock().expect("report source mutex poisoned");
        guard.insert(session, envelope);
    }

    /// Number of stored reports; a poisoned store counts as empty.
    pub(crate) fn len(&self) -> usize {
        self.reports
            .lock()
            .map(|guard| guard.len())
            .unwrap_or_default()
    }
}

impl ReportSource for InMemoryReportSource {
    fn fetch(&self, session: &SessionId) -> Result<Option<ReportEnvelope>, SourceError> {
        let guard = self
            .reports
            .lock()
            .map_err(|_| SourceError::Unavailable("report store poisoned".to_string()))?;
        Ok(guard.get(session).cloned())
    }
}

pub(crate) fn parse_time_zone(raw: &str) -> Result<Tz, String> {
    DateTimeLocalizer::from_name(raw)
        .map(|localizer| localizer.zone())
        .map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_reports_keyed_by_session() {
        let path = std::env::temp_dir().join(format!(
            "proctor-console-reports-{}.json",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).expect("temp file");
        write!(
            file,
            r#"{{ "sess-1": {{ "data": {{ "monitoring": {{ "sessions_count": 1 }} }} }}, "sess-2": {{}} }}"#
        )
        .expect("fixture written");

        let source = InMemoryReportSource::from_path(&path).expect("fixture loads");
        std::fs::remove_file(&path).ok();

        assert_eq!(source.len(), 2);
        assert!(source
            .fetch(&SessionId("sess-1".to_string()))
            .expect("fetch works")
            .is_some());
    }

    #[test]
    fn poisoned_store_degrades_without_panicking() {
        let source = InMemoryReportSource::default();
        source.insert(SessionId("sess-1".to_string()), ReportEnvelope::Bare(Default::default()));
        let shared = source.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared.reports.lock().expect("lock acquired");
            panic!("writer crashed while holding the store");
        })
        .join();

        assert_eq!(source.len(), 0);
        assert!(matches!(
            source.fetch(&SessionId("sess-1".to_string())),
            Err(SourceError::Unavailable(_))
        ));
    }

    #[test]
    fn time_zone_parser_reports_unknown_names() {
        assert_eq!(parse_time_zone("Asia/Tokyo"), Ok(Tz::Asia__Tokyo));
        assert!(parse_time_zone("Asia/Atlantis").is_err());
    }
}
