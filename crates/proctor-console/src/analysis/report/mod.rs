pub mod domain;
mod envelope;

pub use domain::{BehaviorReport, BehaviorStatistics, FaceInterval, FaceRecord, MonitoringSummary};
pub use envelope::{
    sanitize_report, RawBehaviorReport, RawFaceRecord, RawMonitoring, RawPersonaId, RawRecords,
    RawStatistics, ReportEnvelope, ReportError,
};
