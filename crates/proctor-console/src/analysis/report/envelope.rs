use super::domain::{
    BehaviorReport, BehaviorStatistics, FaceInterval, FaceRecord, MonitoringSummary,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Error raised when a backend payload cannot be read as a behaviour report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("malformed behaviour report: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("malformed behaviour report: expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// The two response shapes the analysis backend serves.
///
/// An object carrying a `data` key is always the wrapped shape; a failed
/// wrapped parse is an error, never a bare report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportEnvelope {
    Wrapped { data: RawBehaviorReport },
    Bare(RawBehaviorReport),
}

impl ReportEnvelope {
    pub fn from_json(payload: &str) -> Result<Self, ReportError> {
        Self::from_value(serde_json::from_str(payload)?)
    }

    pub fn from_value(value: Value) -> Result<Self, ReportError> {
        let mut fields = into_object(value)?;
        match fields.remove("data") {
            Some(data) => Ok(ReportEnvelope::Wrapped {
                data: parse_raw(into_object(data)?)?,
            }),
            None => Ok(ReportEnvelope::Bare(parse_raw(fields)?)),
        }
    }

    pub fn into_raw(self) -> RawBehaviorReport {
        match self {
            ReportEnvelope::Wrapped { data } => data,
            ReportEnvelope::Bare(raw) => raw,
        }
    }

    pub fn into_report(self) -> BehaviorReport {
        sanitize_report(self.into_raw())
    }
}

impl<'de> Deserialize<'de> for ReportEnvelope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

fn into_object(value: Value) -> Result<Map<String, Value>, ReportError> {
    match value {
        Value::Object(fields) => Ok(fields),
        Value::Null => Err(ReportError::NotAnObject("null")),
        Value::Bool(_) => Err(ReportError::NotAnObject("a boolean")),
        Value::Number(_) => Err(ReportError::NotAnObject("a number")),
        Value::String(_) => Err(ReportError::NotAnObject("a string")),
        Value::Array(_) => Err(ReportError::NotAnObject("an array")),
    }
}

fn parse_raw(fields: Map<String, Value>) -> Result<RawBehaviorReport, ReportError> {
    Ok(serde_json::from_value(Value::Object(fields))?)
}

/// Report exactly as the backend sends it: every field optional, numbers untrusted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawBehaviorReport {
    pub monitoring: Option<RawMonitoring>,
    pub statistics: Option<RawStatistics>,
    pub registros: Option<RawRecords>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMonitoring {
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_duration_seconds: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub sessions_count: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawStatistics {
    #[serde(default, deserialize_with = "lenient_number")]
    pub tiempo_total_ausencia_segundos: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_gestos: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_anomalias_voz: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_hablantes: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_anomalias_lipsync: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_anomalias_iluminacion: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_blocked_requests: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_proxy_disconnections: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecords {
    pub rostros: Option<Vec<RawFaceRecord>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFaceRecord {
    #[serde(default, deserialize_with = "lenient_persona_id")]
    pub persona_id: Option<RawPersonaId>,
    #[serde(default, alias = "start", deserialize_with = "lenient_number")]
    pub tiempo_inicio: Option<f64>,
    #[serde(default, alias = "end", deserialize_with = "lenient_number")]
    pub tiempo_fin: Option<f64>,
}

/// Face clustering emits numeric ids on some backends and strings on others.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawPersonaId {
    Number(i64),
    Text(String),
}

impl RawPersonaId {
    fn normalize(self) -> Option<String> {
        match self {
            RawPersonaId::Number(id) => Some(id.to_string()),
            RawPersonaId::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
        }
    }
}

/// Reads a number leniently: numeric strings are accepted, any other
/// wrong-typed value is dropped with a warning instead of failing the report.
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => {
            let parsed = text.trim().parse::<f64>().ok();
            if parsed.is_none() {
                warn!(value = %text, "ignoring non-numeric behaviour report value");
            }
            parsed
        }
        Some(other) => {
            warn!(value = %other, "ignoring non-numeric behaviour report value");
            None
        }
    })
}

/// Integral floats become numeric ids; other floats keep their textual form.
pub(crate) fn lenient_persona_id<'de, D>(
    deserializer: D,
) -> Result<Option<RawPersonaId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(RawPersonaId::Text(text)),
        Some(Value::Number(number)) => match (number.as_i64(), number.as_f64()) {
            (Some(id), _) => Some(RawPersonaId::Number(id)),
            (None, Some(float)) if float.fract() == 0.0 && float.abs() < i64::MAX as f64 => {
                Some(RawPersonaId::Number(float as i64))
            }
            _ => Some(RawPersonaId::Text(number.to_string())),
        },
        Some(other) => {
            warn!(value = %other, "ignoring unusable persona id");
            None
        }
    })
}

/// Normalise a raw backend report: absent, negative and non-finite numbers
/// become zero, fractional counts are floored, and the session count is at least one.
pub fn sanitize_report(raw: RawBehaviorReport) -> BehaviorReport {
    let monitoring = raw.monitoring.unwrap_or_default();
    let statistics = raw.statistics.unwrap_or_default();
    let faces = raw
        .registros
        .and_then(|records| records.rostros)
        .unwrap_or_default();

    let reported_sessions = count(monitoring.sessions_count);
    if reported_sessions < 1 {
        warn!(
            reported = ?monitoring.sessions_count,
            "behaviour report has no monitoring sessions; scoring as a single session"
        );
    }

    BehaviorReport {
        monitoring: MonitoringSummary {
            total_duration_seconds: non_negative(monitoring.total_duration_seconds).floor() as u64,
            sessions_count: reported_sessions.max(1),
        },
        statistics: BehaviorStatistics {
            absence_seconds: non_negative(statistics.tiempo_total_ausencia_segundos),
            gesture_count: count(statistics.total_gestos),
            whisper_count: count(statistics.total_anomalias_voz),
            speaker_count: count(statistics.total_hablantes),
            lipsync_anomaly_count: count(statistics.total_anomalias_lipsync),
            lighting_anomaly_count: count(statistics.total_anomalias_iluminacion),
            blocked_request_count: count(statistics.total_blocked_requests),
            proxy_disconnection_count: count(statistics.total_proxy_disconnections),
        },
        faces: faces
            .into_iter()
            .map(|face| FaceRecord {
                persona_id: face.persona_id.and_then(RawPersonaId::normalize),
                interval: FaceInterval {
                    start_seconds: face.tiempo_inicio.filter(|value| value.is_finite()),
                    end_seconds: face.tiempo_fin.filter(|value| value.is_finite()),
                },
            })
            .collect(),
    }
}

fn non_negative(value: Option<f64>) -> f64 {
    match value {
        Some(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

fn count(value: Option<f64>) -> u32 {
    // `as` saturates at u32::MAX for oversized inputs.
    non_negative(value).floor() as u32
}
