use super::super::report::BehaviorReport;
use super::config::PenaltyRubric;
use super::dimension::Dimension;
use super::DimensionScore;

const BASE_SCORE: f64 = 100.0;

pub(crate) fn score_report(
    report: &BehaviorReport,
    rubric: &PenaltyRubric,
) -> (Vec<DimensionScore>, f64) {
    let dimensions: Vec<DimensionScore> = Dimension::ordered()
        .into_iter()
        .map(|dimension| {
            let (score, notes) = score_dimension(dimension, report, rubric);
            DimensionScore {
                dimension,
                name: dimension.label(),
                score,
                weight: dimension.weight(),
                notes,
            }
        })
        .collect();

    let overall_score = dimensions
        .iter()
        .map(|entry| entry.score * f64::from(entry.weight) / 100.0)
        .sum::<f64>()
        .clamp(0.0, BASE_SCORE);

    (dimensions, overall_score)
}

fn score_dimension(
    dimension: Dimension,
    report: &BehaviorReport,
    rubric: &PenaltyRubric,
) -> (f64, String) {
    let stats = &report.statistics;
    match dimension {
        Dimension::PresenceContinuity => presence_continuity(report, rubric),
        Dimension::VisualBehavior => {
            let penalty = rubric.gesture_penalty * f64::from(stats.gesture_count);
            (
                clamp_score(BASE_SCORE - penalty),
                format!("{} suspicious gesture(s)", stats.gesture_count),
            )
        }
        Dimension::AudioQuality => {
            let mut raw = BASE_SCORE - rubric.whisper_penalty * f64::from(stats.whisper_count);
            if stats.speaker_count > 1 {
                raw -= rubric.multiple_speaker_penalty;
            }
            (
                clamp_score(raw),
                format!(
                    "{} whisper anomaly(ies), {} speaker(s) detected",
                    stats.whisper_count, stats.speaker_count
                ),
            )
        }
        Dimension::IdentityConsistency => identity_consistency(report, rubric),
        Dimension::NavigationSecurity => {
            let penalty = rubric.blocked_request_penalty * f64::from(stats.blocked_request_count)
                + rubric.proxy_disconnection_penalty * f64::from(stats.proxy_disconnection_count);
            (
                clamp_score(BASE_SCORE - penalty),
                format!(
                    "{} blocked request(s), {} proxy disconnection(s)",
                    stats.blocked_request_count, stats.proxy_disconnection_count
                ),
            )
        }
        Dimension::SessionContinuity => {
            let sessions = report.monitoring.sessions_count.max(1);
            let penalty = rubric.extra_session_penalty * f64::from(sessions - 1);
            (
                clamp_score(BASE_SCORE - penalty),
                format!("{sessions} monitoring session(s)"),
            )
        }
        Dimension::LipSync => {
            let penalty = rubric.lipsync_penalty * f64::from(stats.lipsync_anomaly_count);
            (
                clamp_score(BASE_SCORE - penalty),
                format!("{} lip-sync anomaly(ies)", stats.lipsync_anomaly_count),
            )
        }
        Dimension::Lighting => {
            let penalty = rubric.lighting_penalty * f64::from(stats.lighting_anomaly_count);
            (
                clamp_score(BASE_SCORE - penalty),
                format!("{} lighting anomaly(ies)", stats.lighting_anomaly_count),
            )
        }
    }
}

// Subtract, halve past the threshold, then clamp.
fn presence_continuity(report: &BehaviorReport, rubric: &PenaltyRubric) -> (f64, String) {
    let absence = report.statistics.absence_seconds;
    let ratio = report.absence_ratio();

    let mut raw = BASE_SCORE - rubric.absence_penalty_per_second * absence;
    let halved = ratio > rubric.absence_ratio_threshold;
    if halved {
        raw /= 2.0;
    }

    let notes = if halved {
        format!(
            "{absence:.0}s absent ({:.1}% of session, above {:.0}% threshold)",
            ratio * 100.0,
            rubric.absence_ratio_threshold * 100.0
        )
    } else {
        format!("{absence:.0}s absent ({:.1}% of session)", ratio * 100.0)
    };

    (clamp_score(raw), notes)
}

fn identity_consistency(report: &BehaviorReport, rubric: &PenaltyRubric) -> (f64, String) {
    let personas = report.distinct_persona_count();
    if personas == 0 {
        return (0.0, "no identified face recorded".to_string());
    }

    let penalty = rubric.extra_persona_penalty * (personas - 1) as f64;
    (
        clamp_score(BASE_SCORE - penalty),
        format!("{personas} distinct person(s) identified"),
    )
}

fn clamp_score(raw: f64) -> f64 {
    raw.clamp(0.0, BASE_SCORE)
}
