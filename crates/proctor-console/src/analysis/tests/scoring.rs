use super::common::*;
use crate::analysis::report::BehaviorReport;
use crate::analysis::{
    compute_score_card, ComplianceLevel, Dimension, PenaltyRubric, PenaltyScorer, ScoreCard,
};

fn score_of(card: &ScoreCard, dimension: Dimension) -> f64 {
    card.dimension(dimension)
        .expect("every dimension is scored")
        .score
}

fn with_absence(duration: u64, absence: f64) -> BehaviorReport {
    let mut report = clean_report();
    report.monitoring.total_duration_seconds = duration;
    report.statistics.absence_seconds = absence;
    report
}

#[test]
fn clean_session_scores_full_marks() {
    let card = compute_score_card(&clean_report());

    assert_eq!(card.dimensions.len(), 8);
    assert!(card.dimensions.iter().all(|entry| entry.score == 100.0));
    assert_eq!(card.overall_score, 100.0);
    assert_eq!(card.level(), ComplianceLevel::Compliant);
}

#[test]
fn dimensions_follow_display_order_with_fixed_weights() {
    let card = compute_score_card(&clean_report());

    let order: Vec<Dimension> = card.dimensions.iter().map(|entry| entry.dimension).collect();
    assert_eq!(order, Dimension::ordered().to_vec());

    let weights: Vec<u8> = card.dimensions.iter().map(|entry| entry.weight).collect();
    assert_eq!(weights, vec![30, 15, 15, 10, 10, 10, 5, 5]);
    assert_eq!(card.dimensions[4].name, "Navigation & Security");
}

#[test]
fn mixed_report_applies_every_penalty() {
    let card = compute_score_card(&envelope().into_report());

    assert_eq!(score_of(&card, Dimension::PresenceContinuity), 40.0);
    assert_eq!(score_of(&card, Dimension::VisualBehavior), 88.0);
    assert_eq!(score_of(&card, Dimension::AudioQuality), 75.0);
    assert_eq!(score_of(&card, Dimension::IdentityConsistency), 100.0);
    assert_eq!(score_of(&card, Dimension::NavigationSecurity), 80.0);
    assert_eq!(score_of(&card, Dimension::SessionContinuity), 90.0);
    assert_eq!(score_of(&card, Dimension::LipSync), 100.0);
    assert_eq!(score_of(&card, Dimension::Lighting), 85.0);
    assert!((card.overall_score - 72.7).abs() < 1e-9);
    assert_eq!(card.level(), ComplianceLevel::Review);
}

#[test]
fn presence_below_threshold_is_not_halved() {
    let card = compute_score_card(&with_absence(600, 30.0));
    assert_eq!(score_of(&card, Dimension::PresenceContinuity), 40.0);
}

#[test]
fn presence_above_threshold_is_halved_before_clamping() {
    let card = compute_score_card(&with_absence(100, 15.0));
    assert_eq!(score_of(&card, Dimension::PresenceContinuity), 35.0);

    let card = compute_score_card(&with_absence(600, 70.0));
    assert_eq!(score_of(&card, Dimension::PresenceContinuity), 0.0);
}

#[test]
fn presence_exactly_at_threshold_is_not_halved() {
    let card = compute_score_card(&with_absence(350, 35.0));
    assert_eq!(score_of(&card, Dimension::PresenceContinuity), 30.0);
}

#[test]
fn zero_duration_uses_unit_denominator() {
    let card = compute_score_card(&with_absence(0, 0.0));
    assert_eq!(score_of(&card, Dimension::PresenceContinuity), 100.0);

    let card = compute_score_card(&with_absence(0, 1.0));
    assert_eq!(score_of(&card, Dimension::PresenceContinuity), 49.0);
    assert!(card.overall_score.is_finite());
}

#[test]
fn identity_is_zero_without_identified_faces() {
    let mut report = clean_report();
    report.faces.clear();
    assert_eq!(
        score_of(&compute_score_card(&report), Dimension::IdentityConsistency),
        0.0
    );

    report.faces = vec![face(None), face(None)];
    assert_eq!(
        score_of(&compute_score_card(&report), Dimension::IdentityConsistency),
        0.0
    );
}

#[test]
fn identity_penalises_each_extra_persona() {
    let mut report = clean_report();
    report.faces = vec![face(Some("a")), face(Some("b")), face(None), face(Some("c"))];
    assert_eq!(
        score_of(&compute_score_card(&report), Dimension::IdentityConsistency),
        60.0
    );

    report.faces = (0..7)
        .map(|index| face(Some(&format!("p-{index}"))))
        .collect();
    assert_eq!(
        score_of(&compute_score_card(&report), Dimension::IdentityConsistency),
        0.0
    );
}

#[test]
fn single_speaker_does_not_trigger_flat_audio_penalty() {
    let mut report = clean_report();
    report.statistics.speaker_count = 1;
    report.statistics.whisper_count = 2;
    assert_eq!(
        score_of(&compute_score_card(&report), Dimension::AudioQuality),
        90.0
    );

    report.statistics.speaker_count = 3;
    assert_eq!(
        score_of(&compute_score_card(&report), Dimension::AudioQuality),
        70.0
    );
}

#[test]
fn uniform_dimension_scores_average_to_the_same_value() {
    let mut report = clean_report();
    report.statistics.absence_seconds = 10.0;
    report.statistics.gesture_count = 4;
    report.statistics.whisper_count = 4;
    report.faces = vec![face(Some("a")), face(Some("b"))];
    report.statistics.blocked_request_count = 4;
    report.monitoring.sessions_count = 3;
    report.statistics.lipsync_anomaly_count = 4;
    report.statistics.lighting_anomaly_count = 4;

    // Five points per count so every dimension lands on 80.
    let rubric = PenaltyRubric {
        gesture_penalty: 5.0,
        lipsync_penalty: 5.0,
        lighting_penalty: 5.0,
        ..PenaltyRubric::standard()
    };
    let card = PenaltyScorer::new(rubric).score(&report);

    assert!(card.dimensions.iter().all(|entry| entry.score == 80.0));
    assert_eq!(card.overall_score, 80.0);
}

#[test]
fn scores_stay_in_range_for_extreme_counts() {
    let extremes = [0_u32, 1, 7, 1_000, u32::MAX];
    for &value in &extremes {
        let mut report = clean_report();
        report.monitoring.sessions_count = value.max(1);
        report.monitoring.total_duration_seconds = u64::from(value);
        report.statistics.absence_seconds = f64::from(value);
        report.statistics.gesture_count = value;
        report.statistics.whisper_count = value;
        report.statistics.speaker_count = value;
        report.statistics.lipsync_anomaly_count = value;
        report.statistics.lighting_anomaly_count = value;
        report.statistics.blocked_request_count = value;
        report.statistics.proxy_disconnection_count = value;

        let card = compute_score_card(&report);
        for entry in &card.dimensions {
            assert!(
                (0.0..=100.0).contains(&entry.score),
                "{} out of range for {value}: {}",
                entry.name,
                entry.score
            );
        }
        assert!((0.0..=100.0).contains(&card.overall_score));
    }
}

#[test]
fn view_rounds_for_display() {
    let card = compute_score_card(&with_absence(600, 0.3));
    let view = card.view();

    // Presence: 100 - 0.6 = 99.4 -> 99%.
    assert_eq!(view.dimensions[0].score_pct, 99);
    assert_eq!(view.level_label, "Compliant");
    assert!((view.overall_score - 99.8).abs() < 1e-9);
}

#[test]
fn notes_explain_the_halving() {
    let card = compute_score_card(&with_absence(100, 15.0));
    let presence = card
        .dimension(Dimension::PresenceContinuity)
        .expect("presence scored");
    assert!(presence.notes.contains("above 10% threshold"));
}
