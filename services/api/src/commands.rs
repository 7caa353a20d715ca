use crate::infra::parse_time_zone;
use clap::Args;
use proctor_console::analysis::{PenaltyScorer, ReportEnvelope, ScoreCardView};
use proctor_console::error::AppError;
use proctor_console::schedule::{DateTimeLocalizer, LocalDateTime, Tz, UNAVAILABLE_PLACEHOLDER};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Behaviour report JSON (bare or wrapped in `data`)
    #[arg(long)]
    pub(crate) report: PathBuf,
    /// Print the score card as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct LocalizeArgs {
    /// UTC date (YYYY-MM-DD or DD/MM/YYYY)
    #[arg(long)]
    pub(crate) date: String,
    /// UTC time (HH:MM or HH:MM AM/PM)
    #[arg(long)]
    pub(crate) time: String,
    /// Target IANA time zone
    #[arg(long, default_value = "UTC", value_parser = parse_time_zone)]
    pub(crate) time_zone: Tz,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { report, json } = args;

    let payload = std::fs::read_to_string(&report)?;
    let report = ReportEnvelope::from_json(&payload)?.into_report();
    let view = PenaltyScorer::standard().score(&report).view();

    if json {
        match serde_json::to_string_pretty(&view) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => println!("Score card unavailable: {err}"),
        }
    } else {
        render_score_card(&view, report.monitoring.total_duration_seconds);
    }

    Ok(())
}

pub(crate) fn run_localize(args: LocalizeArgs) -> Result<(), AppError> {
    let LocalizeArgs {
        date,
        time,
        time_zone,
    } = args;

    let local = DateTimeLocalizer::new(time_zone).localize(&date, &time);
    println!("{}", render_local(&local, time_zone));
    Ok(())
}

fn render_local(local: &LocalDateTime, zone: Tz) -> String {
    format!(
        "{} {} ({})",
        local.date_or(UNAVAILABLE_PLACEHOLDER),
        local.time_or(UNAVAILABLE_PLACEHOLDER),
        zone
    )
}

pub(crate) fn render_score_card(view: &ScoreCardView, duration_seconds: u64) {
    println!("Proctoring score card");
    println!(
        "Monitored for {}m {:02}s",
        duration_seconds / 60,
        duration_seconds % 60
    );

    println!("\nDimensions");
    for entry in &view.dimensions {
        println!(
            "- {} ({}%): {}/100 | {}",
            entry.label, entry.weight, entry.score_pct, entry.notes
        );
    }

    println!(
        "\nOverall score: {:.1} ({})",
        view.overall_score, view.level_label
    );
}
