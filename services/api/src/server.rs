use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryReportSource};
use crate::routes::with_report_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use proctor_console::analysis::{PenaltyRubric, ReportScoringService};
use proctor_console::config::AppConfig;
use proctor_console::error::AppError;
use proctor_console::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(path) = args.reports_file.take() {
        config.reports.reports_file = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        default_time_zone: config.localization.default_time_zone,
    };

    let source = match &config.reports.reports_file {
        Some(path) => {
            let source = InMemoryReportSource::from_path(path)?;
            info!(path = %path.display(), reports = source.len(), "seeded report source");
            source
        }
        None => InMemoryReportSource::default(),
    };
    let scoring_service = Arc::new(ReportScoringService::new(
        Arc::new(source),
        PenaltyRubric::standard(),
    ));

    let app = with_report_routes(scoring_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        time_zone = %config.localization.default_time_zone,
        "proctoring console api ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
