use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use edulink::admissions::{
    admissions_router, AdmissionsService, ApplicationDraft, ApplicationStatus, ApplicationStore,
    InMemoryApplicationStore, JsonFileStore, StatsConfig,
};
use edulink::config::AppConfig;
use edulink::error::AppError;
use edulink::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: Arc<PrometheusHandle>,
}

#[derive(Parser, Debug)]
#[command(
    name = "EduLink Admissions Service",
    about = "Serve and demonstrate the admissions application lifecycle engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run an end-to-end CLI demo covering submission, review, and statistics
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug, Default)]
struct DemoArgs {
    /// Student name used for the demo submission
    #[arg(long)]
    student: Option<String>,
    /// Course title used for the demo submission
    #[arg(long)]
    course: Option<String>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Demo(args) => run_demo(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = match config.store.data_path.clone() {
        Some(path) => {
            info!(path = %path.display(), "using file-backed application store");
            build_router(Arc::new(JsonFileStore::new(path)))
        }
        None => build_router(Arc::new(InMemoryApplicationStore::seeded())),
    }
    .layer(Extension(state))
    .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "admissions service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router<S>(store: Arc<S>) -> Router
where
    S: ApplicationStore + 'static,
{
    let service = Arc::new(AdmissionsService::new(store, StatsConfig::default()));
    admissions_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let store = Arc::new(InMemoryApplicationStore::seeded());
    let service = AdmissionsService::new(store, StatsConfig::default());

    println!("Admissions lifecycle demo");

    let mut draft = ApplicationDraft::new();
    if let Some(student) = args.student {
        let mut parts = student.splitn(2, ' ');
        draft.first_name = parts.next().map(str::to_string);
        draft.last_name = parts.next().map(str::to_string);
    }
    draft.advance();
    draft.course_title = args.course;
    draft.advance();
    draft.attach_document("transcript.pdf");
    draft.advance();

    let created = service.submit_draft(draft)?;
    println!(
        "\nSubmitted application {} for {} ({})",
        created.id, created.student_name, created.course_title
    );

    for target in [
        ApplicationStatus::UnderReview,
        ApplicationStatus::Approved,
        ApplicationStatus::Enrolled,
    ] {
        let updated = service.transition_status(&created.id, target)?;
        println!(
            "- {} -> {} (progress {}%)",
            updated.id,
            updated.status.label(),
            updated.progress
        );
    }

    println!("\nApplications (newest first)");
    for record in service.list_applications()? {
        println!(
            "- {} | {} | {} | applied {} | {} ({}%)",
            record.id,
            record.student_name,
            record.course_title,
            record.applied_date,
            record.status.label(),
            record.progress
        );
    }

    let dashboard = service.dashboard_stats()?;
    println!("\nDashboard");
    println!("- total applications: {}", dashboard.total_applications);
    println!("- pending review: {}", dashboard.pending_review);
    println!("- total revenue: {}", dashboard.total_revenue);
    println!("- active agents: {}", dashboard.active_agents);

    let agent = service.agent_stats()?;
    println!("\nAgent summary");
    println!("- total leads: {}", agent.total_leads);
    println!("- conversions: {}", agent.conversions);
    println!("- pending commissions: {}", agent.pending_commissions);
    println!("- total earnings: {}", agent.total_earnings);

    Ok(())
}
