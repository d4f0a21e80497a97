use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_loan_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use loan_risk::config::AppConfig;
use loan_risk::error::AppError;
use loan_risk::telemetry;
use loan_risk::workflows::loan::LoanEvaluator;
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

    telemetry::init(&config.telemetry)?;

    let policy = config.lending.policy()?;
    let policy_source = config
        .lending
        .policy_path
        .as_deref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    info!(
        %policy_source,
        base_rate = policy.base_rate,
        rate_cap = policy.rate_cap,
        "lending policy loaded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let evaluator = Arc::new(LoanEvaluator::new(policy));

    let app = with_loan_routes(evaluator)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "loan risk evaluator ready");

    axum::serve(listener, app).await?;
    Ok(())
}
