use crate::cli::ServeArgs;
use crate::infra::{build_site, load_config, AppState};
use crate::routes::site_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use skillfolio::error::AppError;
use skillfolio::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = load_config(args.posts_dir.take())?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let site = build_site(&config)?;
    let post_count = site.posts().len();

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        site: Arc::new(site),
    };

    let app = site_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        posts = post_count,
        posts_dir = %config.content.posts_dir.display(),
        "portfolio site ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
