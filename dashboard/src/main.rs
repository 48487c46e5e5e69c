#![deny(clippy::all, clippy::cargo)]
#![warn(clippy::nursery, clippy::pedantic)]
#![allow(clippy::cargo_common_metadata, clippy::multiple_crate_versions)]

use config::{AppConfig, EnvironmentConfig, FromEnv};
use infra_upstream_repository_impl::HttpUpstreamRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use player_stats_dashboard::refresh_loop::UninitializedDashboard;
use player_stats_dashboard::refresher::ChartRefresher;
use player_stats_dashboard::telemetry::sentry_layer;
use player_stats_dashboard::text_surface::TextChartSurface;

// only send sentry events when it's not running locally
fn init_sentry(config: &EnvironmentConfig) -> Option<sentry::ClientInitGuard> {
    if config.is_local() {
        return None;
    }

    let dsn = config.sentry_dsn.as_deref()?;
    let guard = sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            traces_sample_rate: 0.1,
            environment: Some(config.environment_name.clone().into()),
            ..Default::default()
        },
    ));

    sentry::configure_scope(|scope| scope.set_level(Some(sentry::Level::Warning)));
    Some(guard)
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {error}");
        std::future::pending::<()>().await;
    }
    tracing::info!("received ctrl-c");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Reading config...");
    let config = AppConfig::from_env()?;

    let _sentry_guard = init_sentry(&config.environment_config);

    // initialize tracing
    // see https://github.com/tokio-rs/axum/blob/79a0a54bc9f0f585c974b5e6793541baff980662/examples/tracing-aka-logging/src/main.rs
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_layer())
        .init();

    let repository = HttpUpstreamRepository::try_new(&config.stats_server_config)?;
    tracing::info!(url = repository.stats_history_url(), "polling stats server");

    let refresher = ChartRefresher::new(
        config.dashboard_config.max_data_points,
        TextChartSurface::default(),
    );
    let running = UninitializedDashboard::new(repository, refresher)
        .initialize()
        .await?;

    running
        .run_until(
            config.dashboard_config.refresh_interval(),
            shutdown_signal(),
        )
        .await;

    Ok(())
}
