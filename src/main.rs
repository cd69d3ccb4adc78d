use articles_api::application::{ports::HealthCheckPort, services::ApplicationServices};
use articles_api::config::AppConfig;
use articles_api::domain::article::ArticleRepository;
use articles_api::infrastructure::{
    database, health::PostgresHealthCheck, repositories::PostgresArticleRepository,
};
use articles_api::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::{signal, sync::Notify};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How long in-flight requests may keep running after a shutdown signal.
const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let article_repo: Arc<dyn ArticleRepository> =
        Arc::new(PostgresArticleRepository::new(pool.clone()));
    let health_check: Arc<HealthCheckPort> = Arc::new(PostgresHealthCheck::new(pool.clone()));

    let services = Arc::new(ApplicationServices::new(Arc::clone(&article_repo)));

    let state = HttpState::new(Arc::clone(&services))
        .with_health_check(health_check)
        .with_request_timeout(config.request_timeout());

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    let stop = Arc::new(Notify::new());
    let stop_server = Arc::clone(&stop);
    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { stop_server.notified().await })
            .await
    });

    shutdown_signal().await;
    stop.notify_one();

    match tokio::time::timeout(SHUTDOWN_GRACE_PERIOD, server).await {
        Ok(joined) => joined??,
        Err(_) => tracing::warn!(
            grace_secs = SHUTDOWN_GRACE_PERIOD.as_secs(),
            "graceful shutdown timed out, dropping remaining connections"
        ),
    }

    pool.close().await;
    tracing::info!("shutdown complete");
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
