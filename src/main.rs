use anyhow::Result;
use haven_core::application::{
    browse::Paginator,
    ports::{source::ArticleSource, util::SlugGenerator},
    services::ApplicationServices,
};
use haven_core::config::AppConfig;
use haven_core::infrastructure::{
    readiness::StoreHandle, source::JsonFileArticleSource, util::DefaultSlugGenerator,
};
use haven_core::presentation::http::{routes::build_router_with_origins, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let source: Arc<dyn ArticleSource> =
        Arc::new(JsonFileArticleSource::new(config.articles_path().clone()));
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let paginator = Paginator::new(config.page_size())?;

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&source),
        Arc::clone(&slugger),
        paginator,
        config.site_name(),
    ));

    let store = StoreHandle::new();
    spawn_store_load(Arc::clone(&services), store.clone());

    let state = HttpState {
        services: Arc::clone(&services),
        store,
        store_ready_timeout: config.store_ready_timeout(),
    };

    let app = build_router_with_origins(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Loads the store in the background; requests wait on the handle.
fn spawn_store_load(services: Arc<ApplicationServices>, store: StoreHandle) {
    tokio::spawn(async move {
        match services.store_loader.load().await {
            Ok(loaded) => store.publish(loaded),
            Err(err) => tracing::error!(error = %err, "failed to load article store"),
        }
    });
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
