use std::sync::Arc;

use courtside_recs::{
    config::Config,
    db::{create_pool, create_redis_client, Cache, CachedCatalog, PgCatalogStore, PgInteractionStore},
    db::CatalogRepository,
    routes::{create_router, AppState},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("courtside_recs=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let pg_catalog = Arc::new(PgCatalogStore::new(pool.clone()));
    let interactions = Arc::new(PgInteractionStore::new(pool));

    // A zero TTL reads the catalog straight from Postgres on every request
    let mut cache_handle = None;
    let catalog: Arc<dyn CatalogRepository> = if config.catalog_cache_ttl_secs > 0 {
        let client = create_redis_client(&config.redis_url)?;
        let (cache, handle) = Cache::new(client).await;
        cache_handle = Some(handle);
        Arc::new(CachedCatalog::new(
            pg_catalog,
            cache,
            config.catalog_cache_ttl_secs,
        ))
    } else {
        pg_catalog
    };

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(catalog, interactions, config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server running");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = cache_handle {
        handle.shutdown().await;
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
