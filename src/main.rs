use grocy::{
    application::grocery_service::GroceryServiceImpl,
    config::{Config, Seed},
    domain::collection::Collection,
    http::{routes::lists, routing},
    infrastructure::{clock::SystemClock, ids::UuidV4Ids, sample_data::sample_collection},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    let mut ids = UuidV4Ids;
    let clock = SystemClock;
    let collection = match config.seed {
        Seed::Sample => sample_collection(&mut ids, &clock),
        Seed::Empty => Collection::new(),
    };
    tracing::info!(lists = collection.len(), seed = ?config.seed, "collection ready");

    let service = GroceryServiceImpl::with_collection(collection, ids, clock);
    let lists_router = lists::router(lists::AppState::new(service, config.recent_limit));
    let router = routing::app(lists_router);

    tracing::info!(addr = %config.addr, "listening");
    axum::serve(tokio::net::TcpListener::bind(config.addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal::ctrl_c;
    let _ = ctrl_c().await;
    tracing::info!("shutdown");
}
