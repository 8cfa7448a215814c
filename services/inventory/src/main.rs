use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use assetdesk_core::config::Config;
use assetdesk_core::tracing::init_tracing;
use assetdesk_inventory::config::InventoryConfig;
use assetdesk_inventory::router::build_router;
use assetdesk_inventory::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = InventoryConfig::try_from_env().context("load inventory config")?;

    let db = Database::connect(&config.database_url)
        .await
        .context("connect to database")?;

    let state = AppState {
        db,
        anonymous_access: config.anonymous_list_access,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.inventory_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    info!(
        anonymous_list_access = ?config.anonymous_list_access,
        "inventory service listening on {addr}"
    );
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
