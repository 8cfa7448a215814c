use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(assetdesk_inventory_migration::Migrator).await;
}
