mod app;
mod doc;
mod dtos;
mod routes;
mod utils;

use database::db::create_connection;
use log::info;
use migration::{Migrator, MigratorTrait};
use utils::shutdown::shutdown_signal;

/// Environment variable holding the listen address
const BIND_ADDR_VAR: &str = "BIND_ADDR";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let db = create_connection().await?;
    Migrator::up(&db, None).await?;

    let addr = std::env::var(BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Running axum on http://{addr}");

    axum::serve(listener, app::router(db))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
