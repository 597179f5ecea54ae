use anyhow::Context;
use catalog::configuration::{get_configuration, get_connection_pool};
use catalog::startup::{migrate, run};
use catalog::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;
use std::path::Path;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("catalog".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let settings = get_configuration().context("Failed to read configuration.")?;

    if let Some(parent) = Path::new(&settings.database.path).parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create database directory: {}", parent.display()))?;
    }

    tracing::info!(
        db_path = %settings.database.path,
        max_connections = settings.database.max_connections,
        "Opening SQLite database"
    );
    let db_pool = get_connection_pool(&settings.database);
    migrate(&db_pool)
        .await
        .context("Failed to run database migrations.")?;

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener =
        TcpListener::bind(&address).with_context(|| format!("failed to bind to {}", address))?;

    run(listener, db_pool)?.await?;
    Ok(())
}
