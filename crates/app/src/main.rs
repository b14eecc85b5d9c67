use clap::Parser;
use migration::{Migrator, MigratorTrait};
use settings::Database;

mod settings;

#[derive(Debug, Parser)]
#[command(name = "promo_api", version)]
struct Args {
    /// Settings file (TOML). Missing file is not an error.
    #[arg(long, default_value = settings::DEFAULT_CONFIG_PATH)]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    let settings = settings::Settings::new(&args.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "promo_api={level},server={level},engine={level},migration={level},tower_http={level}",
            level = settings.app.level
        ))
        .init();

    tracing::info!("Connecting to {} database...", settings.server.database.kind());
    let db = parse_database(&settings.server.database).await?;

    let engine = engine::Engine::builder().database(db).build().await?;

    let addr = settings.server.listen_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    server::run_with_listener(engine, listener).await?;

    Ok(())
}

/// Connects and brings the schema up to date. Any failure here must stop the
/// process before the listener is bound.
async fn parse_database(
    config: &settings::Database,
) -> Result<sea_orm::DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    let url = match config {
        Database::Memory => String::from("sqlite::memory:"),
        Database::Sqlite(path) => format!("sqlite:{}?mode=rwc", path),
        Database::Postgres(dsn) => settings::postgres_url(dsn)?,
    };

    let database = sea_orm::Database::connect(url).await?;
    Migrator::up(&database, None).await?;
    tracing::info!("Schema ready");
    Ok(database)
}
