use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};
use settings::DatabaseSettings;

mod settings;

const DEMO_USER: &str = "demo";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "rentdesk={level},server={level},engine={level},migration={level}",
            level = settings.app.level
        ))
        .init();

    let db = match connect(&settings.database).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!("failed to initialize database: {err}");
            return Err(err);
        }
    };

    let engine = engine::Engine::builder()
        .database(db.clone())
        .build()
        .await?;

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener on {addr}: {err}");
            return Err(err.into());
        }
    };

    server::run_with_listener(engine, db, listener).await?;
    Ok(())
}

/// Opens the configured database, or an in-memory demo database when the
/// settings still hold placeholders.
async fn connect(
    config: &DatabaseSettings,
) -> Result<DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    if !config.is_configured() {
        tracing::warn!(
            "database is not configured, running in demo mode (in-memory, user \"{DEMO_USER}\")"
        );
        let database = sea_orm::Database::connect("sqlite::memory:").await?;
        Migrator::up(&database, None).await?;
        engine::users::ActiveModel {
            username: ActiveValue::Set(DEMO_USER.to_string()),
            password: ActiveValue::Set(DEMO_USER.to_string()),
        }
        .insert(&database)
        .await?;
        return Ok(database);
    }

    let database = sea_orm::Database::connect(config.url.trim()).await?;
    Migrator::up(&database, None).await?;
    tracing::info!("database ready");
    Ok(database)
}
