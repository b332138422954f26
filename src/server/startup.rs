use sha2::{Digest, Sha512};
use std::time::Duration;
use tower_sessions::{
    cookie::Key, service::SignedCookie, ExpiredDeletion, Expiry, SessionManagerLayer,
};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{config::Config, error::AppError, middleware::session::SESSION_COOKIE_NAME};

/// Sessions expire after a day without requests.
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Interval between sweeps of expired sessions.
const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Installs the global tracing subscriber.
///
/// Filter directives are read from `RUST_LOG`, defaulting to debug output for
/// the application and the HTTP trace layer.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bugtracker=debug,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session store in the application database.
///
/// Shares the SeaORM connection pool, creates the session table if needed and
/// spawns a background task deleting expired sessions.
///
/// # Returns
/// - `Ok(SqliteStore)` - Migrated session store
/// - `Err(AppError::DbErr)` - Failed to create the session table
pub async fn connect_to_session_store(
    db: &sea_orm::DatabaseConnection,
) -> Result<SqliteStore, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(format!("Failed to migrate session store: {}", e)))?;

    let cleanup_store = store.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            if let Err(e) = cleanup_store.delete_expired().await {
                tracing::error!("Failed to delete expired sessions: {}", e);
            }
        }
    });

    Ok(store)
}

/// Builds the session layer issuing signed `bugtracker` cookies.
///
/// The signing key is derived from `secret` with SHA-512 so any secret length
/// yields the 64 bytes the cookie key requires.
///
/// # Arguments
/// - `store` - Session store to persist sessions in
/// - `secret` - Application secret from configuration
/// - `secure` - Whether cookies are restricted to HTTPS
pub fn session_layer(
    store: SqliteStore,
    secret: &str,
    secure: bool,
) -> SessionManagerLayer<SqliteStore, SignedCookie> {
    let key = Key::from(Sha512::digest(secret.as_bytes()).as_slice());

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(time::Duration::seconds(
            SESSION_EXPIRY_SECONDS,
        )))
        .with_secure(secure)
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
        .with_signed(key)
}
