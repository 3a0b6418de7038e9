use cm_server::{AppState, build_router, logger};

use cm_auth::{LoginRateLimiter, RateLimitConfig, hash_password};

use std::error::Error;

use log::{info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; real deployments use environment variables
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = cm_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = cm_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting cm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/cm-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    ensure_super_admin(&pool).await;

    // Login throttle from config
    let login_limiter = LoginRateLimiter::new(RateLimitConfig {
        max_requests: config.rate_limit.max_requests,
        window_secs: config.rate_limit.window_secs,
    });

    // Build application state
    let app_state = AppState::new(pool, config.auth.clone(), login_limiter);

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on SIGINT
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => log::error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

/// Bootstrap a super admin account from CM_BOOTSTRAP_ADMIN_EMAIL /
/// CM_BOOTSTRAP_ADMIN_PASSWORD when none exists for that email.
async fn ensure_super_admin(pool: &sqlx::SqlitePool) {
    let (Ok(email), Ok(password)) = (
        std::env::var("CM_BOOTSTRAP_ADMIN_EMAIL"),
        std::env::var("CM_BOOTSTRAP_ADMIN_PASSWORD"),
    ) else {
        return;
    };

    let users = cm_db::UserRepository::new(pool.clone());
    match users.find_by_email(&email).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            let password_hash = match hash_password(&password) {
                Ok(hash) => hash,
                Err(e) => {
                    warn!("Failed to hash bootstrap admin password: {}", e);
                    return;
                }
            };

            let mut user = cm_core::User::new(
                email.clone(),
                password_hash,
                "Super".to_string(),
                "Admin".to_string(),
            );
            user.is_super_admin = true;

            let conn = pool.acquire().await;
            match conn {
                Ok(mut conn) => match cm_db::UserRepository::create(&mut conn, &user).await {
                    Ok(()) => info!("Created bootstrap super admin: {}", email),
                    Err(e) => warn!("Failed to create bootstrap super admin: {}", e),
                },
                Err(e) => warn!("Failed to acquire connection for bootstrap admin: {}", e),
            }
        }
        Err(e) => warn!("Failed to look up bootstrap super admin: {}", e),
    }
}
