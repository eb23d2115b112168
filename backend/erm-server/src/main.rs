use erm_auth::{Caller, JwtValidator};
use erm_config::Config;
use erm_server::error::ServerError;
use erm_server::{build_router, logger, seed};
use erm_service::AppState;

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting erm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open database (creates file, runs migrations)
    let database_path = config.database_path()?;
    info!("Opening database: {}", database_path.display());
    let pool = erm_db::open_file_pool(&database_path, config.database.max_connections).await?;
    info!("Database ready");

    let dev_caller = Caller::parse(&config.auth.get_dev_user_id(), &config.auth.dev_user_role)?;

    if config.database.seed_demo_data {
        seed::seed_demo_data(&pool, dev_caller.user_id).await?;
    }

    let mut app_state = AppState::new(pool, dev_caller, config.capacity.display_policy);

    // JWT validator only when auth is enabled
    if config.auth.enabled {
        let validator = if let Some(ref secret) = config.auth.jwt_secret {
            info!("JWT: HS256 authentication enabled");
            JwtValidator::with_hs256(secret.as_bytes())
        } else if let Some(ref key_path) = config.auth.jwt_public_key_path {
            let full_path = Config::config_dir()?.join(key_path);
            let public_key = std::fs::read_to_string(&full_path).map_err(|e| {
                ServerError::JwtKeyFile {
                    path: full_path.display().to_string(),
                    source: e,
                }
            })?;
            info!("JWT: RS256 authentication enabled");
            JwtValidator::with_rs256(&public_key)?
        } else {
            return Err(ServerError::Config(erm_config::ConfigError::auth(
                "auth.enabled requires jwt_secret or jwt_public_key_path",
            ))
            .into());
        };
        app_state = app_state.with_jwt_validator(Arc::new(validator));
    } else {
        warn!(
            "Authentication DISABLED - development mode, default caller {} ({})",
            dev_caller.user_id, dev_caller.role
        );
    }

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
