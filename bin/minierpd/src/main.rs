//! `minierpd` — the MiniERP server binary.
//!
//! Usage:
//!   minierpd [--listen <addr>] [--data-dir <dir>] [--sqlite <path>] [--jwt-secret <secret>]
//!
//! Mounts the auth, inventory, and org modules under `/auth`,
//! `/inventory`, and `/org` on a shared SQLite store.

mod auth_middleware;
mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use minierp_core::{Module, ServiceConfig};
use tracing::info;

use auth_middleware::JwtState;

/// MiniERP server.
#[derive(Parser, Debug)]
#[command(name = "minierpd", about = "MiniERP server")]
struct Cli {
    /// Listen address.
    #[arg(long = "listen", default_value = "0.0.0.0:8080")]
    listen: String,

    /// Data directory (defaults to the current directory).
    #[arg(long = "data-dir")]
    data_dir: Option<PathBuf>,

    /// SQLite database path (overrides `<data-dir>/minierp.db`).
    #[arg(long = "sqlite")]
    sqlite: Option<PathBuf>,

    /// Secret used to verify JWT bearer tokens.
    #[arg(long = "jwt-secret", env = "MINIERP_JWT_SECRET")]
    jwt_secret: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = ServiceConfig {
        data_dir: cli.data_dir.clone(),
        sqlite_path: cli.sqlite.clone(),
        listen: cli.listen.clone(),
        ..Default::default()
    };
    if let Some(secret) = cli.jwt_secret {
        config.jwt_secret = secret;
    }

    if let Some(dir) = &config.data_dir {
        std::fs::create_dir_all(dir)?;
    }

    // Shared SQL store, one connection pool for all modules.
    let sqlite_path = config.resolve_sqlite_path();
    info!("Opening SQLite store at {}", sqlite_path.display());
    let sql: Arc<dyn minierp_sql::SQLStore> = Arc::new(
        minierp_sql::SqliteStore::open(&sqlite_path)
            .map_err(|e| anyhow::anyhow!("failed to open SQL store: {}", e))?,
    );

    // Initialize modules. Each one creates its own schema on startup.
    let auth_module = auth::AuthModule::new(
        auth::service::AuthService::new(Arc::clone(&sql))
            .map_err(|e| anyhow::anyhow!("failed to init auth module: {}", e))?,
    );
    info!("Auth module initialized");

    let inventory_module = inventory::InventoryModule::new(
        inventory::service::InventoryService::new(Arc::clone(&sql))
            .map_err(|e| anyhow::anyhow!("failed to init inventory module: {}", e))?,
    );
    info!("Inventory module initialized");

    let org_module = org::OrgModule::new(
        org::service::OrgService::new(Arc::clone(&sql))
            .map_err(|e| anyhow::anyhow!("failed to init org module: {}", e))?,
    );
    info!("Org module initialized");

    let module_routes = vec![
        (auth_module.name(), auth_module.routes()),
        (inventory_module.name(), inventory_module.routes()),
        (org_module.name(), org_module.routes()),
    ];

    let jwt_state = Arc::new(JwtState::new(&config.jwt_secret));

    let app = routes::build_router(jwt_state, module_routes);

    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    info!("MiniERP server listening on {}", config.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
