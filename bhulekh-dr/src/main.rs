//! bhulekh-dr (Record Review) - Read-only land-record inspection tool
//!
//! Lists stored land records and re-derives the validity chain for any of
//! them on demand. Never writes; the upload processor owns the database.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use bhulekh_dr::{build_router, AppState};

/// Default listen port for the record review service
const DEFAULT_PORT: u16 = 5745;

#[derive(Parser, Debug)]
#[command(name = "bhulekh-dr", about = "Bhulekh record review (read-only)")]
struct Args {
    /// Root folder override (default: BHULEKH_ROOT, config file, OS default)
    #[arg(long)]
    root_folder: Option<String>,

    /// Listen port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Bhulekh Record Review (bhulekh-dr) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let root_folder = bhulekh_common::config::resolve_root_folder(args.root_folder.as_deref());
    let db_path = bhulekh_common::config::database_path(&root_folder);
    info!("Database path: {}", db_path.display());

    // Connect with read-only mode
    let pool = match bhulekh_dr::db::connect_readonly(&db_path).await {
        Ok(pool) => {
            info!("Connected to database (read-only)");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e);
        }
    };

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", args.port)).await?;
    info!("bhulekh-dr listening on http://127.0.0.1:{}", args.port);
    info!("Health check: http://127.0.0.1:{}/health", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
