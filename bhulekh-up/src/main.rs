//! bhulekh-up (Upload Processor) - Land-record batch upload service
//!
//! Accepts upload batches describing a land record and its nondhs, runs the
//! validity-chain computation, and persists the result. Duplicate records
//! (same district/taluka/village and block or re-survey number) get the new
//! nondhs appended and validity recomputed over the whole set.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use bhulekh_up::{build_router, AppState};

/// Default listen port for the upload processor
const DEFAULT_PORT: u16 = 5740;

#[derive(Parser, Debug)]
#[command(name = "bhulekh-up", about = "Bhulekh upload processor")]
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
        "Starting Bhulekh Upload Processor (bhulekh-up) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let root_folder = bhulekh_common::config::resolve_root_folder(args.root_folder.as_deref());
    bhulekh_common::config::ensure_root_folder(&root_folder)?;

    let db_path = bhulekh_common::config::database_path(&root_folder);
    info!("Database path: {}", db_path.display());

    let pool = bhulekh_common::db::init_database(&db_path).await?;
    info!("Database connection established");

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", args.port)).await?;
    info!("bhulekh-up listening on http://127.0.0.1:{}", args.port);
    info!("Health check: http://127.0.0.1:{}/health", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
