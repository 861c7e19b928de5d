use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use baseline::api::{build_router, state::AppState};
use baseline::config::AppConfig;
use baseline::models::{FilterSpec, RankRange};
use baseline::query;
use baseline::store::{Snapshot, TableStore};

#[derive(Parser)]
#[command(name = "baseline")]
#[command(about = "Tennis rankings dashboard backend")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port number
        #[arg(long, default_value = "8080")]
        port: u16,
    },

    /// Print row counts and join health for every table
    Tables,

    /// Dump the filtered competitor table as CSV
    Export {
        /// Keep only this country
        #[arg(long)]
        country: Option<String>,

        /// Lowest rank to keep (inclusive)
        #[arg(long)]
        rank_min: Option<u32>,

        /// Highest rank to keep (inclusive)
        #[arg(long)]
        rank_max: Option<u32>,

        /// Case-insensitive name substring
        #[arg(long)]
        name: Option<String>,

        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting baseline v{}", env!("CARGO_PKG_VERSION"));

    // Config file is optional; CLI flags win over it.
    let mut config = if std::path::Path::new(&cli.config).exists() {
        AppConfig::from_file(&cli.config)
            .with_context(|| format!("Failed to load config from {}", cli.config))?
    } else {
        AppConfig::default()
    };
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = PathBuf::from(data_dir);
    }

    let store = TableStore::new(config.data_dir.clone());

    match cli.command {
        Commands::Serve { host, port } => {
            let state = AppState::new(store);
            let app = build_router(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;
            tracing::info!("Dashboard API: http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Tables => {
            let snapshot = Snapshot::load(&store).context("Failed to load tables")?;

            println!("=== Table Counts ===");
            for (table, rows) in snapshot.table_counts() {
                println!("  {:<32} {}", table, rows);
            }

            let outcome = query::join_competitions_with_categories(
                &snapshot.competitions,
                &snapshot.categories,
            );
            println!("\n=== Category Join ===");
            println!("  joined rows:   {}", outcome.rows.len());
            println!("  dropped rows:  {}", outcome.diagnostics.dropped);
            if !outcome.diagnostics.missing_category_ids.is_empty() {
                println!(
                    "  missing ids:   {}",
                    outcome.diagnostics.missing_category_ids.join(", ")
                );
            }
        }
        Commands::Export {
            country,
            rank_min,
            rank_max,
            name,
            output,
        } => {
            let snapshot = Snapshot::load(&store).context("Failed to load tables")?;

            let default = RankRange::default();
            let spec = FilterSpec {
                country,
                rank_range: RankRange::new(
                    rank_min.unwrap_or(default.min),
                    rank_max.unwrap_or(default.max),
                ),
                name_query: name,
            };

            let rows = query::apply(&snapshot.competitor_rankings, &spec)?;
            tracing::info!("Exporting {} competitors", rows.len());

            let csv = baseline::export::rankings_to_csv(&rows)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, csv)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote {} rows to {}", rows.len(), path.display());
                }
                None => print!("{}", csv),
            }
        }
    }

    Ok(())
}
