use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rotom_account::{AccountNormaliser, KrakenNormaliser, SymbolTable, SymbolTableConfig};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::info;

/*----- */
// Cli
/*----- */
/// Normalise a saved Kraken account response and print it as JSON
#[derive(Debug, Parser)]
#[command(name = "rotom-account", version)]
struct Cli {
    /// Which private endpoint the response came from
    #[arg(value_enum)]
    endpoint: Endpoint,

    /// Path to the raw response body
    file: PathBuf,

    /// Symbol table config to use instead of the built-in Kraken table
    #[arg(long)]
    symbols: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Endpoint {
    OpenOrders,
    TradeHistory,
}

/*----- */
// Main
/*----- */
fn main() -> Result<()> {
    // Init
    init_logging();
    let cli = Cli::parse();

    let symbols = match &cli.symbols {
        Some(path) => load_symbol_table(path)?,
        None => SymbolTable::kraken(),
    };
    info!(
        assets = symbols.asset_count(),
        pairs = symbols.pair_count(),
        "loaded symbol table"
    );

    let normaliser = KrakenNormaliser::new(Arc::new(symbols));
    let payload = std::fs::read(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;

    let output = match cli.endpoint {
        Endpoint::OpenOrders => {
            serde_json::to_string_pretty(&normaliser.open_orders_from_slice(&payload)?)?
        }
        Endpoint::TradeHistory => {
            serde_json::to_string_pretty(&normaliser.trade_history_from_slice(&payload)?)?
        }
    };

    println!("{output}");
    Ok(())
}

fn load_symbol_table(path: &Path) -> Result<SymbolTable> {
    let payload = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read symbol table {}", path.display()))?;
    let config = SymbolTableConfig::from_json(&payload)?;
    Ok(SymbolTable::try_from(config)?)
}

/*----- */
// Logging config
/*----- */
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        // Keep stdout for the normalised output
        .with_writer(std::io::stderr)
        // Disable colours on release builds
        .with_ansi(cfg!(debug_assertions))
        // Enable Json formatting
        .json()
        // Install this Tracing subscriber as global default
        .init()
}
