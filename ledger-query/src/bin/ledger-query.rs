//! Ledger query CLI

use clap::{Args, Parser, Subcommand};
use ledger_query::{Config, LedgerQuery, LedgerVersion, TrustlinesOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ledger-query", about = "Read account balances and trust lines from a ledger node")]
struct Cli {
    /// TOML config file; environment variables are used when absent
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the node JSON-RPC endpoint
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Native and issued currency balances
    Balances(QueryArgs),
    /// Trust lines, following pagination
    Trustlines(QueryArgs),
}

#[derive(Args)]
struct QueryArgs {
    /// Account address
    account: String,
    /// Only this currency
    #[arg(long)]
    currency: Option<String>,
    /// Only lines with this counterparty
    #[arg(long)]
    counterparty: Option<String>,
    /// Maximum number of results
    #[arg(long)]
    limit: Option<u32>,
    /// Ledger version to read; latest closed ledger when absent
    #[arg(long)]
    ledger_version: Option<u32>,
}

impl QueryArgs {
    fn options(&self) -> TrustlinesOptions {
        TrustlinesOptions {
            currency: self.currency.clone(),
            counterparty: self.counterparty.clone(),
            limit: self.limit,
            ledger_version: self.ledger_version.map(LedgerVersion),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    if let Some(url) = cli.rpc_url {
        config.rpc_url = url;
    }

    tracing::info!("Starting {} against {}", config.service_name, config.rpc_url);
    let api = LedgerQuery::from_config(&config)?;

    let output = match cli.command {
        Command::Balances(args) => {
            let balances = api.get_balances(&args.account, args.options()).await?;
            serde_json::to_string_pretty(&balances)?
        }
        Command::Trustlines(args) => {
            let page = api.get_trustlines(&args.account, args.options()).await?;
            serde_json::to_string_pretty(&page)?
        }
    };
    println!("{}", output);

    Ok(())
}
