//! ancora CLI binary.
//!
//! Provides the `compute` one-shot command and the `serve` HTTP service
//! for anchored momentum computation.

mod cmd;
mod data;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "ancora")]
#[command(about = "Common-anchor momentum for small ticker sets", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute anchored momentum for a set of tickers
    Compute {
        /// Ticker symbols (comma-separated, at most five)
        #[arg(value_delimiter = ',')]
        tickers: Vec<String>,

        /// Time unit (month, week, or day)
        #[arg(short, long, default_value = "month")]
        unit: String,

        /// Number of units between the past and current anchors
        #[arg(short = 'n', long, default_value = "3")]
        periods: u32,

        /// Reference period (YYYY-MM for month, YYYY-MM-DD otherwise; defaults to today)
        #[arg(long)]
        as_of: Option<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Run the HTTP service
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,
    },
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ancora_cli=info,tower_http=warn".into()),
        )
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compute {
            tickers,
            unit,
            periods,
            as_of,
            format,
        } => {
            cmd::compute::run(tickers, &unit, periods, as_of, &format).await?;
        }
        Commands::Serve { host, port } => {
            cmd::serve::run(&host, port).await?;
        }
    }

    Ok(())
}
