use std::sync::Arc;

use clap::Parser;
use medchain::clock::{Clock, SystemClock};
use medchain::config::{Cli, Command};
use medchain::http::LedgerApi;
use medchain::{BlockView, Ledger, create_genesis, diagnostics};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Genesis => {
            let genesis = create_genesis(SystemClock.now())?;
            let json = serde_json::to_string_pretty(&BlockView::from(&genesis))?;

            println!("Genesis block created.");
            println!("Genesis hash: {}", genesis.hash());
            println!("{json}");
        }
        Command::Run { listen, no_dump } => {
            let ledger = Ledger::new(Arc::new(SystemClock))?;
            tracing::info!("chain initialized with genesis block");

            if !no_dump {
                tokio::spawn(diagnostics::dump_chain(ledger.clone()));
            }

            let listener = TcpListener::bind(listen).await?;
            tracing::info!("listening on {}", listener.local_addr()?);

            LedgerApi::new(ledger).run(listener).await?;
        }
    }

    Ok(())
}
