use std::net::SocketAddr;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "medchain", about = "Hash-linked ledger of medical record checkouts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the ledger HTTP service
    Run {
        /// Address to listen on
        #[arg(short, long, env = "MEDCHAIN_LISTEN", default_value = "127.0.0.1:3000")]
        listen: SocketAddr,

        /// Don't log the chain contents on start-up
        #[arg(long, env = "MEDCHAIN_NO_DUMP")]
        no_dump: bool,
    },
    /// Print a freshly created genesis block
    Genesis,
}
