use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use item_store::config::{DEFAULT_DATA_FILE, DEFAULT_PORT};
use item_store::{ItemServer, ServerConfig};
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "item-store", about = "CRUD HTTP service over a JSON file", version)]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value_t = SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)))]
    bind: SocketAddr,

    /// JSON file holding the items.
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Write the data file on a single line.
    #[arg(long)]
    compact: bool,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let config = ServerConfig {
        bind_addr: cli.bind,
        data_file: cli.data_file,
        pretty: !cli.compact,
    };
    ItemServer::new(config).serve().await?;
    Ok(())
}
