use clap::Parser;
use receipt_points_server::{init_logging, run_server, CliArgs, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_args(CliArgs::parse());
    init_logging(config.log_format)?;

    run_server(config).await
}
