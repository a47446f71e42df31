mod cmd;
mod config;
mod error;

use clap::Parser;
use config::{Cli, Effective};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let eff = match Effective::new(&cli.gateway) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    tracing::debug!(base_url = %eff.gateway.base_url(), config = %cli.gateway.config, "resolved gateway");

    if let Err(e) = cmd::dispatch(cli.command, &eff).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
