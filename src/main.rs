use clap::Parser;

use bucketctl::cli;
use bucketctl::error::Result;
use bucketctl::storage::StorageClient;

use bucketctl::cli::Args;
use bucketctl::config::load_storage_config;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run_app(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_app(args: Args) -> Result<()> {
    let config = load_storage_config()?;
    let client = StorageClient::new(config).await;

    // Diagnostic only; a dead endpoint still lets individual
    // operations run (and report their own failures).
    match client.check_connection().await {
        Ok(count) => log::debug!("connection check passed, {count} bucket(s) visible"),
        Err(e) => eprintln!("Warning: connection check failed: {e}"),
    }

    cli::run(args, client).await?;
    Ok(())
}
