use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use fcm_push::cli::Args;
use fcm_push::google::{Dispatcher, ServiceAccountTokenSource};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Args::parse().into_config();
    let tokens = ServiceAccountTokenSource::new(config.timeout);
    let result = match Dispatcher::new(config.timeout) {
        Ok(dispatcher) => fcm_push::run(&config, &tokens, &dispatcher, &mut std::io::stdout()).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!("Error: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1)
    }
}
