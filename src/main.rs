use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

use mirrorscope::{
    apis::{mirror_node::MirrorNodeClient, TransactionSource},
    arguments::ServerArgs,
    config,
    logger::{self, LogTag},
    webserver,
};

/// Main entry point for the transaction proxy
///
/// Loads config (file, then environment, then flags), then serves until Ctrl+C.
#[tokio::main]
async fn main() {
    let args = ServerArgs::parse();
    logger::init(args.log.logger_config());

    if let Err(e) = run(args).await {
        logger::error(LogTag::System, &format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(args: ServerArgs) -> anyhow::Result<()> {
    logger::info(
        LogTag::System,
        &format!("mirrorscope v{} starting up...", env!("CARGO_PKG_VERSION")),
    );

    let config = config::load_config_from_path(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let config = args.apply(config);

    let client = MirrorNodeClient::new(&config.mirror).context("creating mirror node client")?;
    let source: Arc<dyn TransactionSource> = Arc::new(client);

    tokio::spawn(async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                logger::info(LogTag::System, "Shutdown signal received");
                webserver::shutdown();
            }
            Err(e) => logger::error(
                LogTag::System,
                &format!("Failed to listen for shutdown signal: {}", e),
            ),
        }
    });

    webserver::start_server(config, source).await?;

    logger::info(LogTag::System, "mirrorscope stopped");
    Ok(())
}
