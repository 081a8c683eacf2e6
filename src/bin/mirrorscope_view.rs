use anyhow::Context;
use clap::Parser;
use std::io::IsTerminal;

use mirrorscope::{
    arguments::ViewArgs,
    config,
    logger::{self, LogTag},
    view::{session, FetchScope, ProxyClient, RenderOptions, ViewState},
};

/// Interactive terminal view over the proxy's `/api/transactions`
#[tokio::main]
async fn main() {
    let args = ViewArgs::parse();
    logger::init(args.log.logger_config());

    if let Err(e) = run(args).await {
        logger::error(LogTag::System, &format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(args: ViewArgs) -> anyhow::Result<()> {
    let config = config::load_config_from_path(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let config = args.apply(config);

    let client = ProxyClient::new(&config.view.proxy_url, args.timeout)
        .with_context(|| format!("invalid proxy URL '{}'", config.view.proxy_url))?;

    logger::debug(
        LogTag::View,
        &format!("Using proxy at {}", config.view.proxy_url),
    );

    let scope = match args.account_id() {
        Some(id) => FetchScope::Account(id.to_string()),
        None => FetchScope::All,
    };
    let options = RenderOptions {
        colors: !args.log.no_color && std::io::stdout().is_terminal(),
    };

    println!("{}\n", session::HELP_TEXT);
    session::run_session(client, ViewState::new(config.view.dark_mode), scope, options).await
}
