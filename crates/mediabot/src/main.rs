use anyhow::Result;
use dotenvy::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use teloxide::prelude::*;

use mediabot::cli::{Cli, Commands};
use mediabot::telegram::{create_bot, replies, schema, setup_bot_commands, HandlerDeps};
use mediacore::core::utils::{ensure_download_dir, format_size_mb};
use mediacore::core::{init_logger, level_from_config, log_startup_configuration};
use mediacore::{classify, config, Conversations, Fetchers};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Load .env before any config value is read
    let _ = dotenv();

    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH, level_from_config(&config::LOG_LEVEL))?;

    match cli.command {
        Some(Commands::Run) => run_bot().await,
        Some(Commands::Fetch { url, output }) => run_cli_fetch(url, output).await,
        None => {
            log::info!("No command specified, running bot in default mode");
            run_bot().await
        }
    }
}

/// Long-polls Telegram until Ctrl-C.
async fn run_bot() -> Result<()> {
    log_startup_configuration();

    let download_dir = config::DOWNLOAD_FOLDER.clone();
    ensure_download_dir(&download_dir).await?;

    let bot = create_bot()?;
    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to register bot commands: {}", e);
    }

    let deps = HandlerDeps::new(Fetchers::from_config(&download_dir)?, Arc::new(Conversations::new()));
    let handler = schema(deps);

    log::info!("================================================");
    log::info!("📡 Bot is starting in long polling mode");
    log::info!("================================================");

    Dispatcher::builder(bot, handler)
        .default_handler(|upd| async move {
            log::debug!("Unhandled update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}

/// One fetch from the terminal, without Telegram.
async fn run_cli_fetch(url: String, output: Option<String>) -> Result<()> {
    let download_dir = output.map(PathBuf::from).unwrap_or_else(|| config::DOWNLOAD_FOLDER.clone());
    ensure_download_dir(&download_dir).await?;

    let request = classify(&url)
        .request(&url)
        .ok_or_else(|| anyhow::anyhow!(replies::UNRECOGNIZED))?;

    println!("{}", replies::progress(request.kind));

    let fetchers = Fetchers::from_config(&download_dir)?;
    let result = fetchers
        .fetch(&request)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", replies::fetch_failed(request.kind), e))?;

    println!("✅ Saved to: {}", result.file_path.display());
    println!("📏 Size: {}", format_size_mb(result.size_bytes));
    Ok(())
}
