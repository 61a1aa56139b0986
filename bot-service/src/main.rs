use bot_service::{scenes, schema, telegram, ErrorReporter, SessionStorage, Stage, WebAppLinks};
use shared::{BotConfig, ServiceError};
use std::sync::Arc;
use teloxide::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    shared::init_tracing("bot-service")?;
    shared::install_panic_hook();

    tracing::info!("Starting Bot Service...");

    let config = BotConfig::from_env()?;

    tracing::info!("Configuration:");
    tracing::info!("  Mini App URL: {}", config.mini_app_url);
    tracing::info!("  Metrics Port: {:?}", config.metrics_port);

    if let Some(port) = config.metrics_port {
        shared::init_metrics(port)?;
    }

    run_telegram_bot(config).await?;

    Ok(())
}

async fn run_telegram_bot(config: BotConfig) -> Result<(), ServiceError> {
    tracing::info!("Starting Telegram bot...");

    let links = Arc::new(WebAppLinks::new(config.mini_app_url.clone()));
    // Fail fast on a malformed MINI_APP_URL.
    telegram::make_mini_app_keyboard(&links.next_url())?;

    let bot = Bot::new(config.telegram_bot_token);

    let me = bot
        .get_me()
        .await
        .map_err(|e| ServiceError::Telegram(format!("Bot token rejected: {}", e)))?;
    tracing::info!("Bot username: @{}", me.username());

    // Polling only; a leftover webhook would swallow updates.
    bot.delete_webhook()
        .await
        .map_err(|e| ServiceError::Telegram(format!("Failed to delete webhook: {}", e)))?;

    let registry = scenes::registry();
    tracing::info!(
        scenes = registry.len(),
        "Scene registry loaded: [{}]",
        registry.names().collect::<Vec<_>>().join(", ")
    );

    let storage = SessionStorage::new();
    let stage = Arc::new(Stage::new(registry));
    let reporter = Arc::new(ErrorReporter::new());

    tracing::info!("Bot Service is running");
    tracing::info!("  - Telegram bot: Active (POLLING)");

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![storage, stage, links])
        .default_handler(|upd| async move {
            tracing::debug!("Unhandled update: {:?}", upd.kind);
        })
        .error_handler(reporter)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    tracing::info!("Bot Service stopped");
    Ok(())
}
