//! Solana Dashboard Bot for Telegram - Main executable
//!
//! Each chat is a dashboard: connect a wallet, check its SOL balance, send
//! SOL, create a token mint and token account, and mint tokens into it.
use anyhow::Context;
use dotenv::dotenv;
use log::{info, warn};
use solana_dashboard_bot::{
    create_solana_client, DashboardCommand, Router, RpcLedger, ServiceContainer, Settings, State,
    TelegramRouter,
};
use std::sync::Arc;
use teloxide::{
    dispatching::dialogue::InMemStorage, dptree, prelude::*, utils::command::BotCommands,
};

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!(
        "Starting Solana Dashboard Telegram Bot v{}",
        solana_dashboard_bot::VERSION
    );

    let settings = Settings::from_env()?;

    let bot = Bot::new(settings.telegram_bot_token.clone());

    info!(
        "Connecting to Solana {} at {}...",
        settings.explorer_cluster, settings.solana_rpc_url
    );
    let solana_client =
        create_solana_client(&settings.solana_rpc_url).context("Failed to create Solana client")?;
    let ledger = Arc::new(RpcLedger::new(solana_client));

    let services = Arc::new(ServiceContainer::new(settings, ledger));

    if let Err(e) = bot.set_my_commands(DashboardCommand::bot_commands()).await {
        warn!("Failed to register bot commands: {}", e);
    }

    let router = TelegramRouter::new(services);
    let handler = router.setup_handlers();

    // Build dispatcher with dependency injections and control-C handling
    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![InMemStorage::<State>::new()])
        .enable_ctrlc_handler()
        .build();

    info!("Bot is running! Press Ctrl+C to stop.");
    dispatcher.dispatch().await;

    Ok(())
}
