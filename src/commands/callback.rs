use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;
use teloxide::prelude::*;

use super::balance::balance_presenter;
use super::{handle_command, session_id, DashboardCommand, MyDialogue};
use crate::di::ServiceContainer;
use crate::presenter::balance_presenter::BalancePresenter;

/// Dashboard buttons map onto the same handlers as slash commands.
fn command_for(callback_data: &str) -> Option<DashboardCommand> {
    match callback_data {
        "menu" => Some(DashboardCommand::Menu),
        "connect" => Some(DashboardCommand::Connect),
        "import" => Some(DashboardCommand::Import),
        "disconnect" => Some(DashboardCommand::Disconnect),
        "address" => Some(DashboardCommand::Address),
        "send" => Some(DashboardCommand::Send),
        "create_mint" => Some(DashboardCommand::CreateMint),
        "create_account" => Some(DashboardCommand::CreateAccount),
        "mint" => Some(DashboardCommand::Mint),
        "help" => Some(DashboardCommand::Help),
        _ => None,
    }
}

// Main callback handler function
pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    // Acknowledge the callback query to stop loading animation
    if let Err(err) = bot.answer_callback_query(q.id.clone()).await {
        warn!("Failed to answer callback query: {}", err);
    }

    let callback_data = match q.data.as_deref() {
        Some(data) => data,
        None => return Ok(()),
    };

    // Buttons on inaccessible (too old) messages carry no chat to answer in
    let message = match q.regular_message() {
        Some(message) => message.clone(),
        None => return Ok(()),
    };

    info!(
        "Received callback: {} in chat {}",
        callback_data, message.chat.id
    );

    if callback_data == "refresh" {
        return handle_refresh(&bot, message, services).await;
    }

    match command_for(callback_data) {
        Some(cmd) => handle_command(bot, message, cmd, dialogue, services).await,
        None => {
            bot.send_message(message.chat.id, "Unknown action. Use /menu to open the dashboard.")
                .await?;
            Ok(())
        }
    }
}

// Function to handle refresh action
async fn handle_refresh(bot: &Bot, message: Message, services: Arc<ServiceContainer>) -> Result<()> {
    let presenter = balance_presenter(bot.clone(), message.chat.id, &services);

    // Updates the dashboard message in place
    presenter
        .refresh_account_info(session_id(&message), message)
        .await
}
