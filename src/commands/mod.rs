use anyhow::Result;
use std::sync::Arc;
use teloxide::{dispatching::dialogue::InMemStorage, prelude::*};

use crate::di::ServiceContainer;
use crate::entity::State;
use teloxide::dispatching::dialogue::Dialogue;

pub mod balance;
pub mod callback;
pub mod help;
pub mod send;
pub mod start;
pub mod token;
pub mod ui;
pub mod wallet;

pub type MyDialogue = Dialogue<State, InMemStorage<State>>;

/// Trait that defines a command handler
pub trait CommandHandler {
    /// Execute the command. `msg` is the chat message that triggered it, or
    /// the dashboard message when it came from a button.
    async fn execute(
        bot: Bot,
        msg: Message,
        dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()>;
}

/// Bot Commands enum for teloxide command filter
#[derive(teloxide::utils::command::BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum DashboardCommand {
    #[command(description = "open the dashboard")]
    Start,
    #[command(description = "show the dashboard")]
    Menu,
    #[command(description = "show wallet status and SOL balance")]
    Balance,
    #[command(description = "connect a newly generated wallet")]
    Connect,
    #[command(description = "connect an existing wallet by secret key or phrase")]
    Import,
    #[command(description = "forget the wallet, mint and token account")]
    Disconnect,
    #[command(description = "show your wallet address and QR code")]
    Address,
    #[command(description = "transfer SOL to another address")]
    Send,
    #[command(rename = "create_mint", description = "create a new token mint")]
    CreateMint,
    #[command(
        rename = "create_account",
        description = "create a token account for the current mint"
    )]
    CreateAccount,
    #[command(description = "mint tokens into the token account")]
    Mint,
    #[command(description = "display this help message")]
    Help,
}

pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: DashboardCommand,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    log::info!("Command {:?} in chat {}", cmd, msg.chat.id);

    // Any command abandons a half-filled form
    dialogue.reset().await?;
    let dialogue = Some(dialogue);

    match cmd {
        DashboardCommand::Start => start::StartCommand::execute(bot, msg, dialogue, services).await,
        DashboardCommand::Menu | DashboardCommand::Balance => {
            balance::BalanceCommand::execute(bot, msg, dialogue, services).await
        }
        DashboardCommand::Connect => {
            wallet::ConnectCommand::execute(bot, msg, dialogue, services).await
        }
        DashboardCommand::Import => {
            wallet::ImportCommand::execute(bot, msg, dialogue, services).await
        }
        DashboardCommand::Disconnect => {
            wallet::DisconnectCommand::execute(bot, msg, dialogue, services).await
        }
        DashboardCommand::Address => {
            wallet::AddressCommand::execute(bot, msg, dialogue, services).await
        }
        DashboardCommand::Send => send::SendCommand::execute(bot, msg, dialogue, services).await,
        DashboardCommand::CreateMint => {
            token::CreateMintCommand::execute(bot, msg, dialogue, services).await
        }
        DashboardCommand::CreateAccount => {
            token::CreateAccountCommand::execute(bot, msg, dialogue, services).await
        }
        DashboardCommand::Mint => token::MintCommand::execute(bot, msg, dialogue, services).await,
        DashboardCommand::Help => help::HelpCommand::execute(bot, msg, dialogue, services).await,
    }
}

/// Session key for a chat: every chat is its own dashboard.
pub fn session_id(msg: &Message) -> i64 {
    msg.chat.id.0
}
