use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;
use teloxide::prelude::*;

use super::{session_id, CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::entity::State;
use crate::interactor::wallet_interactor::WalletInteractorImpl;
use crate::presenter::wallet_presenter::{WalletPresenter, WalletPresenterImpl};
use crate::view::wallet_view::TelegramWalletView;

fn wallet_presenter(
    bot: Bot,
    chat_id: ChatId,
    services: &ServiceContainer,
) -> WalletPresenterImpl<WalletInteractorImpl, TelegramWalletView> {
    let interactor = Arc::new(WalletInteractorImpl::new(services.sessions()));
    let view = Arc::new(TelegramWalletView::new(bot, chat_id, services.explorer()));
    WalletPresenterImpl::new(interactor, view)
}

pub struct ConnectCommand;

impl CommandHandler for ConnectCommand {
    async fn execute(
        bot: Bot,
        msg: Message,
        _dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        info!("Connect command received in chat {}", msg.chat.id);

        let presenter = wallet_presenter(bot, msg.chat.id, &services);
        presenter.connect_new_wallet(session_id(&msg)).await
    }
}

pub struct ImportCommand;

impl CommandHandler for ImportCommand {
    async fn execute(
        bot: Bot,
        msg: Message,
        dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let dialogue = dialogue.ok_or_else(|| anyhow::anyhow!("Dialogue context not provided"))?;
        info!("Import command received in chat {}", msg.chat.id);

        dialogue.update(State::AwaitingImportSecret).await?;

        let presenter = wallet_presenter(bot, msg.chat.id, &services);
        presenter.start_import().await
    }
}

pub async fn receive_import_secret(
    bot: Bot,
    msg: Message,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let secret = match msg.text() {
        Some(text) => text.to_string(),
        None => {
            bot.send_message(msg.chat.id, "Please send the secret key as text:")
                .await?;
            return Ok(());
        }
    };

    // Don't leave the secret sitting in the chat history.
    if let Err(e) = bot.delete_message(msg.chat.id, msg.id).await {
        warn!("Could not delete secret message in chat {}: {}", msg.chat.id, e);
    }

    let presenter = wallet_presenter(bot, msg.chat.id, &services);
    if presenter.handle_import(session_id(&msg), &secret).await? {
        dialogue.reset().await?;
    }

    Ok(())
}

pub struct DisconnectCommand;

impl CommandHandler for DisconnectCommand {
    async fn execute(
        bot: Bot,
        msg: Message,
        _dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        info!("Disconnect command received in chat {}", msg.chat.id);

        let presenter = wallet_presenter(bot, msg.chat.id, &services);
        presenter.disconnect(session_id(&msg)).await
    }
}

pub struct AddressCommand;

impl CommandHandler for AddressCommand {
    async fn execute(
        bot: Bot,
        msg: Message,
        _dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let presenter = wallet_presenter(bot, msg.chat.id, &services);

        // Show address with QR code
        presenter.show_wallet_address(session_id(&msg)).await
    }
}
