use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::{session_id, CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::entity::State;
use crate::interactor::token_interactor::TokenInteractorImpl;
use crate::presenter::token_presenter::{TokenPresenter, TokenPresenterImpl};
use crate::view::token_view::TelegramTokenView;

fn token_presenter(
    bot: Bot,
    chat_id: ChatId,
    services: &ServiceContainer,
) -> TokenPresenterImpl<TokenInteractorImpl, TelegramTokenView> {
    let interactor = Arc::new(TokenInteractorImpl::new(
        services.sessions(),
        services.ledger(),
    ));
    let view = Arc::new(TelegramTokenView::new(bot, chat_id, services.explorer()));
    TokenPresenterImpl::new(interactor, view)
}

pub struct CreateMintCommand;

impl CommandHandler for CreateMintCommand {
    async fn execute(
        bot: Bot,
        msg: Message,
        _dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        info!("Create mint command received in chat {}", msg.chat.id);

        let presenter = token_presenter(bot, msg.chat.id, &services);
        presenter.create_mint(session_id(&msg)).await
    }
}

pub struct CreateAccountCommand;

impl CommandHandler for CreateAccountCommand {
    async fn execute(
        bot: Bot,
        msg: Message,
        _dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        info!("Create token account command received in chat {}", msg.chat.id);

        let presenter = token_presenter(bot, msg.chat.id, &services);
        presenter.create_token_account(session_id(&msg)).await
    }
}

pub struct MintCommand;

impl CommandHandler for MintCommand {
    async fn execute(
        bot: Bot,
        msg: Message,
        dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let dialogue = dialogue.ok_or_else(|| anyhow::anyhow!("Dialogue context not provided"))?;
        info!("Mint tokens command received in chat {}", msg.chat.id);

        let presenter = token_presenter(bot, msg.chat.id, &services);
        if presenter.start_mint_flow(session_id(&msg)).await? {
            dialogue.update(State::AwaitingMintAmount).await?;
        }

        Ok(())
    }
}

pub async fn receive_mint_amount(
    bot: Bot,
    msg: Message,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let amount_text = msg.text().unwrap_or_default();

    let presenter = token_presenter(bot, msg.chat.id, &services);
    if presenter
        .handle_mint_amount(session_id(&msg), amount_text)
        .await?
    {
        dialogue.reset().await?;
    }

    Ok(())
}
