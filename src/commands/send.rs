use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::{session_id, CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::entity::State;
use crate::interactor::send_interactor::SendInteractorImpl;
use crate::presenter::send_presenter::{SendPresenter, SendPresenterImpl};
use crate::view::send_view::TelegramSendView;

fn send_presenter(
    bot: Bot,
    chat_id: ChatId,
    services: &ServiceContainer,
) -> SendPresenterImpl<SendInteractorImpl, TelegramSendView> {
    let interactor = Arc::new(SendInteractorImpl::new(
        services.sessions(),
        services.ledger(),
    ));
    let view = Arc::new(TelegramSendView::new(bot, chat_id, services.explorer()));
    SendPresenterImpl::new(interactor, view)
}

pub struct SendCommand;

impl CommandHandler for SendCommand {
    async fn execute(
        bot: Bot,
        msg: Message,
        dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let dialogue = dialogue.ok_or_else(|| anyhow::anyhow!("Dialogue context not provided"))?;
        info!("Send command initiated in chat {}", msg.chat.id);

        let presenter = send_presenter(bot, msg.chat.id, &services);
        if presenter.start_send_flow(session_id(&msg)).await? {
            dialogue.update(State::AwaitingRecipientAddress).await?;
        }

        Ok(())
    }
}

pub async fn receive_recipient_address(
    bot: Bot,
    msg: Message,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    // Non-text input counts as an empty recipient
    let address_text = msg.text().unwrap_or_default();

    let presenter = send_presenter(bot, msg.chat.id, &services);
    if let Some(recipient) = presenter.handle_recipient_address(address_text).await? {
        dialogue.update(State::AwaitingAmount { recipient }).await?;
    }

    Ok(())
}

pub async fn receive_amount(
    bot: Bot,
    msg: Message,
    state: State,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    if let State::AwaitingAmount { recipient } = state {
        let amount_text = msg.text().unwrap_or_default();

        let presenter = send_presenter(bot, msg.chat.id, &services);
        if let Some(amount) = presenter.handle_amount(amount_text, &recipient).await? {
            dialogue
                .update(State::AwaitingConfirmation { recipient, amount })
                .await?;
        }
    }

    Ok(())
}

pub async fn receive_confirmation(
    bot: Bot,
    msg: Message,
    state: State,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    if let State::AwaitingConfirmation { recipient, amount } = state {
        let presenter = send_presenter(bot, msg.chat.id, &services);
        confirm_transfer(
            &presenter,
            &dialogue,
            msg.text().unwrap_or_default(),
            session_id(&msg),
            &recipient,
            amount,
        )
        .await?;
    }

    Ok(())
}

/// Clears the form, then sends (or cancels) the transfer.
async fn confirm_transfer<P: SendPresenter>(
    presenter: &P,
    dialogue: &MyDialogue,
    confirmation_text: &str,
    session_id: i64,
    recipient: &str,
    amount: f64,
) -> Result<()> {
    dialogue.reset().await?;

    presenter
        .handle_confirmation(confirmation_text, session_id, recipient, amount)
        .await
}
