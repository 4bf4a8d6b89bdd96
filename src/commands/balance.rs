use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;

use super::{session_id, CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::interactor::balance_interactor::BalanceInteractorImpl;
use crate::presenter::balance_presenter::{BalancePresenter, BalancePresenterImpl};
use crate::view::balance_view::TelegramBalanceView;

pub struct BalanceCommand;

pub(crate) fn balance_presenter(
    bot: Bot,
    chat_id: ChatId,
    services: &ServiceContainer,
) -> BalancePresenterImpl<BalanceInteractorImpl, TelegramBalanceView> {
    let interactor = Arc::new(BalanceInteractorImpl::new(
        services.sessions(),
        services.ledger(),
    ));
    let view = Arc::new(TelegramBalanceView::new(bot, chat_id, services.explorer()));
    BalancePresenterImpl::new(interactor, view)
}

impl CommandHandler for BalanceCommand {
    async fn execute(
        bot: Bot,
        msg: Message,
        _dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let presenter = balance_presenter(bot, msg.chat.id, &services);
        presenter.show_account_info(session_id(&msg)).await
    }
}
