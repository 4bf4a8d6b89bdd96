use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::{prelude::*, types::ParseMode};

use super::balance::balance_presenter;
use super::{session_id, CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::presenter::balance_presenter::BalancePresenter;

pub struct StartCommand;

impl CommandHandler for StartCommand {
    async fn execute(
        bot: Bot,
        msg: Message,
        _dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let chat_id = msg.chat.id;
        info!("Start command received in chat {}", chat_id);

        bot.send_message(
            chat_id,
            format!(
                "<b>Solana Dashboard</b> · <i>{}</i>\n\n\
                Connect a wallet, check its balance, send SOL and create your own token.",
                services.settings().explorer_cluster
            ),
        )
        .parse_mode(ParseMode::Html)
        .await?;

        let presenter = balance_presenter(bot, chat_id, &services);
        presenter.show_account_info(session_id(&msg)).await
    }
}
