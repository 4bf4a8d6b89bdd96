use super::{CommandHandler, DashboardCommand, MyDialogue};
use crate::di::ServiceContainer;
use anyhow::Result;
use std::sync::Arc;
use teloxide::{prelude::*, utils::command::BotCommands};

pub struct HelpCommand;

impl CommandHandler for HelpCommand {
    async fn execute(
        bot: Bot,
        msg: Message,
        _dialogue: Option<MyDialogue>,
        _services: Arc<ServiceContainer>,
    ) -> Result<()> {
        bot.send_message(
            msg.chat.id,
            format!(
                "{}\n\n\
                Typical flow: /connect → /create_mint → /create_account → /mint.\n\
                Wallets live only in this chat's session; nothing is stored.",
                DashboardCommand::descriptions()
            ),
        )
        .await?;

        Ok(())
    }
}
