use crate::commands::ui;
use crate::entity::AccountInfo;
use crate::solana::Explorer;
use crate::utils;
use anyhow::Result;
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{Message, ParseMode},
    Bot,
};

#[async_trait]
pub trait BalanceView: Send + Sync {
    async fn display_loading(&self) -> Result<Option<Message>>;
    async fn display_account_info(&self, info: AccountInfo, message: Option<Message>)
        -> Result<()>;
    async fn display_error(&self, error_message: String, message: Option<Message>) -> Result<()>;
}

pub struct TelegramBalanceView {
    bot: Bot,
    chat_id: ChatId,
    explorer: Explorer,
}

impl TelegramBalanceView {
    pub fn new(bot: Bot, chat_id: ChatId, explorer: Explorer) -> Self {
        Self {
            bot,
            chat_id,
            explorer,
        }
    }

    fn format_account_info(&self, info: &AccountInfo) -> String {
        let connected = if info.connected { "Yes" } else { "No" };

        let address = match &info.address {
            Some(address) => self.explorer.address_link(address),
            None => "--".to_string(),
        };

        let balance = match info.balance_sol {
            Some(balance) => format!("<b>{}</b> SOL", utils::format_sol(balance)),
            None => "--".to_string(),
        };

        format!(
            "<b>Account Info ✨</b>\n\n\
            Wallet Connected: <i>{}</i>\n\
            Wallet Address: {}\n\
            Balance: {}\n\n\
            —\n\
            Updated: {} UTC",
            connected,
            address,
            balance,
            chrono::Utc::now().format("%H:%M:%S")
        )
    }
}

#[async_trait]
impl BalanceView for TelegramBalanceView {
    async fn display_loading(&self) -> Result<Option<Message>> {
        let message = self
            .bot
            .send_message(self.chat_id, "Fetching account information...")
            .await?;

        Ok(Some(message))
    }

    async fn display_account_info(
        &self,
        info: AccountInfo,
        message: Option<Message>,
    ) -> Result<()> {
        let text = self.format_account_info(&info);
        let keyboard = ui::create_dashboard_keyboard(info.address.as_deref());

        // Update existing message or send a new one
        if let Some(msg) = message {
            self.bot
                .edit_message_text(self.chat_id, msg.id, text)
                .parse_mode(ParseMode::Html)
                .reply_markup(keyboard)
                .await?;
        } else {
            self.bot
                .send_message(self.chat_id, text)
                .parse_mode(ParseMode::Html)
                .reply_markup(keyboard)
                .await?;
        }

        Ok(())
    }

    async fn display_error(&self, error_message: String, message: Option<Message>) -> Result<()> {
        let text = format!("❌ {}", error_message);

        if let Some(msg) = message {
            self.bot
                .edit_message_text(self.chat_id, msg.id, text)
                .await?;
        } else {
            self.bot.send_message(self.chat_id, text).await?;
        }

        Ok(())
    }
}
