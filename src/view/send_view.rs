use crate::entity::TransferResult;
use crate::solana::Explorer;
use crate::utils;
use anyhow::Result;
use async_trait::async_trait;
use teloxide::{prelude::*, types::ParseMode, Bot};

#[async_trait]
pub trait SendView: Send + Sync {
    async fn prompt_for_recipient_address(&self) -> Result<()>;
    async fn display_invalid_address(&self) -> Result<()>;
    async fn prompt_for_amount(&self) -> Result<()>;
    async fn display_invalid_amount(&self) -> Result<()>;
    async fn prompt_for_confirmation(&self, recipient: &str, amount: f64) -> Result<()>;
    async fn display_processing(&self) -> Result<Option<Message>>;
    async fn display_transaction_success(
        &self,
        result: &TransferResult,
        message: Option<Message>,
    ) -> Result<()>;
    async fn display_transaction_failed(&self, message: Option<Message>) -> Result<()>;
    async fn display_transaction_cancelled(&self) -> Result<()>;
    async fn display_no_wallet(&self) -> Result<()>;
}

pub struct TelegramSendView {
    bot: Bot,
    chat_id: ChatId,
    explorer: Explorer,
}

impl TelegramSendView {
    pub fn new(bot: Bot, chat_id: ChatId, explorer: Explorer) -> Self {
        Self {
            bot,
            chat_id,
            explorer,
        }
    }

    async fn replace_or_send(&self, text: String, message: Option<Message>) -> Result<()> {
        if let Some(msg) = message {
            self.bot
                .edit_message_text(self.chat_id, msg.id, text)
                .parse_mode(ParseMode::Html)
                .await?;
        } else {
            self.bot
                .send_message(self.chat_id, text)
                .parse_mode(ParseMode::Html)
                .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl SendView for TelegramSendView {
    async fn prompt_for_recipient_address(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "<b>Sol Transfer 💸</b>\n\nEnter the receiver address:")
            .parse_mode(ParseMode::Html)
            .await?;
        Ok(())
    }

    async fn display_invalid_address(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "❌ Invalid recipient address.")
            .await?;
        Ok(())
    }

    async fn prompt_for_amount(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "Enter the amount of SOL to send (example: 0.5):")
            .await?;
        Ok(())
    }

    async fn display_invalid_amount(&self) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                "❌ Invalid amount. Enter a positive number of SOL, for example 0.5:",
            )
            .await?;
        Ok(())
    }

    async fn prompt_for_confirmation(&self, recipient: &str, amount: f64) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                format!(
                    "Confirm sending {} SOL to address {} (yes/no):",
                    utils::format_sol(amount),
                    recipient
                ),
            )
            .await?;
        Ok(())
    }

    async fn display_processing(&self) -> Result<Option<Message>> {
        let message = self
            .bot
            .send_message(self.chat_id, "Sending transaction... Please wait.")
            .await?;

        Ok(Some(message))
    }

    async fn display_transaction_success(
        &self,
        result: &TransferResult,
        message: Option<Message>,
    ) -> Result<()> {
        let balance = result
            .updated_balance
            .map(|b| format!("{} SOL", utils::format_sol(b)))
            .unwrap_or_else(|| "--".to_string());

        let text = format!(
            "✅ Transaction sent successfully!\n\n\
            Amount: {} SOL\n\
            To: <code>{}</code>\n\
            Updated Balance: {}\n\
            Transaction Signature: {}",
            utils::format_sol(result.amount),
            result.recipient,
            balance,
            self.explorer.tx_link(&result.signature)
        );

        self.replace_or_send(text, message).await
    }

    async fn display_transaction_failed(&self, message: Option<Message>) -> Result<()> {
        self.replace_or_send("❌ Transaction failed!".to_string(), message)
            .await
    }

    async fn display_transaction_cancelled(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "Transaction cancelled.")
            .await?;

        Ok(())
    }

    async fn display_no_wallet(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "Please connect your wallet.")
            .await?;
        Ok(())
    }
}
