use crate::entity::{CreatedAccount, MintResult};
use crate::solana::Explorer;
use anyhow::Result;
use async_trait::async_trait;
use teloxide::{prelude::*, types::ParseMode, Bot};

#[async_trait]
pub trait TokenView: Send + Sync {
    async fn display_no_wallet(&self) -> Result<()>;
    async fn display_mint_missing(&self) -> Result<()>;
    async fn display_mint_or_account_missing(&self) -> Result<()>;
    async fn display_processing(&self, text: &str) -> Result<Option<Message>>;
    async fn display_mint_created(
        &self,
        created: &CreatedAccount,
        message: Option<Message>,
    ) -> Result<()>;
    async fn display_token_account_created(
        &self,
        created: &CreatedAccount,
        message: Option<Message>,
    ) -> Result<()>;
    async fn prompt_for_mint_amount(&self) -> Result<()>;
    async fn display_invalid_mint_amount(&self) -> Result<()>;
    async fn display_tokens_minted(&self, result: &MintResult, message: Option<Message>)
        -> Result<()>;
    async fn display_failure(&self, text: &str, message: Option<Message>) -> Result<()>;
}

pub struct TelegramTokenView {
    bot: Bot,
    chat_id: ChatId,
    explorer: Explorer,
}

impl TelegramTokenView {
    pub fn new(bot: Bot, chat_id: ChatId, explorer: Explorer) -> Self {
        Self {
            bot,
            chat_id,
            explorer,
        }
    }

    async fn notify(&self, text: &str) -> Result<()> {
        self.bot.send_message(self.chat_id, text).await?;
        Ok(())
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

    fn format_created(&self, title: &str, created: &CreatedAccount) -> String {
        format!(
            "✅ {}\n\n\
            Address: {}\n\
            Transaction Signature: {}",
            title,
            self.explorer.address_link(&created.address),
            self.explorer.tx_link(&created.signature)
        )
    }
}

#[async_trait]
impl TokenView for TelegramTokenView {
    async fn display_no_wallet(&self) -> Result<()> {
        self.notify("Please connect your wallet.").await
    }

    async fn display_mint_missing(&self) -> Result<()> {
        self.notify("Please create a mint first.").await
    }

    async fn display_mint_or_account_missing(&self) -> Result<()> {
        self.notify("Mint and token account must be created first.")
            .await
    }

    async fn display_processing(&self, text: &str) -> Result<Option<Message>> {
        let message = self.bot.send_message(self.chat_id, text).await?;
        Ok(Some(message))
    }

    async fn display_mint_created(
        &self,
        created: &CreatedAccount,
        message: Option<Message>,
    ) -> Result<()> {
        let text = self.format_created("Mint created successfully!", created);
        self.replace_or_send(text, message).await
    }

    async fn display_token_account_created(
        &self,
        created: &CreatedAccount,
        message: Option<Message>,
    ) -> Result<()> {
        let text = self.format_created("Token account created successfully!", created);
        self.replace_or_send(text, message).await
    }

    async fn prompt_for_mint_amount(&self) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                "<b>Mint Tokens 🎉</b>\n\nEnter the number of tokens to mint:",
            )
            .parse_mode(ParseMode::Html)
            .await?;
        Ok(())
    }

    async fn display_invalid_mint_amount(&self) -> Result<()> {
        self.notify("❌ Invalid amount. Enter a whole number of tokens greater than zero:")
            .await
    }

    async fn display_tokens_minted(
        &self,
        result: &MintResult,
        message: Option<Message>,
    ) -> Result<()> {
        let text = format!(
            "✅ Tokens minted successfully!\n\n\
            Amount: {}\n\
            Transaction Signature: {}",
            result.amount,
            self.explorer.tx_link(&result.signature)
        );
        self.replace_or_send(text, message).await
    }

    async fn display_failure(&self, text: &str, message: Option<Message>) -> Result<()> {
        self.replace_or_send(format!("❌ {}", text), message).await
    }
}
