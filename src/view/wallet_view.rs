use crate::commands::ui;
use crate::qrcodeutils;
use crate::solana::Explorer;
use crate::utils;
use anyhow::Result;
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{InputFile, ParseMode},
    Bot,
};

#[async_trait]
pub trait WalletView: Send + Sync {
    async fn display_wallet_created(&self, address: String, mnemonic: String) -> Result<()>;
    async fn prompt_for_secret(&self) -> Result<()>;
    async fn display_wallet_imported(&self, address: String) -> Result<()>;
    async fn display_import_failed(&self) -> Result<()>;
    async fn display_wallet_address(&self, address: String) -> Result<()>;
    async fn display_disconnected(&self, address: Option<String>) -> Result<()>;
    async fn display_no_wallet(&self) -> Result<()>;
    async fn display_error(&self, error_message: String) -> Result<()>;
}

pub struct TelegramWalletView {
    bot: Bot,
    chat_id: ChatId,
    explorer: Explorer,
}

impl TelegramWalletView {
    pub fn new(bot: Bot, chat_id: ChatId, explorer: Explorer) -> Self {
        Self {
            bot,
            chat_id,
            explorer,
        }
    }
}

#[async_trait]
impl WalletView for TelegramWalletView {
    async fn display_wallet_created(&self, address: String, mnemonic: String) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                format!(
                    "Wallet connected!\n\n\
                    Public address: <code>{}</code>\n\n\
                    Mnemonic phrase: <tg-spoiler>{}</tg-spoiler>\n\n\
                    <b>Important:</b> the dashboard forgets this wallet when you disconnect \
                    or the bot restarts. Save the phrase to use it again with /import.",
                    address, mnemonic
                ),
            )
            .parse_mode(ParseMode::Html)
            .reply_markup(ui::create_dashboard_keyboard(Some(&address)))
            .await?;

        Ok(())
    }

    async fn prompt_for_secret(&self) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                "Send the base58 secret key or the mnemonic phrase of the wallet to connect:",
            )
            .await?;

        Ok(())
    }

    async fn display_wallet_imported(&self, address: String) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                format!(
                    "Wallet connected: {}",
                    self.explorer.address_link(&address)
                ),
            )
            .parse_mode(ParseMode::Html)
            .reply_markup(ui::create_dashboard_keyboard(Some(&address)))
            .await?;

        Ok(())
    }

    async fn display_import_failed(&self) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                "❌ Could not read that key. Send a base58 secret key or a 12/24-word phrase:",
            )
            .await?;

        Ok(())
    }

    async fn display_wallet_address(&self, address: String) -> Result<()> {
        let qr_svg_data = utils::generate_qr_code(&address)?;

        self.bot
            .send_message(
                self.chat_id,
                format!(
                    "Your wallet address:\n\n<code>{}</code>\n\n{}",
                    address,
                    self.explorer.address_link(&address)
                ),
            )
            .parse_mode(ParseMode::Html)
            .await?;

        // Send QR code as photo
        let png_data: Vec<u8> = qrcodeutils::convert_svg_to_png(&qr_svg_data)?;

        self.bot
            .send_photo(
                self.chat_id,
                InputFile::memory(png_data).file_name("address.png"),
            )
            .caption(utils::shorten_address(&address, 4))
            .await?;

        Ok(())
    }

    async fn display_disconnected(&self, address: Option<String>) -> Result<()> {
        let text = match address {
            Some(address) => format!(
                "Wallet {} disconnected. Session cleared.",
                utils::shorten_address(&address, 4)
            ),
            None => "No wallet was connected.".to_string(),
        };

        self.bot
            .send_message(self.chat_id, text)
            .reply_markup(ui::create_dashboard_keyboard(None))
            .await?;

        Ok(())
    }

    async fn display_no_wallet(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "Please connect your wallet.")
            .reply_markup(ui::create_dashboard_keyboard(None))
            .await?;

        Ok(())
    }

    async fn display_error(&self, error_message: String) -> Result<()> {
        self.bot
            .send_message(self.chat_id, format!("Error: {}", error_message))
            .await?;

        Ok(())
    }
}
