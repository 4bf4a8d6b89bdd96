use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;
use teloxide::types::Message;

use crate::entity::{AccountInfo, CreatedAccount, MintResult, TransferResult};
use crate::view::balance_view::BalanceView;
use crate::view::send_view::SendView;
use crate::view::token_view::TokenView;
use crate::view::wallet_view::WalletView;

/// Stand-in for every Telegram view: remembers which screen was shown.
#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<String>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: impl Into<String>) -> Result<()> {
        self.events.lock().unwrap().push(event.into());
        Ok(())
    }
}

#[async_trait]
impl BalanceView for RecordingView {
    async fn display_loading(&self) -> Result<Option<Message>> {
        self.record("loading")?;
        Ok(None)
    }

    async fn display_account_info(
        &self,
        info: AccountInfo,
        _message: Option<Message>,
    ) -> Result<()> {
        let connected = if info.connected { "Yes" } else { "No" };
        let address = info.address.unwrap_or_else(|| "--".to_string());
        self.record(format!("account_info:{}:{}", connected, address))
    }

    async fn display_error(&self, _error_message: String, _message: Option<Message>) -> Result<()> {
        self.record("error")
    }
}

#[async_trait]
impl SendView for RecordingView {
    async fn prompt_for_recipient_address(&self) -> Result<()> {
        self.record("recipient_prompt")
    }

    async fn display_invalid_address(&self) -> Result<()> {
        self.record("invalid_address")
    }

    async fn prompt_for_amount(&self) -> Result<()> {
        self.record("amount_prompt")
    }

    async fn display_invalid_amount(&self) -> Result<()> {
        self.record("invalid_amount")
    }

    async fn prompt_for_confirmation(&self, _recipient: &str, _amount: f64) -> Result<()> {
        self.record("confirm")
    }

    async fn display_processing(&self) -> Result<Option<Message>> {
        self.record("processing")?;
        Ok(None)
    }

    async fn display_transaction_success(
        &self,
        _result: &TransferResult,
        _message: Option<Message>,
    ) -> Result<()> {
        self.record("transfer_success")
    }

    async fn display_transaction_failed(&self, _message: Option<Message>) -> Result<()> {
        self.record("transfer_failed")
    }

    async fn display_transaction_cancelled(&self) -> Result<()> {
        self.record("cancelled")
    }

    async fn display_no_wallet(&self) -> Result<()> {
        self.record("no_wallet")
    }
}

#[async_trait]
impl TokenView for RecordingView {
    async fn display_no_wallet(&self) -> Result<()> {
        self.record("no_wallet")
    }

    async fn display_mint_missing(&self) -> Result<()> {
        self.record("mint_missing")
    }

    async fn display_mint_or_account_missing(&self) -> Result<()> {
        self.record("mint_or_account_missing")
    }

    async fn display_processing(&self, _text: &str) -> Result<Option<Message>> {
        self.record("processing")?;
        Ok(None)
    }

    async fn display_mint_created(
        &self,
        _created: &CreatedAccount,
        _message: Option<Message>,
    ) -> Result<()> {
        self.record("mint_created")
    }

    async fn display_token_account_created(
        &self,
        _created: &CreatedAccount,
        _message: Option<Message>,
    ) -> Result<()> {
        self.record("token_account_created")
    }

    async fn prompt_for_mint_amount(&self) -> Result<()> {
        self.record("mint_amount_prompt")
    }

    async fn display_invalid_mint_amount(&self) -> Result<()> {
        self.record("invalid_mint_amount")
    }

    async fn display_tokens_minted(
        &self,
        result: &MintResult,
        _message: Option<Message>,
    ) -> Result<()> {
        self.record(format!("tokens_minted:{}", result.amount))
    }

    async fn display_failure(&self, text: &str, _message: Option<Message>) -> Result<()> {
        self.record(format!("failure:{}", text))
    }
}

#[async_trait]
impl WalletView for RecordingView {
    async fn display_wallet_created(&self, _address: String, _mnemonic: String) -> Result<()> {
        self.record("wallet_created")
    }

    async fn prompt_for_secret(&self) -> Result<()> {
        self.record("secret_prompt")
    }

    async fn display_wallet_imported(&self, _address: String) -> Result<()> {
        self.record("wallet_imported")
    }

    async fn display_import_failed(&self) -> Result<()> {
        self.record("import_failed")
    }

    async fn display_wallet_address(&self, _address: String) -> Result<()> {
        self.record("wallet_address")
    }

    async fn display_disconnected(&self, address: Option<String>) -> Result<()> {
        self.record(format!("disconnected:{}", address.is_some()))
    }

    async fn display_no_wallet(&self) -> Result<()> {
        self.record("no_wallet")
    }

    async fn display_error(&self, _error_message: String) -> Result<()> {
        self.record("error")
    }
}
