use crate::entity::{CreatedAccount, DashboardError, MintResult};
use crate::interactor::session_store::SessionStore;
use crate::solana::{tokens, LedgerGateway, MINT_DECIMALS};
use crate::utils;
use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

#[async_trait]
pub trait TokenInteractor: Send + Sync {
    async fn ensure_can_create_mint(&self, session_id: i64) -> Result<()>;
    async fn ensure_can_create_token_account(&self, session_id: i64) -> Result<()>;
    async fn create_mint(&self, session_id: i64) -> Result<CreatedAccount>;
    async fn create_token_account(&self, session_id: i64) -> Result<CreatedAccount>;
    /// Fails fast when the session can't mint yet, before asking for an amount.
    async fn ensure_ready_to_mint(&self, session_id: i64) -> Result<()>;
    async fn parse_mint_amount(&self, amount_text: &str) -> Result<u64>;
    async fn mint_tokens(&self, session_id: i64, amount: u64) -> Result<MintResult>;
}

pub struct TokenInteractorImpl {
    sessions: Arc<SessionStore>,
    ledger: Arc<dyn LedgerGateway>,
}

impl TokenInteractorImpl {
    pub fn new(sessions: Arc<SessionStore>, ledger: Arc<dyn LedgerGateway>) -> Self {
        Self { sessions, ledger }
    }
}

#[async_trait]
impl TokenInteractor for TokenInteractorImpl {
    async fn ensure_can_create_mint(&self, session_id: i64) -> Result<()> {
        if !self.sessions.get(session_id).await.is_connected() {
            return Err(DashboardError::WalletNotConnected.into());
        }
        Ok(())
    }

    async fn ensure_can_create_token_account(&self, session_id: i64) -> Result<()> {
        let session = self.sessions.get(session_id).await;
        if !session.is_connected() {
            return Err(DashboardError::WalletNotConnected.into());
        }
        if session.mint.is_none() {
            return Err(DashboardError::MintMissing.into());
        }
        Ok(())
    }

    async fn create_mint(&self, session_id: i64) -> Result<CreatedAccount> {
        let session = self.sessions.get(session_id).await;
        let payer = session.wallet.ok_or(DashboardError::WalletNotConnected)?;

        let (mint, signature) =
            tokens::create_mint(self.ledger.as_ref(), &payer, MINT_DECIMALS).await?;

        self.sessions.update(session_id, |s| s.set_mint(mint)).await;
        info!("Session {} created mint {}", session_id, mint);

        Ok(CreatedAccount {
            address: mint.to_string(),
            signature: signature.to_string(),
        })
    }

    async fn create_token_account(&self, session_id: i64) -> Result<CreatedAccount> {
        let session = self.sessions.get(session_id).await;
        let payer = session.wallet.ok_or(DashboardError::WalletNotConnected)?;
        let mint = session.mint.ok_or(DashboardError::MintMissing)?;

        let (account, signature) =
            tokens::create_token_account(self.ledger.as_ref(), &payer, &mint).await?;

        self.sessions
            .update(session_id, |s| {
                // Only attach the account if the mint didn't change meanwhile.
                if s.mint == Some(mint) {
                    s.token_account = Some(account);
                }
            })
            .await;
        info!(
            "Session {} created token account {} for mint {}",
            session_id, account, mint
        );

        Ok(CreatedAccount {
            address: account.to_string(),
            signature: signature.to_string(),
        })
    }

    async fn ensure_ready_to_mint(&self, session_id: i64) -> Result<()> {
        let session = self.sessions.get(session_id).await;
        if !session.is_connected() {
            return Err(DashboardError::WalletNotConnected.into());
        }
        if session.mint.is_none() || session.token_account.is_none() {
            return Err(DashboardError::MintOrAccountMissing.into());
        }
        Ok(())
    }

    async fn parse_mint_amount(&self, amount_text: &str) -> Result<u64> {
        utils::parse_token_amount(amount_text).ok_or_else(|| DashboardError::InvalidAmount.into())
    }

    async fn mint_tokens(&self, session_id: i64, amount: u64) -> Result<MintResult> {
        let session = self.sessions.get(session_id).await;
        let payer = session.wallet.ok_or(DashboardError::WalletNotConnected)?;
        let (mint, account) = match (session.mint, session.token_account) {
            (Some(mint), Some(account)) => (mint, account),
            _ => return Err(DashboardError::MintOrAccountMissing.into()),
        };
        if amount == 0 {
            return Err(DashboardError::InvalidAmount.into());
        }

        let signature =
            tokens::mint_tokens(self.ledger.as_ref(), &payer, &mint, &account, amount).await?;

        Ok(MintResult {
            amount,
            signature: signature.to_string(),
        })
    }
}
