use crate::entity::{DashboardError, TransferResult};
use crate::interactor::session_store::SessionStore;
use crate::solana::{self, tokens, LedgerGateway};
use crate::utils;
use anyhow::Result;
use async_trait::async_trait;
use log::warn;
use solana_sdk::signer::Signer;
use std::sync::Arc;

#[async_trait]
pub trait SendInteractor: Send + Sync {
    async fn ensure_connected(&self, session_id: i64) -> Result<()>;
    async fn validate_address(&self, address: &str) -> Result<bool>;
    async fn parse_amount(&self, amount_text: &str) -> Result<f64>;
    async fn send_transaction(
        &self,
        session_id: i64,
        recipient: &str,
        amount: f64,
    ) -> Result<TransferResult>;
}

pub struct SendInteractorImpl {
    sessions: Arc<SessionStore>,
    ledger: Arc<dyn LedgerGateway>,
}

impl SendInteractorImpl {
    pub fn new(sessions: Arc<SessionStore>, ledger: Arc<dyn LedgerGateway>) -> Self {
        Self { sessions, ledger }
    }
}

#[async_trait]
impl SendInteractor for SendInteractorImpl {
    async fn ensure_connected(&self, session_id: i64) -> Result<()> {
        if self.sessions.get(session_id).await.is_connected() {
            Ok(())
        } else {
            Err(DashboardError::WalletNotConnected.into())
        }
    }

    async fn validate_address(&self, address: &str) -> Result<bool> {
        Ok(utils::validate_solana_address(address))
    }

    async fn parse_amount(&self, amount_text: &str) -> Result<f64> {
        utils::parse_sol_amount(amount_text).ok_or_else(|| DashboardError::InvalidAmount.into())
    }

    async fn send_transaction(
        &self,
        session_id: i64,
        recipient: &str,
        amount: f64,
    ) -> Result<TransferResult> {
        let session = self.sessions.get(session_id).await;
        let keypair = session.wallet.ok_or(DashboardError::WalletNotConnected)?;

        let recipient_pubkey = solana::parse_pubkey(recipient)?;
        if amount.is_nan() || amount <= 0.0 {
            return Err(DashboardError::InvalidAmount.into());
        }

        let signature =
            tokens::send_sol(self.ledger.as_ref(), &keypair, &recipient_pubkey, amount).await?;

        // The transfer already landed; a failed refresh only hides the new balance.
        let updated_balance = match tokens::get_sol_balance(self.ledger.as_ref(), &keypair.pubkey())
            .await
        {
            Ok(balance) => Some(balance),
            Err(e) => {
                warn!("Failed to refresh balance after transfer: {}", e);
                None
            }
        };

        Ok(TransferResult {
            recipient: recipient_pubkey.to_string(),
            amount,
            signature: signature.to_string(),
            updated_balance,
        })
    }
}
