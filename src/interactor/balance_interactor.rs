use crate::entity::AccountInfo;
use crate::interactor::session_store::SessionStore;
use crate::solana::{tokens, LedgerGateway};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait BalanceInteractor: Send + Sync {
    async fn get_account_info(&self, session_id: i64) -> Result<AccountInfo>;
}

pub struct BalanceInteractorImpl {
    sessions: Arc<SessionStore>,
    ledger: Arc<dyn LedgerGateway>,
}

impl BalanceInteractorImpl {
    pub fn new(sessions: Arc<SessionStore>, ledger: Arc<dyn LedgerGateway>) -> Self {
        Self { sessions, ledger }
    }
}

#[async_trait]
impl BalanceInteractor for BalanceInteractorImpl {
    async fn get_account_info(&self, session_id: i64) -> Result<AccountInfo> {
        let session = self.sessions.get(session_id).await;

        let pubkey = match session.wallet_pubkey() {
            Some(pubkey) => pubkey,
            None => return Ok(AccountInfo::disconnected()),
        };

        let balance = tokens::get_sol_balance(self.ledger.as_ref(), &pubkey).await?;

        Ok(AccountInfo {
            connected: true,
            address: Some(pubkey.to_string()),
            balance_sol: Some(balance),
        })
    }
}
