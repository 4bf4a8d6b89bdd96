use crate::entity::Session;
use crate::interactor::session_store::SessionStore;
use crate::solana;
use anyhow::Result;
use async_trait::async_trait;
use log::info;
use solana_sdk::signer::Signer;
use std::sync::Arc;

#[async_trait]
pub trait WalletInteractor: Send + Sync {
    /// Generate a wallet and connect it. Returns (mnemonic, address).
    async fn connect_new_wallet(&self, session_id: i64) -> Result<(String, String)>;
    async fn import_wallet(&self, session_id: i64, secret: &str) -> Result<String>;
    /// Returns the address that was connected, if any.
    async fn disconnect(&self, session_id: i64) -> Result<Option<String>>;
    async fn get_wallet_address(&self, session_id: i64) -> Result<Option<String>>;
}

pub struct WalletInteractorImpl {
    sessions: Arc<SessionStore>,
}

impl WalletInteractorImpl {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    // Mint and token account belong to the previous wallet's authority, so a
    // newly connected wallet starts from a clean session.
    async fn connect(&self, session_id: i64, keypair: solana_sdk::signature::Keypair) -> String {
        let address = keypair.pubkey().to_string();
        self.sessions
            .replace(
                session_id,
                Session {
                    wallet: Some(Arc::new(keypair)),
                    ..Default::default()
                },
            )
            .await;

        info!("Session {} connected wallet {}", session_id, address);
        address
    }
}

#[async_trait]
impl WalletInteractor for WalletInteractorImpl {
    async fn connect_new_wallet(&self, session_id: i64) -> Result<(String, String)> {
        let (mnemonic, keypair) = solana::generate_wallet()?;
        let address = self.connect(session_id, keypair).await;

        Ok((mnemonic, address))
    }

    async fn import_wallet(&self, session_id: i64, secret: &str) -> Result<String> {
        let keypair = solana::import_keypair(secret)?;

        Ok(self.connect(session_id, keypair).await)
    }

    async fn disconnect(&self, session_id: i64) -> Result<Option<String>> {
        let previous = self.sessions.remove(session_id).await;

        Ok(previous
            .and_then(|session| session.wallet_pubkey())
            .map(|pubkey| pubkey.to_string()))
    }

    async fn get_wallet_address(&self, session_id: i64) -> Result<Option<String>> {
        let session = self.sessions.get(session_id).await;

        Ok(session.wallet_pubkey().map(|pubkey| pubkey.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::DashboardError;
    use solana_sdk::{pubkey::Pubkey, signature::Keypair};

    fn interactor() -> (WalletInteractorImpl, Arc<SessionStore>) {
        let sessions = Arc::new(SessionStore::new());
        (WalletInteractorImpl::new(sessions.clone()), sessions)
    }

    #[tokio::test]
    async fn new_wallet_is_connected() {
        let (interactor, _) = interactor();

        let (mnemonic, address) = interactor.connect_new_wallet(1).await.unwrap();

        assert_eq!(mnemonic.split_whitespace().count(), 12);
        assert_eq!(
            interactor.get_wallet_address(1).await.unwrap(),
            Some(address)
        );
    }

    #[tokio::test]
    async fn switching_wallets_clears_mint() {
        let (interactor, sessions) = interactor();
        interactor.connect_new_wallet(1).await.unwrap();
        sessions.update(1, |s| s.set_mint(Pubkey::new_unique())).await;

        let secret = solana::wallet::keypair_to_base58(&Keypair::new());
        interactor.import_wallet(1, &secret).await.unwrap();

        assert!(sessions.get(1).await.mint.is_none());
    }

    #[tokio::test]
    async fn bad_secret_leaves_session_untouched() {
        let (interactor, _) = interactor();
        let (_, address) = interactor.connect_new_wallet(1).await.unwrap();

        let err = interactor.import_wallet(1, "garbage").await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<DashboardError>(),
            Some(DashboardError::WalletImport(_))
        ));
        assert_eq!(
            interactor.get_wallet_address(1).await.unwrap(),
            Some(address)
        );
    }

    #[tokio::test]
    async fn disconnect_reports_previous_address() {
        let (interactor, _) = interactor();
        let (_, address) = interactor.connect_new_wallet(1).await.unwrap();

        assert_eq!(interactor.disconnect(1).await.unwrap(), Some(address));
        assert_eq!(interactor.disconnect(1).await.unwrap(), None);
        assert_eq!(interactor.get_wallet_address(1).await.unwrap(), None);
    }
}
