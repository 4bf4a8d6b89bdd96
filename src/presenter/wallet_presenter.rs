use crate::entity::DashboardError;
use crate::interactor::wallet_interactor::WalletInteractor;
use crate::view::wallet_view::WalletView;
use anyhow::Result;
use async_trait::async_trait;
use log::{error, warn};
use std::sync::Arc;

#[async_trait]
pub trait WalletPresenter: Send + Sync {
    async fn connect_new_wallet(&self, session_id: i64) -> Result<()>;
    async fn start_import(&self) -> Result<()>;
    /// Returns false when the secret was rejected and should be asked again.
    async fn handle_import(&self, session_id: i64, secret: &str) -> Result<bool>;
    async fn disconnect(&self, session_id: i64) -> Result<()>;
    async fn show_wallet_address(&self, session_id: i64) -> Result<()>;
}

pub struct WalletPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> WalletPresenterImpl<I, V>
where
    I: WalletInteractor,
    V: WalletView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> WalletPresenter for WalletPresenterImpl<I, V>
where
    I: WalletInteractor + Send + Sync,
    V: WalletView + Send + Sync,
{
    async fn connect_new_wallet(&self, session_id: i64) -> Result<()> {
        match self.interactor.connect_new_wallet(session_id).await {
            Ok((mnemonic, address)) => {
                self.view.display_wallet_created(address, mnemonic).await?;
            }
            Err(e) => {
                error!("Wallet generation error: {:?}", e);
                self.view
                    .display_error("Could not create a wallet".to_string())
                    .await?;
            }
        }

        Ok(())
    }

    async fn start_import(&self) -> Result<()> {
        self.view.prompt_for_secret().await
    }

    async fn handle_import(&self, session_id: i64, secret: &str) -> Result<bool> {
        match self.interactor.import_wallet(session_id, secret).await {
            Ok(address) => {
                self.view.display_wallet_imported(address).await?;
                Ok(true)
            }
            Err(e) => {
                // Never log the rejected input, it may be a real secret.
                if let Some(DashboardError::WalletImport(reason)) =
                    e.downcast_ref::<DashboardError>()
                {
                    warn!("Session {} wallet import rejected: {}", session_id, reason);
                } else {
                    error!("Wallet import error: {:?}", e);
                }
                self.view.display_import_failed().await?;
                Ok(false)
            }
        }
    }

    async fn disconnect(&self, session_id: i64) -> Result<()> {
        let previous = self.interactor.disconnect(session_id).await?;
        self.view.display_disconnected(previous).await
    }

    async fn show_wallet_address(&self, session_id: i64) -> Result<()> {
        match self.interactor.get_wallet_address(session_id).await? {
            Some(address) => self.view.display_wallet_address(address).await,
            None => self.view.display_no_wallet().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactor::session_store::SessionStore;
    use crate::interactor::wallet_interactor::WalletInteractorImpl;
    use crate::presenter::testing::RecordingView;

    fn fixture() -> (
        WalletPresenterImpl<WalletInteractorImpl, RecordingView>,
        Arc<RecordingView>,
    ) {
        let interactor = Arc::new(WalletInteractorImpl::new(Arc::new(SessionStore::new())));
        let view = Arc::new(RecordingView::default());
        (WalletPresenterImpl::new(interactor, view.clone()), view)
    }

    #[tokio::test]
    async fn rejected_secret_keeps_dialogue_open() {
        let (presenter, view) = fixture();

        assert!(!presenter.handle_import(1, "not a key").await.unwrap());
        assert_eq!(view.events(), vec!["import_failed"]);
    }

    #[tokio::test]
    async fn connect_show_disconnect() {
        let (presenter, view) = fixture();

        presenter.connect_new_wallet(1).await.unwrap();
        presenter.disconnect(1).await.unwrap();
        presenter.show_wallet_address(1).await.unwrap();

        assert_eq!(
            view.events(),
            vec!["wallet_created", "disconnected:true", "no_wallet"]
        );
    }
}
