use crate::entity::DashboardError;
use crate::interactor::send_interactor::SendInteractor;
use crate::view::send_view::SendView;
use anyhow::Result;
use async_trait::async_trait;
use log::error;
use std::sync::Arc;

#[async_trait]
pub trait SendPresenter: Send + Sync {
    /// Returns false when the flow can't start (no wallet).
    async fn start_send_flow(&self, session_id: i64) -> Result<bool>;
    /// Returns the normalized recipient when the address is valid.
    async fn handle_recipient_address(&self, address_text: &str) -> Result<Option<String>>;
    async fn handle_amount(&self, amount_text: &str, recipient: &str) -> Result<Option<f64>>;
    async fn handle_confirmation(
        &self,
        confirmation_text: &str,
        session_id: i64,
        recipient: &str,
        amount: f64,
    ) -> Result<()>;
}

pub struct SendPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> SendPresenterImpl<I, V>
where
    I: SendInteractor,
    V: SendView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> SendPresenter for SendPresenterImpl<I, V>
where
    I: SendInteractor + Send + Sync,
    V: SendView + Send + Sync,
{
    async fn start_send_flow(&self, session_id: i64) -> Result<bool> {
        if self.interactor.ensure_connected(session_id).await.is_err() {
            self.view.display_no_wallet().await?;
            return Ok(false);
        }

        self.view.prompt_for_recipient_address().await?;
        Ok(true)
    }

    async fn handle_recipient_address(&self, address_text: &str) -> Result<Option<String>> {
        let address = address_text.trim();
        if self.interactor.validate_address(address).await? {
            self.view.prompt_for_amount().await?;
            Ok(Some(address.to_string()))
        } else {
            self.view.display_invalid_address().await?;
            Ok(None)
        }
    }

    async fn handle_amount(&self, amount_text: &str, recipient: &str) -> Result<Option<f64>> {
        match self.interactor.parse_amount(amount_text).await {
            Ok(amount) => {
                self.view.prompt_for_confirmation(recipient, amount).await?;
                Ok(Some(amount))
            }
            Err(_) => {
                self.view.display_invalid_amount().await?;
                Ok(None)
            }
        }
    }

    async fn handle_confirmation(
        &self,
        confirmation_text: &str,
        session_id: i64,
        recipient: &str,
        amount: f64,
    ) -> Result<()> {
        if confirmation_text.trim().to_lowercase() != "yes" {
            self.view.display_transaction_cancelled().await?;
            return Ok(());
        }

        if self.interactor.ensure_connected(session_id).await.is_err() {
            self.view.display_no_wallet().await?;
            return Ok(());
        }

        let message = self.view.display_processing().await?;

        match self
            .interactor
            .send_transaction(session_id, recipient, amount)
            .await
        {
            Ok(result) => {
                self.view.display_transaction_success(&result, message).await?;
            }
            Err(e) => {
                if let Some(DashboardError::WalletNotConnected) = e.downcast_ref::<DashboardError>()
                {
                    self.view.display_no_wallet().await?;
                } else {
                    error!("Transfer error for session {}: {:?}", session_id, e);
                    self.view.display_transaction_failed(message).await?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactor::send_interactor::SendInteractorImpl;
    use crate::interactor::session_store::SessionStore;
    use crate::presenter::testing::RecordingView;
    use crate::solana::mock::MockLedger;
    use solana_sdk::{pubkey::Pubkey, signature::Keypair};

    struct Fixture {
        presenter: SendPresenterImpl<SendInteractorImpl, RecordingView>,
        view: Arc<RecordingView>,
        ledger: Arc<MockLedger>,
    }

    async fn fixture(ledger: MockLedger, connected: bool) -> Fixture {
        let sessions = Arc::new(SessionStore::new());
        if connected {
            sessions
                .update(1, |s| s.wallet = Some(Arc::new(Keypair::new())))
                .await;
        }
        let ledger = Arc::new(ledger);
        let view = Arc::new(RecordingView::default());
        let interactor = Arc::new(SendInteractorImpl::new(sessions, ledger.clone()));
        Fixture {
            presenter: SendPresenterImpl::new(interactor, view.clone()),
            view,
            ledger,
        }
    }

    #[tokio::test]
    async fn empty_recipient_shows_error_and_does_not_submit() {
        let f = fixture(MockLedger::with_balance(10_000_000_000), true).await;

        let recipient = f.presenter.handle_recipient_address("").await.unwrap();

        assert!(recipient.is_none());
        assert_eq!(f.view.events(), vec!["invalid_address"]);
        assert!(f.ledger.submissions().is_empty());
    }

    #[tokio::test]
    async fn send_flow_needs_a_wallet() {
        let f = fixture(MockLedger::with_balance(0), false).await;

        assert!(!f.presenter.start_send_flow(1).await.unwrap());
        assert_eq!(f.view.events(), vec!["no_wallet"]);
    }

    #[tokio::test]
    async fn confirmed_transfer_shows_signature() {
        let f = fixture(MockLedger::with_balance(10_000_000_000), true).await;
        let recipient = Pubkey::new_unique().to_string();

        f.presenter
            .handle_confirmation("YES", 1, &recipient, 1.0)
            .await
            .unwrap();

        assert_eq!(f.view.events(), vec!["processing", "transfer_success"]);
        assert_eq!(f.ledger.submissions().len(), 1);
    }

    #[tokio::test]
    async fn confirmation_without_wallet_skips_processing() {
        let f = fixture(MockLedger::with_balance(10_000_000_000), false).await;
        let recipient = Pubkey::new_unique().to_string();

        f.presenter
            .handle_confirmation("yes", 1, &recipient, 1.0)
            .await
            .unwrap();

        assert_eq!(f.view.events(), vec!["no_wallet"]);
        assert!(f.ledger.submissions().is_empty());
    }

    #[tokio::test]
    async fn anything_but_yes_cancels() {
        let f = fixture(MockLedger::with_balance(10_000_000_000), true).await;
        let recipient = Pubkey::new_unique().to_string();

        f.presenter
            .handle_confirmation("no", 1, &recipient, 1.0)
            .await
            .unwrap();

        assert_eq!(f.view.events(), vec!["cancelled"]);
        assert!(f.ledger.submissions().is_empty());
    }

    #[tokio::test]
    async fn network_failure_is_a_generic_notification() {
        let f = fixture(MockLedger::failing(), true).await;
        let recipient = Pubkey::new_unique().to_string();

        f.presenter
            .handle_confirmation("yes", 1, &recipient, 1.0)
            .await
            .unwrap();

        assert_eq!(f.view.events(), vec!["processing", "transfer_failed"]);
    }

    #[tokio::test]
    async fn invalid_amount_reprompts() {
        let f = fixture(MockLedger::with_balance(0), true).await;

        assert_eq!(f.presenter.handle_amount("zero", "x").await.unwrap(), None);
        assert_eq!(
            f.presenter.handle_amount("0.5", "x").await.unwrap(),
            Some(0.5)
        );
        assert_eq!(f.view.events(), vec!["invalid_amount", "confirm"]);
    }
}
