use crate::entity::DashboardError;
use crate::interactor::token_interactor::TokenInteractor;
use crate::view::token_view::TokenView;
use anyhow::Result;
use async_trait::async_trait;
use log::error;
use std::sync::Arc;

#[async_trait]
pub trait TokenPresenter: Send + Sync {
    async fn create_mint(&self, session_id: i64) -> Result<()>;
    async fn create_token_account(&self, session_id: i64) -> Result<()>;
    /// Returns false when the session isn't ready to mint.
    async fn start_mint_flow(&self, session_id: i64) -> Result<bool>;
    /// Returns false when the amount was rejected and should be asked again.
    async fn handle_mint_amount(&self, session_id: i64, amount_text: &str) -> Result<bool>;
}

pub struct TokenPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> TokenPresenterImpl<I, V>
where
    I: TokenInteractor,
    V: TokenView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }

    /// Precondition failures get their own message; everything else is the
    /// panel's generic failure text.
    async fn report_error(
        &self,
        e: anyhow::Error,
        failure_text: &str,
        message: Option<teloxide::types::Message>,
    ) -> Result<()> {
        match e.downcast_ref::<DashboardError>() {
            Some(DashboardError::WalletNotConnected) => self.view.display_no_wallet().await,
            Some(DashboardError::MintMissing) => self.view.display_mint_missing().await,
            Some(DashboardError::MintOrAccountMissing) => {
                self.view.display_mint_or_account_missing().await
            }
            _ => {
                error!("{}: {:?}", failure_text, e);
                self.view.display_failure(failure_text, message).await
            }
        }
    }
}

#[async_trait]
impl<I, V> TokenPresenter for TokenPresenterImpl<I, V>
where
    I: TokenInteractor + Send + Sync,
    V: TokenView + Send + Sync,
{
    async fn create_mint(&self, session_id: i64) -> Result<()> {
        if let Err(e) = self.interactor.ensure_can_create_mint(session_id).await {
            return self.report_error(e, "Error creating Token Mint", None).await;
        }

        let message = self.view.display_processing("Creating token mint...").await?;

        match self.interactor.create_mint(session_id).await {
            Ok(created) => self.view.display_mint_created(&created, message).await?,
            Err(e) => {
                self.report_error(e, "Error creating Token Mint", message)
                    .await?
            }
        }

        Ok(())
    }

    async fn create_token_account(&self, session_id: i64) -> Result<()> {
        if let Err(e) = self
            .interactor
            .ensure_can_create_token_account(session_id)
            .await
        {
            return self
                .report_error(e, "Error creating Token Account", None)
                .await;
        }

        let message = self
            .view
            .display_processing("Creating token account...")
            .await?;

        match self.interactor.create_token_account(session_id).await {
            Ok(created) => {
                self.view
                    .display_token_account_created(&created, message)
                    .await?
            }
            Err(e) => {
                self.report_error(e, "Error creating Token Account", message)
                    .await?
            }
        }

        Ok(())
    }

    async fn start_mint_flow(&self, session_id: i64) -> Result<bool> {
        match self.interactor.ensure_ready_to_mint(session_id).await {
            Ok(()) => {
                self.view.prompt_for_mint_amount().await?;
                Ok(true)
            }
            Err(e) => {
                self.report_error(e, "Error minting tokens", None).await?;
                Ok(false)
            }
        }
    }

    async fn handle_mint_amount(&self, session_id: i64, amount_text: &str) -> Result<bool> {
        let amount = match self.interactor.parse_mint_amount(amount_text).await {
            Ok(amount) => amount,
            Err(_) => {
                self.view.display_invalid_mint_amount().await?;
                return Ok(false);
            }
        };

        if let Err(e) = self.interactor.ensure_ready_to_mint(session_id).await {
            self.report_error(e, "Error minting tokens", None).await?;
            return Ok(true);
        }

        let message = self.view.display_processing("Minting tokens...").await?;

        match self.interactor.mint_tokens(session_id, amount).await {
            Ok(result) => self.view.display_tokens_minted(&result, message).await?,
            Err(e) => self.report_error(e, "Error minting tokens", message).await?,
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactor::session_store::SessionStore;
    use crate::interactor::token_interactor::TokenInteractorImpl;
    use crate::presenter::testing::RecordingView;
    use crate::solana::mock::MockLedger;
    use solana_sdk::signature::Keypair;

    async fn fixture(
        ledger: MockLedger,
        connected: bool,
    ) -> (
        TokenPresenterImpl<TokenInteractorImpl, RecordingView>,
        Arc<RecordingView>,
    ) {
        let sessions = Arc::new(SessionStore::new());
        if connected {
            sessions
                .update(1, |s| s.wallet = Some(Arc::new(Keypair::new())))
                .await;
        }
        let view = Arc::new(RecordingView::default());
        let interactor = Arc::new(TokenInteractorImpl::new(sessions, Arc::new(ledger)));
        (TokenPresenterImpl::new(interactor, view.clone()), view)
    }

    #[tokio::test]
    async fn create_mint_without_wallet_asks_to_connect() {
        let (presenter, view) = fixture(MockLedger::with_balance(0), false).await;

        presenter.create_mint(1).await.unwrap();

        assert_eq!(view.events(), vec!["no_wallet"]);
    }

    #[tokio::test]
    async fn token_account_before_mint_is_refused() {
        let (presenter, view) = fixture(MockLedger::with_balance(0), true).await;

        presenter.create_token_account(1).await.unwrap();

        assert_eq!(view.events(), vec!["mint_missing"]);
    }

    #[tokio::test]
    async fn failed_mint_uses_generic_text() {
        let (presenter, view) = fixture(MockLedger::failing(), true).await;

        presenter.create_mint(1).await.unwrap();

        assert_eq!(
            view.events(),
            vec!["processing", "failure:Error creating Token Mint"]
        );
    }

    #[tokio::test]
    async fn mint_flow_end_to_end() {
        let (presenter, view) = fixture(MockLedger::with_balance(10_000_000_000), true).await;

        presenter.create_mint(1).await.unwrap();
        presenter.create_token_account(1).await.unwrap();
        assert!(presenter.start_mint_flow(1).await.unwrap());
        assert!(!presenter.handle_mint_amount(1, "-3").await.unwrap());
        assert!(presenter.handle_mint_amount(1, "100").await.unwrap());

        assert_eq!(
            view.events(),
            vec![
                "processing",
                "mint_created",
                "processing",
                "token_account_created",
                "mint_amount_prompt",
                "invalid_mint_amount",
                "processing",
                "tokens_minted:100",
            ]
        );
    }

    #[tokio::test]
    async fn stale_mint_amount_reports_missing_accounts_without_processing() {
        let (presenter, view) = fixture(MockLedger::with_balance(10_000_000_000), true).await;

        assert!(presenter.handle_mint_amount(1, "10").await.unwrap());
        assert_eq!(view.events(), vec!["mint_or_account_missing"]);
    }

    #[tokio::test]
    async fn mint_flow_requires_both_accounts() {
        let (presenter, view) = fixture(MockLedger::with_balance(10_000_000_000), true).await;
        presenter.create_mint(1).await.unwrap();

        assert!(!presenter.start_mint_flow(1).await.unwrap());
        assert_eq!(view.events().last().unwrap(), "mint_or_account_missing");
    }
}
