use crate::interactor::balance_interactor::BalanceInteractor;
use crate::view::balance_view::BalanceView;
use anyhow::Result;
use async_trait::async_trait;
use log::error;
use std::sync::Arc;
use teloxide::types::Message;

#[async_trait]
pub trait BalancePresenter: Send + Sync {
    async fn show_account_info(&self, session_id: i64) -> Result<()>;
    /// Re-render into an existing dashboard message.
    async fn refresh_account_info(&self, session_id: i64, message: Message) -> Result<()>;
}

pub struct BalancePresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> BalancePresenterImpl<I, V>
where
    I: BalanceInteractor,
    V: BalanceView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> BalancePresenter for BalancePresenterImpl<I, V>
where
    I: BalanceInteractor + Send + Sync,
    V: BalanceView + Send + Sync,
{
    async fn show_account_info(&self, session_id: i64) -> Result<()> {
        let message = self.view.display_loading().await?;
        self.render(session_id, message).await
    }

    async fn refresh_account_info(&self, session_id: i64, message: Message) -> Result<()> {
        self.render(session_id, Some(message)).await
    }
}

impl<I, V> BalancePresenterImpl<I, V>
where
    I: BalanceInteractor + Send + Sync,
    V: BalanceView + Send + Sync,
{
    async fn render(&self, session_id: i64, message: Option<Message>) -> Result<()> {
        match self.interactor.get_account_info(session_id).await {
            Ok(info) => {
                self.view.display_account_info(info, message).await?;
            }
            Err(e) => {
                error!("Balance error for session {}: {:?}", session_id, e);
                self.view
                    .display_error("Error fetching balance".to_string(), message)
                    .await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactor::balance_interactor::BalanceInteractorImpl;
    use crate::interactor::session_store::SessionStore;
    use crate::presenter::testing::RecordingView;
    use crate::solana::mock::MockLedger;

    #[tokio::test]
    async fn disconnected_dashboard_still_renders() {
        let interactor = Arc::new(BalanceInteractorImpl::new(
            Arc::new(SessionStore::new()),
            Arc::new(MockLedger::with_balance(0)),
        ));
        let view = Arc::new(RecordingView::default());
        let presenter = BalancePresenterImpl::new(interactor, view.clone());

        presenter.show_account_info(1).await.unwrap();

        assert_eq!(view.events(), vec!["loading", "account_info:No:--"]);
    }
}
