use std::sync::Arc;

use crate::interactor::session_store::SessionStore;
use crate::settings::Settings;
use crate::solana::{Explorer, LedgerGateway};

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    settings: Settings,
    ledger: Arc<dyn LedgerGateway>,
    sessions: Arc<SessionStore>,
    explorer: Explorer,
}

impl ServiceContainer {
    pub fn new(settings: Settings, ledger: Arc<dyn LedgerGateway>) -> Self {
        let explorer = Explorer::new(settings.explorer_cluster.clone());

        Self {
            settings,
            ledger,
            sessions: Arc::new(SessionStore::new()),
            explorer,
        }
    }

    // Accessor methods

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn ledger(&self) -> Arc<dyn LedgerGateway> {
        self.ledger.clone()
    }

    pub fn sessions(&self) -> Arc<SessionStore> {
        self.sessions.clone()
    }

    pub fn explorer(&self) -> Explorer {
        self.explorer.clone()
    }
}
