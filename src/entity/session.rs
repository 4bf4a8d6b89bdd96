use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};
use std::sync::Arc;

/// Everything a chat remembers between button presses. Lives only in memory.
#[derive(Clone, Default)]
pub struct Session {
    pub wallet: Option<Arc<Keypair>>,
    pub mint: Option<Pubkey>,
    pub token_account: Option<Pubkey>,
}

impl Session {
    pub fn wallet_pubkey(&self) -> Option<Pubkey> {
        self.wallet.as_ref().map(|keypair| keypair.pubkey())
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.is_some()
    }

    /// A token account belongs to exactly one mint, so a new mint drops it.
    pub fn set_mint(&mut self, mint: Pubkey) {
        self.mint = Some(mint);
        self.token_account = None;
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("wallet", &self.wallet_pubkey())
            .field("mint", &self.mint)
            .field("token_account", &self.token_account)
            .finish()
    }
}
