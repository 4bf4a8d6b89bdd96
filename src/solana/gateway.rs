use anyhow::Result;
use async_trait::async_trait;
use solana_sdk::{
    instruction::Instruction, pubkey::Pubkey, signature::Keypair, signature::Signature,
};

/// The boundary to the Solana network. Everything behind it (signing,
/// broadcast, rent calculation) belongs to the SDK.
#[async_trait]
pub trait LedgerGateway: Send + Sync {
    /// Balance of an account in lamports
    async fn balance(&self, owner: &Pubkey) -> Result<u64>;

    async fn minimum_balance_for_rent_exemption(&self, space: usize) -> Result<u64>;

    /// Sign with the payer plus any freshly generated account keys, send, and
    /// wait for confirmation.
    async fn submit(
        &self,
        payer: &Keypair,
        extra_signers: &[&Keypair],
        instructions: &[Instruction],
    ) -> Result<Signature>;
}
