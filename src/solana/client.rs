use anyhow::{anyhow, Result};
use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig, instruction::Instruction, pubkey::Pubkey,
    signature::Keypair, signature::Signature,
};
use std::sync::Arc;

use crate::solana::gateway::LedgerGateway;
use crate::solana::tokens::transaction::send_transaction;

/// Create a Solana client with confirmed commitment
pub fn create_solana_client(rpc_url: &str) -> Result<Arc<RpcClient>> {
    let client = RpcClient::new_with_commitment(rpc_url.to_string(), CommitmentConfig::confirmed());

    Ok(Arc::new(client))
}

/// `LedgerGateway` backed by a JSON-RPC node.
pub struct RpcLedger {
    client: Arc<RpcClient>,
}

impl RpcLedger {
    pub fn new(client: Arc<RpcClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LedgerGateway for RpcLedger {
    async fn balance(&self, owner: &Pubkey) -> Result<u64> {
        self.client
            .get_balance(owner)
            .await
            .map_err(|e| anyhow!("Failed to get balance: {}", e))
    }

    async fn minimum_balance_for_rent_exemption(&self, space: usize) -> Result<u64> {
        self.client
            .get_minimum_balance_for_rent_exemption(space)
            .await
            .map_err(|e| anyhow!("Failed to get rent-exempt minimum: {}", e))
    }

    async fn submit(
        &self,
        payer: &Keypair,
        extra_signers: &[&Keypair],
        instructions: &[Instruction],
    ) -> Result<Signature> {
        send_transaction(&self.client, payer, extra_signers, instructions).await
    }
}
