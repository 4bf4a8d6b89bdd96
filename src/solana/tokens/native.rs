use crate::entity::DashboardError;
use crate::solana::gateway::LedgerGateway;
use crate::solana::tokens::constants::ESTIMATED_SOL_FEE;
use crate::solana::utils::{lamports_to_sol, sol_to_lamports};
use anyhow::Result;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_instruction,
};

/// Get SOL balance
pub async fn get_sol_balance(ledger: &dyn LedgerGateway, owner: &Pubkey) -> Result<f64> {
    let balance = ledger.balance(owner).await?;

    Ok(lamports_to_sol(balance))
}

/// Send SOL
pub async fn send_sol(
    ledger: &dyn LedgerGateway,
    keypair: &Keypair,
    recipient: &Pubkey,
    amount: f64,
) -> Result<Signature> {
    let lamports = sol_to_lamports(amount);
    if lamports == 0 {
        return Err(DashboardError::InvalidAmount.into());
    }

    // Make sure sender has enough balance (including estimated fees)
    let sender_pubkey = keypair.pubkey();
    let sender_balance = ledger.balance(&sender_pubkey).await?;
    if sender_balance < lamports.saturating_add(ESTIMATED_SOL_FEE) {
        return Err(DashboardError::InsufficientFunds.into());
    }

    let instruction = system_instruction::transfer(&sender_pubkey, recipient, lamports);

    ledger.submit(keypair, &[], &[instruction]).await
}
