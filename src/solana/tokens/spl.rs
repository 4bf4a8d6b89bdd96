use anyhow::{anyhow, Result};
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_instruction,
};
use spl_token::solana_program::program_pack::Pack;
use spl_token::state::{Account as TokenAccount, Mint};
use spl_token::{instruction as token_instruction, ID as TOKEN_PROGRAM_ID};

use crate::solana::gateway::LedgerGateway;

/// Instructions that allocate a rent-exempt mint account and initialize it
/// with `authority` as the mint authority and no freeze authority.
pub fn create_mint_instructions(
    payer: &Pubkey,
    mint: &Pubkey,
    authority: &Pubkey,
    lamports: u64,
    decimals: u8,
) -> Result<Vec<Instruction>> {
    Ok(vec![
        system_instruction::create_account(
            payer,
            mint,
            lamports,
            Mint::LEN as u64,
            &TOKEN_PROGRAM_ID,
        ),
        token_instruction::initialize_mint(&TOKEN_PROGRAM_ID, mint, authority, None, decimals)
            .map_err(|e| anyhow!("Failed to create initialize mint instruction: {}", e))?,
    ])
}

pub fn create_token_account_instructions(
    payer: &Pubkey,
    account: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
    lamports: u64,
) -> Result<Vec<Instruction>> {
    Ok(vec![
        system_instruction::create_account(
            payer,
            account,
            lamports,
            TokenAccount::LEN as u64,
            &TOKEN_PROGRAM_ID,
        ),
        token_instruction::initialize_account(&TOKEN_PROGRAM_ID, account, mint, owner)
            .map_err(|e| anyhow!("Failed to create initialize account instruction: {}", e))?,
    ])
}

/// Create a new mint owned by the payer. Returns the mint address and the
/// transaction signature.
pub async fn create_mint(
    ledger: &dyn LedgerGateway,
    payer: &Keypair,
    decimals: u8,
) -> Result<(Pubkey, Signature)> {
    let mint = Keypair::new();
    let lamports = ledger.minimum_balance_for_rent_exemption(Mint::LEN).await?;

    let payer_pubkey = payer.pubkey();
    let instructions = create_mint_instructions(
        &payer_pubkey,
        &mint.pubkey(),
        &payer_pubkey,
        lamports,
        decimals,
    )?;

    let signature = ledger.submit(payer, &[&mint], &instructions).await?;

    Ok((mint.pubkey(), signature))
}

/// Create a token account for `mint`, owned by the payer.
pub async fn create_token_account(
    ledger: &dyn LedgerGateway,
    payer: &Keypair,
    mint: &Pubkey,
) -> Result<(Pubkey, Signature)> {
    let account = Keypair::new();
    let lamports = ledger
        .minimum_balance_for_rent_exemption(TokenAccount::LEN)
        .await?;

    let payer_pubkey = payer.pubkey();
    let instructions = create_token_account_instructions(
        &payer_pubkey,
        &account.pubkey(),
        mint,
        &payer_pubkey,
        lamports,
    )?;

    let signature = ledger.submit(payer, &[&account], &instructions).await?;

    Ok((account.pubkey(), signature))
}

/// Mint `amount` base units of `mint` into `account`. The payer signs as
/// mint authority.
pub async fn mint_tokens(
    ledger: &dyn LedgerGateway,
    payer: &Keypair,
    mint: &Pubkey,
    account: &Pubkey,
    amount: u64,
) -> Result<Signature> {
    let instruction = token_instruction::mint_to(
        &TOKEN_PROGRAM_ID,
        mint,
        account,
        &payer.pubkey(),
        &[],
        amount,
    )
    .map_err(|e| anyhow!("Failed to create mint_to instruction: {}", e))?;

    ledger.submit(payer, &[], &[instruction]).await
}
