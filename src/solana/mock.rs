use anyhow::{anyhow, Result};
use async_trait::async_trait;
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::solana::gateway::LedgerGateway;

#[derive(Debug, Clone)]
pub struct Submission {
    pub payer: Pubkey,
    pub extra_signers: Vec<Pubkey>,
    pub instructions: Vec<Instruction>,
}

/// Records what would have been sent instead of talking to a node.
pub struct MockLedger {
    balance: u64,
    fail_submit: AtomicBool,
    submissions: Mutex<Vec<Submission>>,
    rent_requests: Mutex<Vec<usize>>,
}

impl MockLedger {
    pub fn with_balance(balance: u64) -> Self {
        Self {
            balance,
            fail_submit: AtomicBool::new(false),
            submissions: Mutex::new(Vec::new()),
            rent_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        let ledger = Self::with_balance(10_000_000_000);
        ledger.fail_submit.store(true, Ordering::SeqCst);
        ledger
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn rent_requests(&self) -> Vec<usize> {
        self.rent_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LedgerGateway for MockLedger {
    async fn balance(&self, _owner: &Pubkey) -> Result<u64> {
        Ok(self.balance)
    }

    async fn minimum_balance_for_rent_exemption(&self, space: usize) -> Result<u64> {
        self.rent_requests.lock().unwrap().push(space);
        Ok(space as u64 * 6_960)
    }

    async fn submit(
        &self,
        payer: &Keypair,
        extra_signers: &[&Keypair],
        instructions: &[Instruction],
    ) -> Result<Signature> {
        if self.fail_submit.load(Ordering::SeqCst) {
            return Err(anyhow!("Failed to send transaction: blockhash not found"));
        }

        self.submissions.lock().unwrap().push(Submission {
            payer: payer.pubkey(),
            extra_signers: extra_signers.iter().map(|k| k.pubkey()).collect(),
            instructions: instructions.to_vec(),
        });

        Ok(Signature::new_unique())
    }
}
