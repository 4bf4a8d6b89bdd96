use anyhow::{anyhow, Result};
use bip39::{Language, Mnemonic};
use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::{rng, RngCore};
use solana_sdk::{pubkey::Pubkey, signature::Keypair};
use std::str::FromStr;

use crate::entity::DashboardError;

/// Generate a new wallet and the 12-word phrase that recovers it.
pub fn generate_wallet() -> Result<(String, Keypair)> {
    // 16 bytes of entropy give a 12-word English mnemonic.
    let mut entropy = [0u8; 16];
    rng().fill_bytes(&mut entropy);

    let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy)
        .map_err(|e| anyhow!("Failed to create mnemonic: {}", e))?;

    let keypair = keypair_from_seed_phrase(&mnemonic)?;

    Ok((mnemonic.to_string(), keypair))
}

/// Derive the Solana keypair from a mnemonic.
///
/// Only the first 32 bytes of the 64-byte BIP39 seed are used, as the ed25519
/// secret. The rest (chain code) has no meaning for a single-account wallet.
fn keypair_from_seed_phrase(mnemonic: &Mnemonic) -> Result<Keypair> {
    let seed = mnemonic.to_seed("");

    let signing_key = SigningKey::try_from(&seed[..32])
        .map_err(|e| anyhow!("Failed to create ed25519 signing key: {}", e))?;
    let verifying_key = VerifyingKey::from(&signing_key);

    // Solana keypair bytes are secret (32) followed by public (32).
    let mut ed25519_bytes = [0u8; 64];
    ed25519_bytes[..32].copy_from_slice(&signing_key.to_bytes());
    ed25519_bytes[32..].copy_from_slice(&verifying_key.to_bytes());

    Keypair::from_bytes(&ed25519_bytes)
        .map_err(|e| anyhow!("Failed to create Solana keypair: {}", e))
}

/// Restore a wallet from its recovery phrase.
pub fn keypair_from_mnemonic(phrase: &str) -> Result<Keypair> {
    let normalized = phrase.split_whitespace().collect::<Vec<_>>().join(" ");
    let mnemonic = Mnemonic::parse_in(Language::English, &normalized)
        .map_err(|e| DashboardError::WalletImport(format!("invalid mnemonic: {}", e)))?;

    keypair_from_seed_phrase(&mnemonic)
}

/// Serialize Keypair (64 bytes) to base58.
#[cfg(test)]
pub fn keypair_to_base58(keypair: &Keypair) -> String {
    bs58::encode(keypair.to_bytes()).into_string()
}

/// Restore Keypair from base58 string (64 bytes).
pub fn keypair_from_base58(keypair_base58: &str) -> Result<Keypair> {
    let keypair_bytes = bs58::decode(keypair_base58.trim())
        .into_vec()
        .map_err(|e| DashboardError::WalletImport(format!("invalid base58: {}", e)))?;

    if keypair_bytes.len() != 64 {
        return Err(DashboardError::WalletImport(format!(
            "invalid keypair length: {}",
            keypair_bytes.len()
        ))
        .into());
    }

    Keypair::from_bytes(&keypair_bytes)
        .map_err(|e| DashboardError::WalletImport(format!("invalid keypair: {}", e)).into())
}

/// Accept whatever the user pasted: a base58 secret key or a seed phrase.
pub fn import_keypair(secret: &str) -> Result<Keypair> {
    if secret.split_whitespace().count() > 1 {
        keypair_from_mnemonic(secret)
    } else {
        keypair_from_base58(secret)
    }
}

/// Convert base58 string to Solana `Pubkey`.
pub fn parse_pubkey(address: &str) -> Result<Pubkey> {
    Pubkey::from_str(address.trim()).map_err(|_| DashboardError::InvalidAddress.into())
}
