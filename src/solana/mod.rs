// Re-export everything from submodules
pub mod client;
pub mod explorer;
pub mod gateway;
pub mod tokens;
pub mod utils;
pub mod wallet;

#[cfg(test)]
pub(crate) mod mock;

// Re-export commonly used items
pub use client::{create_solana_client, RpcLedger};
pub use explorer::Explorer;
pub use gateway::LedgerGateway;
pub use tokens::constants::MINT_DECIMALS;
pub use wallet::{generate_wallet, import_keypair, parse_pubkey};
