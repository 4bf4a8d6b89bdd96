#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Wallet not connected")]
    WalletNotConnected,

    #[error("No token mint has been created yet")]
    MintMissing,

    #[error("Mint and token account must be created first")]
    MintOrAccountMissing,

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Invalid address")]
    InvalidAddress,

    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Failed to import wallet: {0}")]
    WalletImport(String),
}
