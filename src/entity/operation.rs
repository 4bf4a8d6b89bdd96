/// Outcome of a SOL transfer that reached the network.
#[derive(Debug, Clone)]
pub struct TransferResult {
    pub recipient: String,
    pub amount: f64,
    pub signature: String,
    pub updated_balance: Option<f64>,
}

/// A freshly created on-chain account (mint or token account) plus the
/// signature of the transaction that created it.
#[derive(Debug, Clone)]
pub struct CreatedAccount {
    pub address: String,
    pub signature: String,
}

#[derive(Debug, Clone)]
pub struct MintResult {
    pub amount: u64,
    pub signature: String,
}
