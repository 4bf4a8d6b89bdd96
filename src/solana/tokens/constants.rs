// Mints created from the dashboard hold whole tokens only
pub const MINT_DECIMALS: u8 = 0;

// Fee constants
pub const ESTIMATED_SOL_FEE: u64 = 5000; // in lamports
