// Re-export submodules
pub mod constants;
pub mod native;
pub mod spl;
pub mod transaction;

// Re-export commonly used items
pub use native::{get_sol_balance, send_sol};
pub use spl::{create_mint, create_token_account, mint_tokens};
