mod account_info;
mod dashboard_error;
mod operation;
mod session;
mod state;

pub use account_info::AccountInfo;
pub use dashboard_error::DashboardError;
pub use operation::{CreatedAccount, MintResult, TransferResult};
pub use session::Session;
pub use state::State;
