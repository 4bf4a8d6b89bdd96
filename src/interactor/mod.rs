pub mod balance_interactor;
pub mod send_interactor;
pub mod session_store;
pub mod token_interactor;
pub mod wallet_interactor;
