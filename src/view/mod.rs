pub mod balance_view;
pub mod send_view;
pub mod token_view;
pub mod wallet_view;
