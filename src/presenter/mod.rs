pub mod balance_presenter;
pub mod send_presenter;
pub mod token_presenter;
pub mod wallet_presenter;

#[cfg(test)]
pub(crate) mod testing;
