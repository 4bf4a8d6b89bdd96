use crate::utils;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// The dashboard's button grid. The connect button doubles as the
/// disconnect button once a wallet is connected, labelled with its address.
pub fn create_dashboard_keyboard(connected_address: Option<&str>) -> InlineKeyboardMarkup {
    let wallet_button = match connected_address {
        Some(address) => InlineKeyboardButton::callback(
            format!("🔌 {}", utils::shorten_address(address, 4)),
            "disconnect",
        ),
        None => InlineKeyboardButton::callback("Connect Wallet", "connect"),
    };

    InlineKeyboardMarkup::new(vec![
        vec![
            wallet_button,
            InlineKeyboardButton::callback("Import Wallet", "import"),
        ],
        vec![
            InlineKeyboardButton::callback("View Address", "address"),
            InlineKeyboardButton::callback("Sol Transfer", "send"),
        ],
        vec![
            InlineKeyboardButton::callback("Create Mint", "create_mint"),
            InlineKeyboardButton::callback("Create Account", "create_account"),
            InlineKeyboardButton::callback("Mint Tokens", "mint"),
        ],
        vec![
            InlineKeyboardButton::callback("Help", "help"),
            InlineKeyboardButton::callback("🔄 Refresh", "refresh"),
        ],
    ])
}
