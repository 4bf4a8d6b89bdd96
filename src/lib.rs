pub mod commands;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod presenter;
pub mod qrcodeutils;
pub mod router;
pub mod settings;
pub mod solana;
pub mod utils;
pub mod view;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export commonly used items
pub use commands::{DashboardCommand, MyDialogue};
pub use di::ServiceContainer;
pub use entity::{DashboardError, State};
pub use router::{Router, TelegramRouter};
pub use settings::Settings;
pub use solana::{create_solana_client, RpcLedger};
