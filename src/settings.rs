use anyhow::{Context, Result};
use config::{builder::DefaultState, ConfigBuilder, Environment};
use serde::Deserialize;

pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";
pub const DEFAULT_EXPLORER_CLUSTER: &str = "devnet";

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Token issued by @BotFather
    pub telegram_bot_token: String,

    /// JSON-RPC endpoint of the cluster the dashboard operates on
    pub solana_rpc_url: String,

    /// Cluster name appended to explorer links ("devnet", "testnet", "mainnet-beta")
    pub explorer_cluster: String,
}

impl Settings {
    /// Defaults only; callers add sources on top.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>> {
        let builder = config::Config::builder()
            .set_default("solana_rpc_url", DEFAULT_RPC_URL)?
            .set_default("explorer_cluster", DEFAULT_EXPLORER_CLUSTER)?;

        Ok(builder)
    }

    /// Defaults overridden by environment variables (`TELEGRAM_BOT_TOKEN`,
    /// `SOLANA_RPC_URL`, `EXPLORER_CLUSTER`).
    pub fn from_env() -> Result<Self> {
        Self::builder()?
            .add_source(Environment::default())
            .build()?
            .try_deserialize()
            .context("TELEGRAM_BOT_TOKEN must be set in environment variables")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_devnet() {
        let settings: Settings = Settings::builder()
            .unwrap()
            .set_override("telegram_bot_token", "123:abc")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.solana_rpc_url, DEFAULT_RPC_URL);
        assert_eq!(settings.explorer_cluster, "devnet");
    }

    #[test]
    fn missing_bot_token_is_an_error() {
        let result: std::result::Result<Settings, _> = Settings::builder()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize();

        assert!(result.is_err());
    }
}
