use color_eyre::eyre::{Result, WrapErr};
use tracing::instrument;

use crate::twitter::{TwitterClient, TwitterConfig};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
}

impl AppConfig {
    #[instrument(name = "AppConfig::from_env")]
    pub fn from_env() -> Result<Self> {
        let port = std::env::var("PORT").unwrap_or_else(|_| "5010".to_string());
        let port = port.parse().wrap_err("PORT is not a valid port number")?;

        Ok(Self { port })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub app: AppConfig,
    pub twitter: TwitterClient,
}

impl AppState {
    #[instrument(name = "AppState::from_env", err)]
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            app: AppConfig::from_env()?,
            twitter: TwitterClient::new(&TwitterConfig::from_env()?),
        })
    }
}
