//! Configuration for Users API

use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
        })
    }
}
