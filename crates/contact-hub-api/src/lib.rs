use anyhow::{Result, anyhow};
use std::sync::OnceLock;

pub mod data;
mod persistence;
pub mod service;
#[cfg(test)]
mod tests;
pub mod util;

pub use persistence::StoreContext;
pub use persistence::get_store_context;

/// Configuration for the contact management core
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: String,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn init(conf: Config) -> Result<()> {
    CONFIG
        .set(conf)
        .map_err(|e| anyhow!("Could not initialize ContactHub API: {e:?}"))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG.get().expect("ContactHub API is not initialized")
}
