use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub engine: EngineConfig,
    pub identity: IdentityConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct EngineConfig {
    /// Packaged model asset directory
    pub model_asset_path: String,
    /// Writable directory the model is unpacked into
    pub model_data_path: String,
    /// Sample rate the recognizer expects
    pub sample_rate: u32,
    /// Run against a scripted engine instead of a real model
    #[serde(default)]
    pub scripted: bool,
}

#[derive(Debug, Deserialize)]
pub struct IdentityConfig {
    /// Owner id notes are created under; empty means unauthenticated
    #[serde(default)]
    pub user_id: String,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
