use serde_derive::Deserialize;
use std::{fs, io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub app: App,
    pub assets: Assets,
}

#[derive(Debug, Deserialize)]
pub struct App {
    pub address: String,
}

/// Manifest of everything served to the browser: the host document, the
/// static file tree, and the template files shipped over `/loadqweb`.
#[derive(Debug, Deserialize)]
pub struct Assets {
    pub static_dir: PathBuf,
    pub index_file: PathBuf,
    pub template_files: Vec<PathBuf>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read the configuration file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse the configuration file as TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub fn load_config(file_path: &str) -> Result<Config, ConfigError> {
    let config_content = fs::read_to_string(file_path)?;

    let config: Config = toml::de::from_str(&config_content)?;

    Ok(config)
}
