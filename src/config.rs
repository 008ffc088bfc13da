use std::path::PathBuf;

use confy::ConfyError;
use gridfrier::RenderOptions;
use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const CONFIG: (&str, Option<&str>) = ("gridfried", Some("config"));

/// Keys the configuration file understands.
pub const KEYS: [&str; 2] = ["max_depth", "validate"];

/// The configuration file, every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// How deep tables may nest inside cells.
    pub max_depth: Option<usize>,
    /// Check that cells tile the table grid before drawing it.
    pub validate: Option<bool>,
}

/// The effective configuration, with defaults filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Config {
    pub max_depth: usize,
    pub validate: bool,
}

impl Default for Config {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            max_depth: options.max_depth,
            validate: options.validate,
        }
    }
}

impl From<UserConfig> for Config {
    fn from(value: UserConfig) -> Self {
        let defaults = Config::default();
        Self {
            max_depth: value.max_depth.unwrap_or(defaults.max_depth),
            validate: value.validate.unwrap_or(defaults.validate),
        }
    }
}

impl From<Config> for RenderOptions {
    fn from(value: Config) -> Self {
        RenderOptions {
            max_depth: value.max_depth,
            validate: value.validate,
        }
    }
}

pub fn load() -> Result<UserConfig, Error> {
    let config = confy::load(CONFIG.0, CONFIG.1)?;
    log::debug!("loaded {config:?}");
    Ok(config)
}

pub fn get_configuration_file_path() -> Result<PathBuf, ConfyError> {
    confy::get_configuration_file_path(CONFIG.0, CONFIG.1)
}

pub fn print_default() -> Result<(), Error> {
    print!("{}", default_toml()?);
    Ok(())
}

fn default_toml() -> Result<String, Error> {
    Ok(toml::to_string(&Config::default())?)
}
