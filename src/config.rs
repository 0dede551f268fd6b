use crate::config_path;
use crate::error::Result;
use crate::game::XpCurve;
use log::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub xp: XpCurve,
    /// cap on cards per review session
    pub review_limit: Option<usize>,
}

impl Config {
    /// `config.json` in the user config dir, or defaults when there is none
    pub fn load() -> Result<Self> {
        Self::from_path(&config_path()?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!("{path:?} not found, using default config");
            return Ok(Self::default());
        }
        let s = fs::read_to_string(path)?;
        let config = serde_json::from_str(&s)?;
        info!("loaded config from {path:?}");
        Ok(config)
    }
}
