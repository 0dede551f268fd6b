pub mod clock;
pub mod config;
pub mod deck;
pub mod error;
pub mod game;
pub mod sm2;
pub mod spaced_repetition;

pub use error::{Error, Result};

use std::fs::create_dir_all;
use std::path::PathBuf;

const APP_NAME: &str = "vocab-drill";

pub fn data_dir() -> Result<PathBuf> {
    let path = dirs::data_local_dir().ok_or(Error::NoDataDir)?.join(APP_NAME);
    if !path.exists() {
        create_dir_all(&path)?;
    }
    Ok(path)
}

pub fn deck_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("deck.json"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or(Error::NoDataDir)?
        .join(APP_NAME)
        .join("config.json"))
}
