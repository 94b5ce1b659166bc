use std::path::{Path, PathBuf};

use super::store::StoreError;

/// Directory under `$HOME` that holds all patodo files
pub const DATA_DIR: &str = ".config/patodo";
pub const TASKS_FILE: &str = "tasks.json";
pub const CONFIG_FILE: &str = "config.toml";

/// Resolve `$HOME/.config/patodo`.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
    Ok(data_dir_in(&home))
}

pub fn data_dir_in(home: &Path) -> PathBuf {
    home.join(DATA_DIR)
}

pub fn tasks_path(data_dir: &Path) -> PathBuf {
    data_dir.join(TASKS_FILE)
}

pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE)
}
