use anyhow::{anyhow, Result};
use std::fs;
use std::path::PathBuf;

pub fn get_copy_tui_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".copy-tui"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let dir = get_copy_tui_dir()?;
    Ok(dir.join("config.toml"))
}

pub fn get_log_path() -> Result<PathBuf> {
    let dir = get_copy_tui_dir()?;
    Ok(dir.join("copy-tui.log"))
}

pub fn ensure_directories_exist() -> Result<()> {
    let dir = get_copy_tui_dir()?;

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(())
}
