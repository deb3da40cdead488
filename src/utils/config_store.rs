//! ConfigStore - Local Configuration Storage
//!
//! Reads and writes `artwork-table.toml` in the platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::domain::config::AppConfig;

/// Config file name inside the config directory
pub const CONFIG_FILE: &str = "artwork-table.toml";

/// Get or create the application's configuration directory
///
/// - **Linux**: `~/.config/artwork-table/`
/// - **macOS**: `~/Library/Application Support/dev.artwork-table.artwork-table/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\artwork-table\artwork-table\config\`
pub fn config_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("dev", "artwork-table", "artwork-table")
        .context("Could not determine project directories")?;

    let dir = project_dirs.config_dir();
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Could not create {}", dir.display()))?;
    }

    Ok(dir.to_path_buf())
}

/// Parse config text; blank text yields defaults
pub fn parse_config(content: &str) -> crate::error::Result<AppConfig> {
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    Ok(toml::from_str(content)?)
}

/// Load a config file, defaults when it does not exist
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))?;
    let config =
        parse_config(&content).with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}

/// Save a config file
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    let content = toml::to_string_pretty(config).map_err(crate::error::Error::from)?;
    fs::write(path, content).with_context(|| format!("Could not write {}", path.display()))?;
    Ok(())
}

/// Load the application config, then apply environment overrides
///
/// A broken file is logged and replaced by defaults so the window still opens.
pub fn load_app_config() -> AppConfig {
    let loaded = config_dir().and_then(|dir| load_config_from(&dir.join(CONFIG_FILE)));
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), "Falling back to default config");
            AppConfig::default()
        }
    };
    config.with_env_overrides()
}

/// Persist the application config
pub fn save_app_config(config: &AppConfig) -> Result<()> {
    let path = config_dir()?.join(CONFIG_FILE);
    save_config_to(&path, config)?;
    tracing::debug!(path = %path.display(), "Config saved");
    Ok(())
}

/// Store the UI locale without baking environment overrides into the file
pub fn save_locale(tag: &str) -> Result<()> {
    let path = config_dir()?.join(CONFIG_FILE);
    let mut config = load_config_from(&path)?;
    if config.ui.locale == tag {
        return Ok(());
    }
    config.ui.locale = tag.to_string();
    save_app_config(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("artwork-table-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("temp dir");
        dir.join(name)
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = scratch_path("missing.toml");
        let _ = fs::remove_file(&path);
        assert_eq!(load_config_from(&path).expect("defaults"), AppConfig::default());
    }

    #[test]
    fn test_blank_file_yields_defaults() {
        assert_eq!(parse_config("  \n").expect("defaults"), AppConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = parse_config("[selection]\nconcurrency = 2\n").expect("parse");
        assert_eq!(config.selection.concurrency, 2);
        assert_eq!(config.catalog, AppConfig::default().catalog);
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("saved.toml");
        let mut config = AppConfig::default();
        config.ui.locale = "zh".to_string();

        save_config_to(&path, &config).expect("save");
        assert_eq!(load_config_from(&path).expect("load"), config);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = scratch_path("broken.toml");
        fs::write(&path, "catalog = [").expect("write");
        assert!(load_config_from(&path).is_err());
        let _ = fs::remove_file(&path);
    }
}
