//! Platform directories used by `bodymap`.
//!
//! `BODYMAP_CONFIG_DIR` and `BODYMAP_DATA_DIR` replace the platform defaults
//! when set to a non-empty value.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

/// Resolve `env_name`, falling back to the directory `pick` selects from the
/// platform layout.
fn resolve(env_name: &str, pick: fn(&ProjectDirs) -> &Path) -> Result<PathBuf> {
	if let Some(dir) = env::var_os(env_name).filter(|value| !value.is_empty()) {
		return Ok(PathBuf::from(dir));
	}
	let dirs = ProjectDirs::from("io", "bodymap", "bodymap")
		.ok_or_else(|| anyhow!("no home directory to place bodymap files in"))?;
	Ok(pick(&dirs).to_path_buf())
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	resolve("BODYMAP_CONFIG_DIR", ProjectDirs::config_local_dir)
}

/// Directory for the log file.
pub fn get_data_dir() -> Result<PathBuf> {
	resolve("BODYMAP_DATA_DIR", ProjectDirs::data_local_dir)
}
