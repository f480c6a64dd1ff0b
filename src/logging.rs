//! Log setup for the terminal front-end.
//!
//! The terminal is owned by the UI while the picker runs, so records go to a
//! file under the data directory instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::app_dirs;

const LOG_FILE: &str = "bodymap.log";

/// Route `log` records to the default log file. Filtering follows `RUST_LOG`
/// and defaults to `warn`. Returns the log file path.
pub fn initialize() -> Result<PathBuf> {
	let path = app_dirs::get_data_dir()?.join(LOG_FILE);
	initialize_at(&path)?;
	Ok(path)
}

/// Route `log` records to `path`, creating parent directories as needed.
pub fn initialize_at(path: &Path) -> Result<()> {
	let file = open_log_file(path)?;
	Builder::from_env(Env::default().default_filter_or("warn"))
		.target(Target::Pipe(Box::new(file)))
		.try_init()
		.context("logger already initialized")
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn log_file_is_created_with_parents() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("nested").join(LOG_FILE);
		open_log_file(&path).expect("open");
		assert!(path.exists());
	}
}
