//! Configuration loading and resolution.
//!
//! `load` layers default files, `--config` files, `BODYMAP__*` environment
//! variables and CLI flags, then resolves the result against the catalog.

mod raw;
mod resolved;

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use bodymap::app_dirs;
use config::{Config, Environment, File};

use crate::cli::CliArgs;
use raw::RawConfig;

pub(crate) use resolved::ResolvedConfig;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

/// Per-user `config.toml` first, then `bodymap.toml` in the working
/// directory, so a project file overrides personal defaults.
fn default_config_files() -> Vec<PathBuf> {
	let user = app_dirs::get_config_dir()
		.ok()
		.map(|dir| dir.join("config.toml"));
	user.into_iter()
		.chain(Some(PathBuf::from("bodymap.toml")))
		.collect()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	let optional = defaults
		.into_iter()
		.map(|path| File::from(path).required(false));
	let explicit = cli
		.config
		.iter()
		.map(|path| File::from(path.clone()).required(true));

	optional
		.chain(explicit)
		.fold(Config::builder(), |builder, file| builder.add_source(file))
		.add_source(Environment::with_prefix("bodymap").separator("__"))
		.build()
		.map_err(|err| anyhow!("failed to read configuration: {err}"))
}

#[cfg(test)]
mod tests;
