use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// Output formats for the final selection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	#[default]
	Plain,
	Json,
}

/// Command-line arguments accepted by the `bodymap` binary.
#[derive(Parser, Debug)]
#[command(
	name = "bodymap",
	version,
	about = "Pick symptoms by body area in the terminal"
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "BODYMAP_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "FILE",
		help = "Load the body-map catalog from a TOML file (default: bundled catalog)"
	)]
	pub(crate) catalog: Option<PathBuf>,
	#[arg(
		short,
		long,
		value_name = "NAME",
		help = "Area group to show as tabs (default: first catalog group)"
	)]
	pub(crate) group: Option<String>,
	#[arg(
		short,
		long,
		value_name = "ID",
		help = "Area tab to open first (default: first area of the group)"
	)]
	pub(crate) area: Option<u32>,
	#[arg(
		short,
		long,
		value_name = "FILE",
		help = "JSON selection list to start from and write back on close (default: none)"
	)]
	pub(crate) selection: Option<PathBuf>,
	#[arg(
		short,
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Format used to print the final selection"
	)]
	pub(crate) output: OutputFormat,
	#[arg(long, help = "List the catalog's area groups and exit")]
	pub(crate) list_groups: bool,
	#[arg(long, help = "Print the resolved configuration before starting")]
	pub(crate) print_config: bool,
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}
