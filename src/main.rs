mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use bodymap::logging;
use cli::{OutputFormat, parse_cli, print_groups, print_json, print_plain};
use workflow::PickerWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	if cli.list_groups {
		print_groups(&resolved.catalog);
		return Ok(());
	}

	if cli.print_config {
		resolved.print_summary();
	}

	if let Err(err) = logging::initialize() {
		eprintln!("logging disabled: {err:#}");
	}

	let workflow = PickerWorkflow::from_config(resolved);
	let store = workflow.run()?;

	match cli.output {
		OutputFormat::Plain => print_plain(&store, workflow.catalog()),
		OutputFormat::Json => print_json(&store)?,
	}

	Ok(())
}
