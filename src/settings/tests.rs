use std::fs;
use std::path::PathBuf;

use bodymap::AreaId;
use clap::Parser;

use super::raw::RawConfig;
use super::*;
use crate::cli::CliArgs;

fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
	let path = dir.path().join("bodymap.toml");
	fs::write(&path, contents).expect("write config");
	path
}

#[test]
fn project_file_is_consulted_last() {
	let files = default_config_files();
	assert_eq!(files.last(), Some(&PathBuf::from("bodymap.toml")));
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"bodymap",
		"--group",
		"Limbs",
		"--area",
		"8",
		"--selection",
		"picked.json",
	]);
	let mut raw = RawConfig::default();
	raw.picker.group = Some("Head".into());
	raw.picker.initial_area = Some(2);
	raw.apply_cli_overrides(&cli);

	assert_eq!(raw.picker.group.as_deref(), Some("Limbs"));
	assert_eq!(raw.picker.initial_area, Some(8));
	assert_eq!(raw.selection.path, Some(PathBuf::from("picked.json")));
	assert_eq!(raw.catalog.path, None);
}

#[test]
fn defaults_resolve_to_first_group_and_area() {
	let resolved = RawConfig::default().resolve().expect("resolve");
	let first = resolved.catalog.default_group().clone();
	assert_eq!(resolved.group, first);
	assert_eq!(resolved.initial_area, first.first());
	assert!(resolved.summary().contains("catalog: bundled"));
}

#[test]
fn initial_area_selects_its_group() {
	let mut raw = RawConfig::default();
	raw.picker.initial_area = Some(5);
	let resolved = raw.resolve().expect("resolve");
	assert_eq!(resolved.group.name(), "Torso");
	assert_eq!(resolved.initial_area, AreaId(5));
}

#[test]
fn unknown_group_is_reported() {
	let mut raw = RawConfig::default();
	raw.picker.group = Some("Tail".into());
	let err = raw.resolve().unwrap_err();
	assert!(err.to_string().contains("unknown area group 'Tail'"));
}

#[test]
fn zero_initial_area_is_rejected() {
	let mut raw = RawConfig::default();
	raw.picker.initial_area = Some(0);
	assert!(raw.resolve().is_err());
}

#[test]
fn config_file_is_loaded() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = write_config(
		&dir,
		r#"
[picker]
group = "Whole body"
initial_area = 10

[selection]
path = "/tmp/selection.json"
"#,
	);
	let cli = CliArgs::parse_from(["bodymap", "--no-config", "--config", path.to_str().expect("utf-8")]);

	let resolved = load(&cli).expect("load");
	assert_eq!(resolved.group.name(), "Whole body");
	assert_eq!(resolved.initial_area, AreaId(10));
	assert_eq!(resolved.selection_path, Some(PathBuf::from("/tmp/selection.json")));
}

#[test]
fn custom_catalog_path_is_used() {
	let dir = tempfile::tempdir().expect("tempdir");
	let catalog_path = dir.path().join("catalog.toml");
	fs::write(
		&catalog_path,
		r#"
[[areas]]
id = 3
name = "Tail"
symptoms = [{ id = 1, name = "Wagging" }]

[[groups]]
name = "Extras"
areas = [3]
"#,
	)
	.expect("write catalog");

	let mut raw = RawConfig::default();
	raw.catalog.path = Some(catalog_path.clone());
	let resolved = raw.resolve().expect("resolve");
	assert_eq!(resolved.group.name(), "Extras");
	assert_eq!(resolved.initial_area, AreaId(3));
	assert_eq!(resolved.catalog_path, Some(catalog_path));
}

#[test]
fn missing_required_config_file_fails() {
	let cli = CliArgs::parse_from(["bodymap", "-n", "-c", "/definitely/missing/bodymap.toml"]);
	assert!(load(&cli).is_err());
}
