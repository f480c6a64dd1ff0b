use super::{Catalog, CatalogError};

const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.toml");

/// Parse the body-map catalog bundled with the crate.
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
	Catalog::from_toml_str(BUILTIN_CATALOG)
}
