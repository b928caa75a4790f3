/// Catalog adapters for milestone component lookup
mod static_catalog;
mod yaml_catalog;

pub use static_catalog::StaticCatalog;
pub use yaml_catalog::YamlCatalog;
