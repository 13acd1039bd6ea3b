pub mod json_catalog;
pub mod mock;

mod paging;

pub use json_catalog::{CatalogFile, JsonCatalog, CATALOG_FORMAT_VERSION};
pub use mock::{generate_catalog, MockCatalog};
