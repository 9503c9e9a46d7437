//! Static site layer: route handling and file generation

pub mod generator;
pub mod routes;

pub use generator::{SiteGenerator, SiteResult};
pub use routes::{schema_endpoint, static_paths, SchemaPath, SiteResponse};
