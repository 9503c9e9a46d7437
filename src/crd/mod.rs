//! CRD parsing and indexing

pub mod index;
pub mod types;

pub use index::CrdIndex;
pub use types::{CrdNames, CrdSpec, CrdVersion, CustomResourceDefinition, VersionSchema};
