//! Catalog access: the provider port and its adapters.
//!
//! This module provides:
//! - [`CatalogProvider`]: the async port the core consumes
//! - [`HttpCatalog`]: REST adapter for the live creature catalog
//! - [`InMemoryCatalog`]: fixture-backed adapter for tests and offline use

pub mod http;
pub mod memory;
pub mod provider;

pub use http::HttpCatalog;
pub use memory::InMemoryCatalog;
pub use provider::CatalogProvider;
