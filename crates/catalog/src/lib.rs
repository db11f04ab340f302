//! Simplx product catalog.
//!
//! Holds the static sub-brand/product dataset and answers read-only queries
//! over it (lookup by slug, category and status filters, substring search,
//! grouped listings). Pure domain logic: the only IO is reading an optional
//! dataset file at load time.

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod listing;
pub mod model;

#[cfg(test)]
mod fixtures;

pub use catalog::Catalog;
pub use config::{CatalogConfig, EmptyQueryPolicy};
pub use dataset::{BUILTIN_DATASET, CatalogLoadError};
pub use listing::{ListingFilter, StatusFilter, SubBrandListing, SubBrandSummary};
pub use model::{IconName, Pricing, Product, ProductStatus, SubBrand};
