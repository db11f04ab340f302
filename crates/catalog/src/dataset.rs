//! Static dataset parsing and load-time validation.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use thiserror::Error;

use simplx_core::{DomainError, DomainResult, Entity};

use crate::model::SubBrand;

/// The built-in sub-brand/product dataset, embedded at compile time.
pub const BUILTIN_DATASET: &str = include_str!("../data/subbrands.json");

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid dataset: {0}")]
    Invalid(#[from] DomainError),
}

/// Parse a JSON array of sub-brands (camelCase keys).
///
/// Unknown icon names, unknown statuses and malformed ids fail here.
pub fn parse_sub_brands(json: &str) -> Result<Vec<SubBrand>, CatalogLoadError> {
    Ok(serde_json::from_str(json)?)
}

pub fn read_sub_brands(path: &Path) -> Result<Vec<SubBrand>, CatalogLoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_sub_brands(&json)
}

/// Check the dataset-wide invariants.
///
/// - sub-brand slugs and ids are unique
/// - product ids are unique within their sub-brand
/// - every sub-brand and product has a non-blank name
///
/// A product id shared by two sub-brands is allowed and only logged.
pub fn validate(sub_brands: &[SubBrand]) -> DomainResult<()> {
    check_entities(sub_brands, "")?;

    let mut slugs = HashSet::new();
    let mut owners: HashMap<&str, &str> = HashMap::new();

    for sub_brand in sub_brands {
        if !slugs.insert(sub_brand.slug().as_str()) {
            return Err(DomainError::invariant(format!(
                "duplicate sub-brand slug: {}",
                sub_brand.slug()
            )));
        }

        check_entities(sub_brand.products(), &format!("sub-brand {}: ", sub_brand.slug()))?;

        for product in sub_brand.products() {
            if let Some(first) = owners.insert(product.id().as_str(), sub_brand.slug().as_str()) {
                tracing::warn!(
                    product_id = %product.id(),
                    first_sub_brand = first,
                    sub_brand = %sub_brand.slug(),
                    "product id is shared across sub-brands"
                );
            }
        }
    }

    Ok(())
}

/// Non-blank names and sibling-unique ids.
fn check_entities<E: Entity>(entities: &[E], context: &str) -> DomainResult<()> {
    let mut seen = HashSet::new();
    for entity in entities {
        if entity.name().trim().is_empty() {
            return Err(DomainError::validation(format!(
                "{context}{} {}: name cannot be empty",
                E::KIND,
                entity.id()
            )));
        }
        if !seen.insert(entity.id()) {
            return Err(DomainError::invariant(format!(
                "{context}duplicate {} id: {}",
                E::KIND,
                entity.id()
            )));
        }
    }
    Ok(())
}
