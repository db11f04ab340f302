//! Read-only query surface over the sub-brand/product dataset.

use std::collections::HashMap;
use std::path::Path;

use simplx_core::{DomainResult, Slug};

use crate::config::{CatalogConfig, EmptyQueryPolicy};
use crate::dataset::{self, CatalogLoadError};
use crate::model::{Product, ProductStatus, SubBrand};

/// Immutable product catalog.
///
/// Built once (validated on construction) and then only read. Share it across
/// threads behind an `Arc`; every query takes `&self`.
///
/// Lookups that find nothing return `None` or an empty list, never an error.
#[derive(Debug, Clone)]
pub struct Catalog {
    sub_brands: Vec<SubBrand>,
    by_slug: HashMap<Slug, usize>,
    empty_query: EmptyQueryPolicy,
}

impl Catalog {
    /// Validate `sub_brands` and index them by slug.
    pub fn new(sub_brands: Vec<SubBrand>) -> DomainResult<Self> {
        dataset::validate(&sub_brands)?;

        let by_slug = sub_brands
            .iter()
            .enumerate()
            .map(|(idx, sub_brand)| (sub_brand.slug().clone(), idx))
            .collect();

        Ok(Self {
            sub_brands,
            by_slug,
            empty_query: EmptyQueryPolicy::default(),
        })
    }

    pub fn with_empty_query_policy(mut self, policy: EmptyQueryPolicy) -> Self {
        self.empty_query = policy;
        self
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self, CatalogLoadError> {
        Self::from_json(dataset::BUILTIN_DATASET)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogLoadError> {
        Ok(Self::new(dataset::parse_sub_brands(json)?)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogLoadError> {
        Ok(Self::new(dataset::read_sub_brands(path)?)?)
    }

    /// Load the dataset named by `config` (built-in when no path is set).
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogLoadError> {
        let (catalog, source) = match &config.dataset_path {
            Some(path) => (Self::from_path(path)?, path.display().to_string()),
            None => (Self::builtin()?, "builtin".to_string()),
        };
        let catalog = catalog.with_empty_query_policy(config.empty_query);

        tracing::info!(
            source = %source,
            sub_brands = catalog.sub_brands.len(),
            products = catalog.product_count(),
            empty_query = ?catalog.empty_query,
            "catalog loaded"
        );

        Ok(catalog)
    }

    pub fn empty_query_policy(&self) -> EmptyQueryPolicy {
        self.empty_query
    }

    /// All sub-brands, in dataset order.
    pub fn sub_brands(&self) -> &[SubBrand] {
        &self.sub_brands
    }

    pub fn product_count(&self) -> usize {
        self.sub_brands.iter().map(|sb| sb.products().len()).sum()
    }

    /// Every product, sub-brand order first, then product order.
    pub fn all_products(&self) -> Vec<&Product> {
        self.products_iter().collect()
    }

    /// Products of the sub-brand with this exact (case-sensitive) slug.
    pub fn products_by_sub_brand(&self, slug: &str) -> &[Product] {
        self.sub_brand(slug).map(SubBrand::products).unwrap_or(&[])
    }

    pub fn product(&self, slug: &str, product_id: &str) -> Option<&Product> {
        self.sub_brand(slug)?.product(product_id)
    }

    pub fn sub_brand(&self, slug: &str) -> Option<&SubBrand> {
        self.by_slug.get(slug).map(|&idx| &self.sub_brands[idx])
    }

    /// Products of one sub-brand whose category equals `category` exactly.
    pub fn products_by_category(&self, slug: &str, category: &str) -> Vec<&Product> {
        self.sub_brand(slug)
            .map(|sb| sb.products_in_category(category))
            .unwrap_or_default()
    }

    /// Case-insensitive substring search, in catalog order (no ranking).
    ///
    /// The query is trimmed first; a blank query follows the configured
    /// [`EmptyQueryPolicy`].
    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        match normalize_query(query) {
            Some(needle) => self
                .products_iter()
                .filter(|p| p.matches_search(&needle))
                .collect(),
            None => match self.empty_query {
                EmptyQueryPolicy::MatchNone => Vec::new(),
                EmptyQueryPolicy::MatchAll => self.all_products(),
            },
        }
    }

    pub fn products_by_status(&self, status: ProductStatus) -> Vec<&Product> {
        self.products_iter()
            .filter(|p| p.status() == status)
            .collect()
    }

    /// First sub-brand (dataset order) owning a product with this id.
    pub fn sub_brand_of(&self, product_id: &str) -> Option<&SubBrand> {
        self.sub_brands
            .iter()
            .find(|sb| sb.product(product_id).is_some())
    }

    fn products_iter(&self) -> impl Iterator<Item = &Product> {
        self.sub_brands.iter().flat_map(|sb| sb.products())
    }
}

/// Trimmed, lowercased query; `None` when blank.
pub(crate) fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
