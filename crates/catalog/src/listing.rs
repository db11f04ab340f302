//! Grouped catalog views: the filtered products listing and sub-brand summaries.

use core::str::FromStr;

use serde::Serialize;

use simplx_core::{DomainError, Slug, SubBrandId};

use crate::catalog::{Catalog, normalize_query};
use crate::model::{IconName, Product, ProductStatus, SubBrand};

/// Number of product names carried in a [`SubBrandSummary`].
pub const SUMMARY_FEATURE_COUNT: usize = 4;

/// Status selector of the products listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProductStatus),
}

impl StatusFilter {
    pub fn accepts(self, status: ProductStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    /// `all` or one of the status tokens (`available`, `beta`, `coming-soon`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

/// Products listing input. A non-blank query wins over the status filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingFilter {
    pub query: Option<String>,
    pub status: StatusFilter,
}

impl ListingFilter {
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            status: StatusFilter::All,
        }
    }

    pub fn status(status: StatusFilter) -> Self {
        Self {
            query: None,
            status,
        }
    }
}

/// A sub-brand with the subset of its products that passed a listing filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubBrandListing<'a> {
    pub sub_brand: &'a SubBrand,
    pub products: Vec<&'a Product>,
}

/// Sub-brand descriptive fields plus the names of its leading products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubBrandSummary {
    pub id: SubBrandId,
    pub name: String,
    pub full_name: String,
    pub tagline: String,
    pub description: String,
    pub gradient: String,
    pub icon_name: IconName,
    pub slug: Slug,
    pub features: Vec<String>,
}

impl From<&SubBrand> for SubBrandSummary {
    fn from(sub_brand: &SubBrand) -> Self {
        Self {
            id: sub_brand.id().clone(),
            name: sub_brand.name().to_string(),
            full_name: sub_brand.full_name().to_string(),
            tagline: sub_brand.tagline().to_string(),
            description: sub_brand.description().to_string(),
            gradient: sub_brand.gradient().to_string(),
            icon_name: sub_brand.icon_name(),
            slug: sub_brand.slug().clone(),
            features: sub_brand
                .products()
                .iter()
                .take(SUMMARY_FEATURE_COUNT)
                .map(|p| p.name().to_string())
                .collect(),
        }
    }
}

impl Catalog {
    /// Filter the catalog and group the survivors under their sub-brand.
    ///
    /// Sub-brands keep dataset order; sub-brands left without products are
    /// dropped. Matching is per (sub-brand, product) pair, so a product id
    /// reused in another sub-brand does not leak into this one.
    pub fn listing(&self, filter: &ListingFilter) -> Vec<SubBrandListing<'_>> {
        let needle = filter.query.as_deref().and_then(normalize_query);

        self.sub_brands()
            .iter()
            .filter_map(|sub_brand| {
                let products: Vec<&Product> = sub_brand
                    .products()
                    .iter()
                    .filter(|p| match &needle {
                        Some(needle) => p.matches_search(needle),
                        None => filter.status.accepts(p.status()),
                    })
                    .collect();

                (!products.is_empty()).then_some(SubBrandListing {
                    sub_brand,
                    products,
                })
            })
            .collect()
    }

    pub fn sub_brand_summaries(&self) -> Vec<SubBrandSummary> {
        self.sub_brands().iter().map(SubBrandSummary::from).collect()
    }
}
