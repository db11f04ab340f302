//! Catalog configuration, read from the process environment.

use core::str::FromStr;
use std::path::PathBuf;

use simplx_core::DomainError;

/// Path to a JSON dataset that replaces the built-in one.
pub const CATALOG_PATH_ENV: &str = "SIMPLX_CATALOG_PATH";

/// Policy for blank search queries: `none` or `all`.
pub const EMPTY_QUERY_ENV: &str = "SIMPLX_EMPTY_QUERY";

/// What `search_products` returns for an empty or whitespace-only query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyQueryPolicy {
    /// A blank query matches nothing.
    #[default]
    MatchNone,
    /// A blank query matches every product, in catalog order.
    MatchAll,
}

impl FromStr for EmptyQueryPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(EmptyQueryPolicy::MatchNone),
            "all" => Ok(EmptyQueryPolicy::MatchAll),
            other => Err(DomainError::validation(format!(
                "unknown empty-query policy: {other:?} (expected \"none\" or \"all\")"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogConfig {
    /// `None` loads the built-in dataset.
    pub dataset_path: Option<PathBuf>,
    pub empty_query: EmptyQueryPolicy,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Blank values count as unset; an unrecognized policy falls back to the
    /// default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let dataset_path = lookup(CATALOG_PATH_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let empty_query = match lookup(EMPTY_QUERY_ENV).filter(|value| !value.trim().is_empty()) {
            Some(raw) => raw.parse::<EmptyQueryPolicy>().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "{EMPTY_QUERY_ENV} not recognized; matching nothing on blank queries");
                EmptyQueryPolicy::default()
            }),
            None => EmptyQueryPolicy::default(),
        };

        Self {
            dataset_path,
            empty_query,
        }
    }
}
