use anyhow::Context;

use simplx_catalog::{Catalog, CatalogConfig, ProductStatus};

fn main() -> anyhow::Result<()> {
    simplx_observability::init();

    let config = CatalogConfig::from_env();
    let catalog = Catalog::load(&config).context("failed to load product catalog")?;

    for sub_brand in catalog.sub_brands() {
        tracing::info!(
            slug = %sub_brand.slug(),
            name = sub_brand.full_name(),
            products = sub_brand.products().len(),
            "sub-brand"
        );
    }

    for status in ProductStatus::ALL {
        tracing::info!(%status, products = catalog.products_by_status(status).len(), "status");
    }

    Ok(())
}
