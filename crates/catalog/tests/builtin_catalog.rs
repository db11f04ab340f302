use simplx_catalog::{Catalog, EmptyQueryPolicy, ListingFilter, Product, ProductStatus, StatusFilter};

fn catalog() -> Catalog {
    Catalog::builtin().expect("built-in dataset should load")
}

fn names(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.name().to_string()).collect()
}

#[test]
fn every_product_round_trips_through_lookup() {
    let catalog = catalog();
    for sub_brand in catalog.sub_brands() {
        for product in sub_brand.products() {
            assert_eq!(
                catalog.product(sub_brand.slug().as_str(), product.id().as_str()),
                Some(product)
            );
        }
    }
}

#[test]
fn all_products_flattens_in_stable_order() {
    let catalog = catalog();
    let expected: usize = catalog.sub_brands().iter().map(|sb| sb.products().len()).sum();

    let first = catalog.all_products();
    assert_eq!(first.len(), expected);
    assert_eq!(first.len(), 18);
    assert_eq!(first, catalog.all_products());
    assert_eq!(first[0].id(), "ai-chatbot");
    assert_eq!(first[17].id(), "integration-hub");
}

#[test]
fn unknown_sub_brand_is_absent() {
    let catalog = catalog();
    assert!(catalog.sub_brand("nonexistent").is_none());
    assert!(catalog.products_by_sub_brand("nonexistent").is_empty());
}

#[test]
fn search_finds_chatbot_only() {
    let catalog = catalog();
    let hits = catalog.search_products("chatbot");
    assert_eq!(names(&hits), vec!["AI Chatbot Pro"]);
}

#[test]
fn search_ignores_case() {
    let catalog = catalog();
    assert_eq!(catalog.search_products("CHATBOT"), catalog.search_products("chatbot"));
    assert_eq!(catalog.search_products("Real-Time"), catalog.search_products("real-time"));
}

#[test]
fn search_covers_features_and_categories() {
    let catalog = catalog();
    // "NLP" is the category of the NLP suite only.
    assert_eq!(names(&catalog.search_products("nlp")), vec!["NLP Processing Suite"]);

    let workflow: Vec<String> = catalog
        .search_products("workflow")
        .iter()
        .map(|p| p.id().to_string())
        .collect();
    assert_eq!(workflow, vec!["workflow-automation", "smart-workflows"]);
}

#[test]
fn blank_search_matches_nothing_unless_configured() {
    let catalog = catalog();
    assert!(catalog.search_products("").is_empty());
    assert!(catalog.search_products("   ").is_empty());

    let catalog = catalog.with_empty_query_policy(EmptyQueryPolicy::MatchAll);
    assert_eq!(catalog.search_products("").len(), 18);
}

#[test]
fn category_filter_within_cx() {
    let catalog = catalog();
    assert_eq!(
        names(&catalog.products_by_category("cx", "Customer Support")),
        vec!["AI Chatbot Pro"]
    );
    assert!(catalog.products_by_category("cx", "NoSuchCategory").is_empty());
}

#[test]
fn queries_are_idempotent() {
    let catalog = catalog();
    assert_eq!(catalog.sub_brand("ai"), catalog.sub_brand("ai"));
    assert_eq!(catalog.product("data", "data-discovery"), catalog.product("data", "data-discovery"));
    assert_eq!(catalog.search_products("analytics"), catalog.search_products("analytics"));
    assert_eq!(
        catalog.products_by_category("ops", "Monitoring"),
        catalog.products_by_category("ops", "Monitoring")
    );
}

#[test]
fn security_products_belong_to_simplx_security() {
    let catalog = catalog();
    let security = catalog.sub_brand("security").expect("security sub-brand");
    assert_eq!(security.full_name(), "Simplx Security");

    let products = catalog.products_by_sub_brand("security");
    assert_eq!(products.len(), 3);
    for product in products {
        assert!(security.product(product.id().as_str()).is_some());
        assert!(ProductStatus::ALL.contains(&product.status()));
        assert_eq!(
            catalog.sub_brand_of(product.id().as_str()).map(|sb| sb.slug().as_str()),
            Some("security")
        );
    }
}

#[test]
fn builtin_listing_groups_every_sub_brand() {
    let catalog = catalog();
    let listing = catalog.listing(&ListingFilter::status(StatusFilter::Only(ProductStatus::Available)));
    assert_eq!(listing.len(), 6);
    assert!(catalog.listing(&ListingFilter::status(StatusFilter::Only(ProductStatus::Beta))).is_empty());

    let summaries = catalog.sub_brand_summaries();
    assert_eq!(summaries[0].features, vec!["AI Chatbot Pro", "Sentiment Analyzer", "Personalization Engine"]);
}
