use core::str::FromStr;

use serde::{Deserialize, Serialize};

use simplx_core::{DomainError, Entity, ProductId, Slug, SubBrandId};

/// Marketing lifecycle label of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductStatus {
    Available,
    Beta,
    ComingSoon,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [Self::Available, Self::Beta, Self::ComingSoon];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductStatus::Available => "available",
            ProductStatus::Beta => "beta",
            ProductStatus::ComingSoon => "coming-soon",
        }
    }
}

impl core::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown product status: {s:?}")))
    }
}

/// Key into the presentation layer's icon registry.
///
/// The catalog stores and returns this value but never resolves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconName {
    Users,
    BarChart3,
    Cog,
    Brain,
    Shield,
    Zap,
    MessageSquare,
    Eye,
    Target,
    TrendingUp,
    Search,
    UserCheck,
    Database,
    PieChart,
    Workflow,
    Cpu,
    Lock,
    Activity,
    Bot,
    FileText,
    Globe,
    Smartphone,
    AlertTriangle,
    Network,
    Layers,
    Code,
}

impl IconName {
    pub fn as_str(self) -> &'static str {
        match self {
            IconName::Users => "Users",
            IconName::BarChart3 => "BarChart3",
            IconName::Cog => "Cog",
            IconName::Brain => "Brain",
            IconName::Shield => "Shield",
            IconName::Zap => "Zap",
            IconName::MessageSquare => "MessageSquare",
            IconName::Eye => "Eye",
            IconName::Target => "Target",
            IconName::TrendingUp => "TrendingUp",
            IconName::Search => "Search",
            IconName::UserCheck => "UserCheck",
            IconName::Database => "Database",
            IconName::PieChart => "PieChart",
            IconName::Workflow => "Workflow",
            IconName::Cpu => "Cpu",
            IconName::Lock => "Lock",
            IconName::Activity => "Activity",
            IconName::Bot => "Bot",
            IconName::FileText => "FileText",
            IconName::Globe => "Globe",
            IconName::Smartphone => "Smartphone",
            IconName::AlertTriangle => "AlertTriangle",
            IconName::Network => "Network",
            IconName::Layers => "Layers",
            IconName::Code => "Code",
        }
    }
}

impl core::fmt::Display for IconName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pricing summary shown on product pages (display strings only, no amounts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Pricing {
    starting_price: String,
    pricing_model: String,
    features: Vec<String>,
}

impl Pricing {
    pub fn starting_price(&self) -> &str {
        &self.starting_price
    }

    pub fn pricing_model(&self) -> &str {
        &self.pricing_model
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }
}

/// A sellable offering owned by exactly one sub-brand.
///
/// Immutable once loaded: fields are private and only readable via accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Product {
    id: ProductId,
    name: String,
    tagline: String,
    description: String,
    long_description: String,
    features: Vec<String>,
    benefits: Vec<String>,
    use_cases: Vec<String>,
    pricing: Pricing,
    icon_name: IconName,
    gradient: String,
    category: String,
    status: ProductStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    documentation: Option<String>,
}

impl Product {
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn long_description(&self) -> &str {
        &self.long_description
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn benefits(&self) -> &[String] {
        &self.benefits
    }

    pub fn use_cases(&self) -> &[String] {
        &self.use_cases
    }

    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    pub fn icon_name(&self) -> IconName {
        self.icon_name
    }

    pub fn gradient(&self) -> &str {
        &self.gradient
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn demo_url(&self) -> Option<&str> {
        self.demo_url.as_deref()
    }

    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    /// Substring match over name, tagline, description, category and features.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        let hit = |field: &str| field.to_lowercase().contains(needle);

        hit(&self.name)
            || hit(&self.tagline)
            || hit(&self.description)
            || hit(&self.category)
            || self.features.iter().any(|feature| hit(feature))
    }
}

impl Entity for Product {
    const KIND: &'static str = "product";

    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A business unit grouping an ordered list of products, addressed by slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SubBrand {
    id: SubBrandId,
    name: String,
    full_name: String,
    tagline: String,
    description: String,
    gradient: String,
    icon_name: IconName,
    slug: Slug,
    products: Vec<Product>,
}

impl SubBrand {
    pub fn id(&self) -> &SubBrandId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn gradient(&self) -> &str {
        &self.gradient
    }

    pub fn icon_name(&self) -> IconName {
        self.icon_name
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Product with the given id, if this sub-brand owns one.
    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *product_id)
    }

    /// Products whose category equals `category` exactly.
    pub fn products_in_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }
}

impl Entity for SubBrand {
    const KIND: &'static str = "sub-brand";

    type Id = SubBrandId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
