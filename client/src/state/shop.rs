//! Digital product catalog, category filter and an in-memory cart.

#[cfg(test)]
#[path = "shop_test.rs"]
mod shop_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProductCategory {
    Templates,
    Guides,
    Tools,
    Courses,
    Bundles,
}

impl ProductCategory {
    pub const ALL: [Self; 5] = [Self::Templates, Self::Guides, Self::Tools, Self::Courses, Self::Bundles];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Templates => "Templates",
            Self::Guides => "Guides",
            Self::Tools => "Tools",
            Self::Courses => "Courses",
            Self::Bundles => "Bundles",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub name: &'static str,
    pub description: &'static str,
    pub price: u32,
    pub original_price: Option<u32>,
    pub rating: f32,
    pub reviews: u32,
    pub category: ProductCategory,
    pub badge: Option<&'static str>,
}

pub const FEATURED_FEATURES: [&str; 5] = [
    "Cloud Architecture Templates",
    "Security Audit Checklist",
    "API Design Guidelines",
    "DevOps Playbook",
    "MLOps Framework",
];

#[must_use]
pub fn featured_product() -> Product {
    Product {
        name: "Enterprise Architecture Bundle",
        description: "Complete collection of architecture templates, diagrams, and best practices for building scalable systems.",
        price: 299,
        original_price: Some(499),
        rating: 4.9,
        reviews: 256,
        category: ProductCategory::Bundles,
        badge: Some("Best Value"),
    }
}

#[must_use]
pub fn catalog() -> Vec<Product> {
    let item = |name, description, price, rating, reviews, category, badge| Product {
        name,
        description,
        price,
        original_price: None,
        rating,
        reviews,
        category,
        badge,
    };
    vec![
        item(
            "Cloud Architecture Guide",
            "Comprehensive guide to building scalable cloud systems.",
            49,
            4.9,
            128,
            ProductCategory::Guides,
            Some("Bestseller"),
        ),
        item(
            "AI/ML Workshop Kit",
            "Hands-on materials for machine learning workshops.",
            199,
            4.8,
            86,
            ProductCategory::Courses,
            Some("New"),
        ),
        item(
            "Security Audit Template",
            "Professional security assessment framework.",
            79,
            4.7,
            64,
            ProductCategory::Templates,
            None,
        ),
        item(
            "DevOps Playbook",
            "Best practices for modern DevOps teams.",
            59,
            4.9,
            152,
            ProductCategory::Guides,
            Some("Popular"),
        ),
        item(
            "Kubernetes Starter Pack",
            "Ready-to-use K8s manifests and configurations.",
            89,
            4.8,
            98,
            ProductCategory::Templates,
            None,
        ),
        item(
            "API Design Toolkit",
            "Tools and templates for designing RESTful APIs.",
            69,
            4.6,
            72,
            ProductCategory::Tools,
            None,
        ),
    ]
}

/// Product names in the order they were added; each at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<String>,
}

impl Cart {
    /// Add a product. Returns `false` when it is already in the cart.
    pub fn add(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.items.push(name.to_owned());
        true
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShopState {
    pub products: Vec<Product>,
    /// `None` shows every category.
    pub filter: Option<ProductCategory>,
    pub cart: Cart,
}

impl Default for ShopState {
    fn default() -> Self {
        Self { products: catalog(), filter: None, cart: Cart::default() }
    }
}

impl ShopState {
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| self.filter.is_none_or(|category| product.category == category))
            .collect()
    }
}
