//! Category filter for the shop grid.

use crate::catalog::{Category, Product};

/// The single active filter of the shop section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter buttons in display order.
    pub const ALL: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Cleanser),
        CategoryFilter::Only(Category::Serum),
        CategoryFilter::Only(Category::Moisturizer),
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }

    pub fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == category,
        }
    }

    /// Products passing the filter, in catalog order.
    pub fn apply(self, products: &[Product]) -> Vec<Product> {
        products.iter().filter(|p| self.matches(p)).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PRODUCTS;

    #[test]
    fn test_default_is_all() {
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }

    #[test]
    fn test_filter_cardinalities() {
        let counts: Vec<(&str, usize)> = CategoryFilter::ALL
            .iter()
            .map(|f| (f.label(), f.apply(&PRODUCTS).len()))
            .collect();
        assert_eq!(
            counts,
            vec![("all", 7), ("cleanser", 2), ("serum", 2), ("moisturizer", 3)]
        );
    }

    #[test]
    fn test_filter_matches_definition() {
        for filter in CategoryFilter::ALL {
            let expected: Vec<u32> = PRODUCTS
                .iter()
                .filter(|p| match filter {
                    CategoryFilter::All => true,
                    CategoryFilter::Only(c) => p.category == c,
                })
                .map(|p| p.id)
                .collect();
            let actual: Vec<u32> = filter.apply(&PRODUCTS).iter().map(|p| p.id).collect();
            assert_eq!(actual, expected, "filter {}", filter.label());
        }
    }

    #[test]
    fn test_no_filter_is_empty() {
        for filter in CategoryFilter::ALL {
            assert!(!filter.apply(&PRODUCTS).is_empty());
        }
    }

    #[test]
    fn test_apply_preserves_catalog_order() {
        let serums = CategoryFilter::Only(Category::Serum).apply(&PRODUCTS);
        let names: Vec<&str> = serums.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Hydrating Serum", "Vitamin C Serum"]);
    }
}
