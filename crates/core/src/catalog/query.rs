//! Product listing queries.

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rust_decimal::Decimal;

use crate::catalog::{
    errors::CatalogError,
    models::{Category, Product},
};

/// Inclusive price bounds. A range without a maximum is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    /// Lowest admitted price
    pub min: Decimal,

    /// Highest admitted price, if any
    pub max: Option<Decimal>,
}

impl PriceRange {
    /// Whether `price` falls within the range.
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }
}

/// Parses the storefront's `"min-max"` filter values, e.g. `"50-100"` or `"200-"`.
///
/// An empty or zero maximum means no upper bound, and an empty minimum means zero.
impl FromStr for PriceRange {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CatalogError::InvalidPriceRange(s.to_string());

        let (min, max) = s.trim().split_once('-').ok_or_else(invalid)?;

        let bound = |value: &str| -> Result<Decimal, CatalogError> {
            let value = value.trim();

            if value.is_empty() {
                return Ok(Decimal::ZERO);
            }

            value.parse::<Decimal>().map_err(|_err| invalid())
        };

        let min = bound(min)?;
        let max = Some(bound(max)?).filter(|max| !max.is_zero());

        if max.is_some_and(|max| max < min) {
            return Err(invalid());
        }

        Ok(Self { min, max })
    }
}

impl Display for PriceRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.max {
            Some(max) => write!(f, "{}-{max}", self.min),
            None => write!(f, "{}-", self.min),
        }
    }
}

/// Listing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Alphabetical by name
    #[default]
    Name,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// Most recently listed first
    Newest,
}

impl SortOrder {
    /// Filter value used by the storefront.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Name => "name",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
            SortOrder::Newest => "newest",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        let ordering = match self {
            SortOrder::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortOrder::PriceAsc => a.price.cmp(&b.price),
            SortOrder::PriceDesc => b.price.cmp(&a.price),
            SortOrder::Newest => b.created_at.cmp(&a.created_at),
        };

        ordering.then_with(|| a.id.cmp(&b.id))
    }
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(SortOrder::Name),
            "price-asc" => Ok(SortOrder::PriceAsc),
            "price-desc" => Ok(SortOrder::PriceDesc),
            "newest" => Ok(SortOrder::Newest),
            other => Err(CatalogError::UnknownSortOrder(other.to_string())),
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Filters and ordering for a product listing. Unset filters admit everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Case-insensitive substring of the product name
    pub search: Option<String>,

    /// Exact category
    pub category: Option<Category>,

    /// Price bounds
    pub price: Option<PriceRange>,

    /// Colour the product must come in
    pub color: Option<String>,

    /// Size the product must come in
    pub size: Option<String>,

    /// Listing order
    pub sort: SortOrder,
}

impl ProductQuery {
    /// A query matching every product, sorted by name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to names containing `search`.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Restrict to one category.
    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Restrict to a price range.
    #[must_use]
    pub fn price(mut self, range: PriceRange) -> Self {
        self.price = Some(range);
        self
    }

    /// Restrict to products offered in `color`.
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Restrict to products offered in `size`.
    #[must_use]
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Set the listing order.
    #[must_use]
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Whether `product` passes every filter.
    pub fn matches(&self, product: &Product) -> bool {
        let search = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|search| !search.is_empty())
            .is_none_or(|search| {
                product
                    .name
                    .to_lowercase()
                    .contains(&search.to_lowercase())
            });

        search
            && self
                .category
                .is_none_or(|category| product.category == category)
            && self.price.is_none_or(|range| range.contains(product.price))
            && self
                .color
                .as_deref()
                .is_none_or(|color| product.has_color(color))
            && self
                .size
                .as_deref()
                .is_none_or(|size| product.has_size(size))
    }

    /// Filter and sort `products`.
    pub fn apply<'a>(&self, products: impl IntoIterator<Item = &'a Product>) -> Vec<&'a Product> {
        let mut matched: Vec<&Product> = products
            .into_iter()
            .filter(|product| self.matches(product))
            .collect();

        matched.sort_by(|a, b| self.sort.compare(a, b));

        matched
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::catalog::models::ProductId;

    use super::*;

    fn product(id: &str, name: &str, price: i64, category: Category, listed: i64) -> Product {
        Product {
            id: ProductId::from(id),
            name: name.to_string(),
            description: String::new(),
            price: Decimal::from(price),
            category,
            image_url: String::new(),
            sizes: vec!["S".to_string(), "M".to_string()],
            colors: vec!["Black".to_string()],
            created_at: Timestamp::from_second(listed).unwrap_or(Timestamp::UNIX_EPOCH),
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("p1", "Silk Slip Dress", 180, Category::Dresses, 100),
            product("p2", "boxy linen tee", 45, Category::Tops, 300),
            product("p3", "Wide Leg Trousers", 95, Category::Bottoms, 200),
            product("p4", "Leather Tote", 240, Category::Bags, 400),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn price_range_parses_bounded_and_open() -> TestResult {
        let bounded: PriceRange = "50-100".parse()?;
        let open: PriceRange = "200-".parse()?;

        assert_eq!(bounded.min, Decimal::from(50));
        assert_eq!(bounded.max, Some(Decimal::from(100)));
        assert_eq!(open.max, None);
        assert_eq!(open.to_string(), "200-");

        Ok(())
    }

    #[test]
    fn price_range_bounds_are_inclusive() -> TestResult {
        let range: PriceRange = "0-50".parse()?;

        assert!(range.contains(Decimal::ZERO));
        assert!(range.contains(Decimal::from(50)));
        assert!(!range.contains(Decimal::new(5001, 2)));

        let open: PriceRange = "200-".parse()?;

        assert!(open.contains(Decimal::from(200)));
        assert!(open.contains(Decimal::from(10_000)));
        assert!(!open.contains(Decimal::from(199)));

        Ok(())
    }

    #[test]
    fn price_range_rejects_garbage() {
        for raw in ["", "cheap", "10-abc", "100-50"] {
            assert!(
                raw.parse::<PriceRange>().is_err(),
                "{raw:?} should not parse"
            );
        }
    }

    #[test]
    fn sort_order_round_trips_filter_values() -> TestResult {
        for order in [
            SortOrder::Name,
            SortOrder::PriceAsc,
            SortOrder::PriceDesc,
            SortOrder::Newest,
        ] {
            assert_eq!(order.to_string().parse::<SortOrder>()?, order);
        }

        assert!("popular".parse::<SortOrder>().is_err());

        Ok(())
    }

    #[test]
    fn default_query_lists_everything_by_name() {
        let products = catalog();

        let listed = ProductQuery::new().apply(&products);

        assert_eq!(ids(&listed), ["p2", "p4", "p1", "p3"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let products = catalog();

        let listed = ProductQuery::new().search("LINEN").apply(&products);

        assert_eq!(ids(&listed), ["p2"]);
    }

    #[test]
    fn blank_search_is_ignored() {
        let products = catalog();

        let listed = ProductQuery::new().search("  ").apply(&products);

        assert_eq!(listed.len(), 4);
    }

    #[test]
    fn filters_combine() -> TestResult {
        let products = catalog();

        let listed = ProductQuery::new()
            .price("50-200".parse()?)
            .sort(SortOrder::PriceDesc)
            .apply(&products);

        assert_eq!(ids(&listed), ["p1", "p3"]);

        let listed = ProductQuery::new()
            .category(Category::Bags)
            .price("0-100".parse()?)
            .apply(&products);

        assert!(listed.is_empty());

        Ok(())
    }

    #[test]
    fn variant_filters_check_membership() {
        let products = catalog();

        assert_eq!(ProductQuery::new().size("M").apply(&products).len(), 4);
        assert!(ProductQuery::new().size("XL").apply(&products).is_empty());
        assert!(ProductQuery::new().color("Red").apply(&products).is_empty());
    }

    #[test]
    fn newest_sorts_by_listing_time() {
        let products = catalog();

        let listed = ProductQuery::new().sort(SortOrder::Newest).apply(&products);

        assert_eq!(ids(&listed), ["p4", "p2", "p3", "p1"]);
    }
}
