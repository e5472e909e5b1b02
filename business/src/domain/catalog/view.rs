use crate::domain::product::model::Product;

use super::filter::{self, CategoryFilter, FilterCriteria, PriceRange, PricePreset};
use super::pagination::{self, PageMarker, PageState, ShowingRange};

/// The catalog as the user currently sees it.
///
/// Holds the three inputs of the derivation (catalog, criteria, page) and
/// recomputes the filtered sequence whenever the catalog or the criteria
/// change. Every such change sends the user back to the first page.
#[derive(Debug, Clone)]
pub struct CatalogView {
    catalog: Vec<Product>,
    criteria: FilterCriteria,
    filtered: Vec<Product>,
    page: PageState,
}

impl CatalogView {
    pub fn new(page_size: usize) -> Self {
        Self {
            catalog: Vec::new(),
            criteria: FilterCriteria::default(),
            filtered: Vec::new(),
            page: PageState::new(page_size),
        }
    }

    pub fn replace_catalog(&mut self, products: Vec<Product>) {
        self.catalog = products;
        self.refilter();
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_category(&mut self, label: impl Into<String>) {
        self.criteria.category = CategoryFilter::from_label(label);
        self.refilter();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
        self.refilter();
    }

    pub fn set_min_price(&mut self, min: f64) {
        self.criteria.price_range = self.criteria.price_range.with_min(min);
        self.refilter();
    }

    pub fn set_max_price(&mut self, max: f64) {
        self.criteria.price_range = self.criteria.price_range.with_max(max);
        self.refilter();
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.criteria.price_range = range;
        self.refilter();
    }

    pub fn apply_price_preset(&mut self, preset: PricePreset) {
        self.set_price_range(preset.range());
    }

    fn refilter(&mut self) {
        self.filtered = filter::apply_filters(&self.catalog, &self.criteria);
        self.page.reset();
    }

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page()
    }

    pub fn page_size(&self) -> usize {
        self.page.page_size()
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered.len(), self.page.page_size())
    }

    /// Returns the page actually landed on after clamping.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        let total = self.total_pages();
        self.page.go_to(page, total)
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.current_page() + 1)
    }

    pub fn previous_page(&mut self) -> usize {
        self.go_to_page(self.current_page().saturating_sub(1))
    }

    pub fn page_items(&self) -> &[Product] {
        pagination::page_slice(&self.filtered, &self.page)
    }

    pub fn page_numbers(&self) -> Vec<PageMarker> {
        pagination::page_numbers(self.current_page(), self.total_pages())
    }

    pub fn showing_range(&self) -> Option<ShowingRange> {
        pagination::showing_range(&self.page, self.filtered.len())
    }

    /// Pagination controls are only worth rendering with more than one page.
    pub fn shows_pagination(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn categories(&self) -> Vec<String> {
        filter::categories(&self.catalog)
    }

    /// Looks a product up in the whole catalog, ignoring the filters.
    pub fn find(&self, id: u64) -> Option<&Product> {
        self.catalog.iter().find(|product| product.id == id)
    }
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new(pagination::DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::Rating;

    fn product(id: u64, category: &str, price: f64) -> Product {
        Product {
            id,
            title: format!("Item {}", id),
            price,
            description: "A product in the test catalog".to_string(),
            category: category.to_string(),
            image: format!("https://example.com/{}.png", id),
            rating: Rating {
                rate: 3.5,
                count: 7,
            },
        }
    }

    /// Twenty products, five of them electronics.
    fn twenty_products() -> Vec<Product> {
        (1..=20)
            .map(|id| {
                let category = if id % 4 == 0 {
                    "electronics"
                } else {
                    "jewelery"
                };
                product(id, category, 10.0 * id as f64)
            })
            .collect()
    }

    fn view_with_catalog() -> CatalogView {
        let mut view = CatalogView::new(8);
        view.replace_catalog(twenty_products());
        view
    }

    #[test]
    fn should_paginate_full_catalog() {
        let view = view_with_catalog();

        assert_eq!(view.total_pages(), 3);
        assert_eq!(view.page_items().len(), 8);
        assert!(view.shows_pagination());
    }

    #[test]
    fn should_fit_single_category_on_one_page() {
        let mut view = view_with_catalog();

        view.set_category("electronics");

        assert_eq!(view.total_pages(), 1);
        assert_eq!(view.page_items().len(), 5);
        assert!(!view.shows_pagination());
    }

    #[test]
    fn should_reset_to_first_page_when_any_filter_changes() {
        let mut view = view_with_catalog();

        view.go_to_page(3);
        view.set_category("all");
        assert_eq!(view.current_page(), 1);

        view.go_to_page(2);
        view.set_search_term("item");
        assert_eq!(view.current_page(), 1);

        view.go_to_page(2);
        view.set_min_price(0.0);
        assert_eq!(view.current_page(), 1);

        view.go_to_page(2);
        view.set_max_price(1000.0);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn should_reset_to_first_page_when_catalog_replaced() {
        let mut view = view_with_catalog();
        view.go_to_page(3);

        view.replace_catalog(twenty_products());

        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn should_not_move_past_last_page() {
        let mut view = view_with_catalog();

        view.go_to_page(3);
        assert_eq!(view.next_page(), 3);
        assert_eq!(view.page_items().len(), 4);
    }

    #[test]
    fn should_not_move_before_first_page() {
        let mut view = view_with_catalog();

        assert_eq!(view.previous_page(), 1);
    }

    #[test]
    fn should_stay_on_first_page_when_nothing_matches() {
        let mut view = view_with_catalog();

        view.set_search_term("nothing like this");

        assert_eq!(view.total_pages(), 0);
        assert_eq!(view.go_to_page(4), 1);
        assert!(view.page_items().is_empty());
        assert!(view.showing_range().is_none());
    }

    #[test]
    fn should_narrow_by_price_bounds() {
        let mut view = view_with_catalog();

        view.set_min_price(50.0);
        view.set_max_price(80.0);

        let ids: Vec<u64> = view.filtered().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 6, 7, 8]);
    }

    #[test]
    fn should_replace_both_price_bounds_at_once() {
        let mut view = view_with_catalog();
        view.go_to_page(2);

        view.set_price_range(PriceRange::new(180.0, 200.0));

        assert_eq!(view.current_page(), 1);
        assert_eq!(view.filtered().len(), 3);
    }

    #[test]
    fn should_reset_page_when_price_preset_applied() {
        // Arrange
        let mut view = view_with_catalog();
        view.go_to_page(2);

        // Act
        view.apply_price_preset(PricePreset::HundredToFiveHundred);

        // Assert
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.criteria().price_range, PriceRange::new(100.0, 500.0));
        assert_eq!(view.filtered().len(), 11);
    }

    #[test]
    fn should_restore_default_max_when_max_cleared() {
        let mut view = view_with_catalog();
        view.set_max_price(40.0);

        view.set_max_price(0.0);

        assert_eq!(view.criteria().price_range, PriceRange::default());
        assert_eq!(view.filtered().len(), 20);
    }

    #[test]
    fn should_find_product_outside_active_filters() {
        let mut view = view_with_catalog();
        view.set_category("electronics");

        assert_eq!(view.find(3).map(|p| p.id), Some(3));
        assert!(view.find(99).is_none());
    }

    #[test]
    fn should_expose_categories_of_catalog() {
        let view = view_with_catalog();

        assert_eq!(
            view.categories(),
            vec![
                "all".to_string(),
                "jewelery".to_string(),
                "electronics".to_string()
            ]
        );
    }
}
