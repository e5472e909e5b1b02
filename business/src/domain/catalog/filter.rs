use crate::domain::product::model::Product;

/// Category label that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Maps a label picked by the user; `"all"` disables the filter.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(label) => label,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => label == category,
        }
    }
}

/// Inclusive price bounds. `min` never goes below zero and never exceeds `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    pub const DEFAULT_MAX: f64 = 1000.0;

    pub fn new(min: f64, max: f64) -> Self {
        let min = min.max(0.0);
        Self {
            min,
            max: max.max(min),
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Moves the lower bound, raising the upper bound when they would cross.
    pub fn with_min(self, min: f64) -> Self {
        let min = min.max(0.0);
        Self {
            min,
            max: self.max.max(min),
        }
    }

    /// Moves the upper bound, lowering the lower bound when they would cross.
    /// A cleared (zero or negative) upper bound goes back to the default.
    pub fn with_max(self, max: f64) -> Self {
        let max = if max > 0.0 { max } else { Self::DEFAULT_MAX };
        Self {
            min: self.min.min(max),
            max,
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: Self::DEFAULT_MAX,
        }
    }
}

/// Quick price filters offered next to the bound inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricePreset {
    UnderTwentyFive,
    TwentyFiveToHundred,
    HundredToFiveHundred,
    ShowAll,
}

impl PricePreset {
    pub const ALL: [PricePreset; 4] = [
        PricePreset::UnderTwentyFive,
        PricePreset::TwentyFiveToHundred,
        PricePreset::HundredToFiveHundred,
        PricePreset::ShowAll,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PricePreset::UnderTwentyFive => "Under $25",
            PricePreset::TwentyFiveToHundred => "$25 - $100",
            PricePreset::HundredToFiveHundred => "$100 - $500",
            PricePreset::ShowAll => "Show All",
        }
    }

    pub fn range(&self) -> PriceRange {
        match self {
            PricePreset::UnderTwentyFive => PriceRange::new(0.0, 25.0),
            PricePreset::TwentyFiveToHundred => PriceRange::new(25.0, 100.0),
            PricePreset::HundredToFiveHundred => PriceRange::new(100.0, 500.0),
            PricePreset::ShowAll => PriceRange::default(),
        }
    }
}

/// What the user narrowed the catalog down to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub search_term: String,
    pub price_range: PriceRange,
}

impl FilterCriteria {
    /// All three predicates must hold.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(&product.category)
            && (self.search_term.is_empty() || product.title_contains(&self.search_term))
            && self.price_range.contains(product.price)
    }
}

/// Keeps the products matching `criteria`, in catalog order.
pub fn apply_filters(catalog: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    catalog
        .iter()
        .filter(|product| criteria.matches(product))
        .cloned()
        .collect()
}

/// `"all"` followed by every distinct category, in first-seen order.
pub fn categories(catalog: &[Product]) -> Vec<String> {
    let mut labels = vec![ALL_CATEGORIES.to_string()];
    for product in catalog {
        if !labels.iter().any(|label| label == &product.category) {
            labels.push(product.category.clone());
        }
    }
    labels
}
