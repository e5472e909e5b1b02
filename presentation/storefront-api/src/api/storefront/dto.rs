use poem_openapi::{Enum, Object};

use business::domain::catalog::filter::PricePreset;
use business::domain::catalog::pagination::PageMarker;
use business::domain::catalog::view::CatalogView;
use business::domain::product::model::Product;
use business::domain::storefront::model::{LoadState, Storefront};

#[derive(Debug, Clone, Object)]
pub struct RatingResponse {
    /// Average score between 0 and 5
    pub rate: f64,
    /// Number of ratings
    pub count: u32,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    /// Image URL
    pub image: String,
    pub rating: RatingResponse,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            description: product.description.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            rating: RatingResponse {
                rate: product.rating.rate,
                count: product.rating.count,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Enum)]
pub enum LoadStatusDto {
    #[oai(rename = "loading")]
    Loading,
    #[oai(rename = "ready")]
    Ready,
    #[oai(rename = "failed")]
    Failed,
}

impl From<&LoadState> for LoadStatusDto {
    fn from(state: &LoadState) -> Self {
        match state {
            LoadState::Loading => LoadStatusDto::Loading,
            LoadState::Ready => LoadStatusDto::Ready,
            LoadState::Failed(_) => LoadStatusDto::Failed,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct FiltersResponse {
    /// Selected category, or "all"
    pub category: String,
    pub search_term: String,
    pub min_price: f64,
    pub max_price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Enum)]
pub enum PricePresetDto {
    #[oai(rename = "under_25")]
    UnderTwentyFive,
    #[oai(rename = "25_to_100")]
    TwentyFiveToHundred,
    #[oai(rename = "100_to_500")]
    HundredToFiveHundred,
    #[oai(rename = "show_all")]
    ShowAll,
}

impl From<PricePreset> for PricePresetDto {
    fn from(preset: PricePreset) -> Self {
        match preset {
            PricePreset::UnderTwentyFive => PricePresetDto::UnderTwentyFive,
            PricePreset::TwentyFiveToHundred => PricePresetDto::TwentyFiveToHundred,
            PricePreset::HundredToFiveHundred => PricePresetDto::HundredToFiveHundred,
            PricePreset::ShowAll => PricePresetDto::ShowAll,
        }
    }
}

impl From<PricePresetDto> for PricePreset {
    fn from(dto: PricePresetDto) -> Self {
        match dto {
            PricePresetDto::UnderTwentyFive => PricePreset::UnderTwentyFive,
            PricePresetDto::TwentyFiveToHundred => PricePreset::TwentyFiveToHundred,
            PricePresetDto::HundredToFiveHundred => PricePreset::HundredToFiveHundred,
            PricePresetDto::ShowAll => PricePreset::ShowAll,
        }
    }
}

/// One quick price filter
#[derive(Debug, Clone, Object)]
pub struct PricePresetResponse {
    pub preset: PricePresetDto,
    pub label: String,
    pub min_price: f64,
    pub max_price: f64,
}

impl From<PricePreset> for PricePresetResponse {
    fn from(preset: PricePreset) -> Self {
        let range = preset.range();
        Self {
            preset: preset.into(),
            label: preset.label().to_string(),
            min_price: range.min(),
            max_price: range.max(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ApplyPricePresetRequest {
    pub preset: PricePresetDto,
}

#[derive(Debug, Clone, PartialEq, Object)]
pub struct PageMarkerResponse {
    /// True for a collapsed run of pages
    pub ellipsis: bool,
    #[oai(skip_serializing_if_is_none)]
    pub page: Option<u64>,
}

impl From<PageMarker> for PageMarkerResponse {
    fn from(marker: PageMarker) -> Self {
        match marker {
            PageMarker::Page(page) => Self {
                ellipsis: false,
                page: Some(page as u64),
            },
            PageMarker::Ellipsis => Self {
                ellipsis: true,
                page: None,
            },
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PaginationResponse {
    pub current_page: u64,
    pub total_pages: u64,
    pub page_size: u64,
    pub page_numbers: Vec<PageMarkerResponse>,
    /// First product shown, 1-based
    pub showing_from: u64,
    /// Last product shown, inclusive
    pub showing_to: u64,
    pub total_products: u64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PaginationResponse {
    /// `None` when a single page holds every match.
    pub fn from_view(view: &CatalogView) -> Option<Self> {
        if !view.shows_pagination() {
            return None;
        }
        let range = view.showing_range()?;
        Some(Self {
            current_page: view.current_page() as u64,
            total_pages: view.total_pages() as u64,
            page_size: view.page_size() as u64,
            page_numbers: view.page_numbers().into_iter().map(Into::into).collect(),
            showing_from: range.from as u64,
            showing_to: range.to as u64,
            total_products: range.total as u64,
            has_previous: view.current_page() > 1,
            has_next: view.current_page() < view.total_pages(),
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct StorefrontResponse {
    pub status: LoadStatusDto,
    /// Generic failure message when the catalog could not be fetched
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
    /// "all" followed by every catalog category
    pub categories: Vec<String>,
    pub filters: FiltersResponse,
    /// Quick price filters, each replacing both bounds
    pub price_presets: Vec<PricePresetResponse>,
    /// Products of the current page
    pub products: Vec<ProductResponse>,
    /// Absent when no pagination controls are needed
    #[oai(skip_serializing_if_is_none)]
    pub pagination: Option<PaginationResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub selected_product: Option<ProductResponse>,
    pub cart_items: u32,
}

impl StorefrontResponse {
    pub fn from_storefront(storefront: &Storefront) -> Self {
        let view = storefront.view();
        let criteria = view.criteria();
        Self {
            status: storefront.load_state().into(),
            error: storefront.error_message().map(str::to_string),
            categories: view.categories(),
            filters: FiltersResponse {
                category: criteria.category.as_str().to_string(),
                search_term: criteria.search_term.clone(),
                min_price: criteria.price_range.min(),
                max_price: criteria.price_range.max(),
            },
            price_presets: PricePreset::ALL.into_iter().map(Into::into).collect(),
            products: view.page_items().iter().map(ProductResponse::from).collect(),
            pagination: PaginationResponse::from_view(view),
            selected_product: storefront.selected_product().map(ProductResponse::from),
            cart_items: storefront.cart().item_count(),
        }
    }
}

/// Any subset of the filter fields; absent fields are left as they are
#[derive(Debug, Clone, Default, Object)]
pub struct UpdateFiltersRequest {
    /// Category label, or "all"
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub search_term: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub min_price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub max_price: Option<f64>,
}

impl UpdateFiltersRequest {
    /// Each provided field is applied in turn and sends the view back to page 1.
    pub fn apply_to(self, view: &mut CatalogView) {
        if let Some(category) = self.category {
            view.set_category(category);
        }
        if let Some(term) = self.search_term {
            view.set_search_term(term);
        }
        if let Some(min) = self.min_price {
            view.set_min_price(min);
        }
        if let Some(max) = self.max_price {
            view.set_max_price(max);
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ChangePageRequest {
    /// 1-based page number; out-of-range values are clamped
    pub page: u64,
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub cart_items: u32,
}
