use crate::domain::cart::model::Cart;
use crate::domain::catalog::view::CatalogView;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

use super::dialog::AddProductDialog;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// Everything one storefront session shows: catalog view, cart, product
/// detail and the add-product dialog.
#[derive(Debug, Clone)]
pub struct Storefront {
    load_state: LoadState,
    view: CatalogView,
    cart: Cart,
    selected: Option<Product>,
    dialog: AddProductDialog,
}

impl Storefront {
    pub fn new(page_size: usize, cart: Cart) -> Self {
        Self {
            load_state: LoadState::Loading,
            view: CatalogView::new(page_size),
            cart,
            selected: None,
            dialog: AddProductDialog::default(),
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn begin_loading(&mut self) {
        self.load_state = LoadState::Loading;
    }

    pub fn catalog_loaded(&mut self, products: Vec<Product>) {
        self.view.replace_catalog(products);
        self.load_state = LoadState::Ready;
    }

    /// Leaves whatever catalog was loaded before untouched.
    pub fn catalog_failed(&mut self, message: impl Into<String>) {
        self.load_state = LoadState::Failed(message.into());
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut CatalogView {
        &mut self.view
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add_to_cart(&mut self) -> u32 {
        self.cart.add_item()
    }

    /// Opens the detail of a product of the catalog.
    pub fn select_product(&mut self, id: u64) -> Result<&Product, ProductError> {
        let product = self.view.find(id).cloned().ok_or(ProductError::NotFound)?;
        Ok(&*self.selected.insert(product))
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    pub fn dialog(&self) -> &AddProductDialog {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut AddProductDialog {
        &mut self.dialog
    }
}
