use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::form::FormField;
use crate::domain::product::model::CreatedProduct;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::use_cases::load_catalog::LoadCatalogUseCase;
use crate::domain::storefront::model::Storefront;

/// Delay between a successful submission and the dialog closing itself.
pub const DEFAULT_DIALOG_CLOSE_DELAY: Duration = Duration::from_secs(2);

/// Owns the storefront session and runs the network operations against it.
///
/// State changes are serialized through one mutex. It is never held across a
/// network call, so a catalog fetch and a product submission can be in flight
/// at the same time.
pub struct StorefrontService {
    state: Arc<Mutex<Storefront>>,
    load_catalog_use_case: Arc<dyn LoadCatalogUseCase>,
    create_product_use_case: Arc<dyn CreateProductUseCase>,
    logger: Arc<dyn Logger>,
    dialog_close_delay: Duration,
}

impl StorefrontService {
    pub fn new(
        storefront: Storefront,
        load_catalog_use_case: Arc<dyn LoadCatalogUseCase>,
        create_product_use_case: Arc<dyn CreateProductUseCase>,
        logger: Arc<dyn Logger>,
        dialog_close_delay: Duration,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(storefront)),
            load_catalog_use_case,
            create_product_use_case,
            logger,
            dialog_close_delay,
        }
    }

    /// Fetches the catalog and swaps it into the view. Used at startup and
    /// for explicit reloads; failures are recorded, never retried.
    pub async fn load_catalog(&self) -> Result<usize, ProductError> {
        self.state.lock().await.begin_loading();

        let result = self.load_catalog_use_case.execute().await;

        let mut state = self.state.lock().await;
        match result {
            Ok(products) => {
                let count = products.len();
                state.catalog_loaded(products);
                Ok(count)
            }
            Err(err) => {
                if !state.view().catalog().is_empty() {
                    self.logger
                        .warn("Catalog reload failed, keeping the previously loaded catalog");
                }
                state.catalog_failed(err.user_message());
                Err(err)
            }
        }
    }

    pub async fn read<R>(&self, f: impl FnOnce(&Storefront) -> R) -> R {
        let state = self.state.lock().await;
        f(&*state)
    }

    pub async fn update<R>(&self, f: impl FnOnce(&mut Storefront) -> R) -> R {
        let mut state = self.state.lock().await;
        f(&mut *state)
    }

    /// Changes one field of the add-product form. Only allowed while the
    /// form is open.
    pub async fn edit_form_field(
        &self,
        field: FormField,
        value: String,
    ) -> Result<(), ProductError> {
        let mut state = self.state.lock().await;
        if !state.dialog().is_open() {
            self.logger
                .warn(&format!("Ignoring edit of {:?}: the form is closed", field));
            return Err(ProductError::FormClosed);
        }
        state.dialog_mut().edit(field, value);
        Ok(())
    }

    /// Submits the add-product form.
    ///
    /// Validation errors are stored on the dialog. On success the form is
    /// reset and the dialog closes after the configured delay. The created
    /// product is not added to the local catalog.
    pub async fn submit_product(&self) -> Result<CreatedProduct, ProductError> {
        let form = {
            let mut state = self.state.lock().await;
            if !state.dialog().is_open() {
                self.logger.warn("Ignoring submission: the form is closed");
                return Err(ProductError::FormClosed);
            }
            state.dialog_mut().begin_submit()
        };

        let result = self
            .create_product_use_case
            .execute(CreateProductParams { form })
            .await;

        let mut state = self.state.lock().await;
        match result {
            Ok(created) => {
                state.dialog_mut().complete_submit();
                drop(state);
                self.schedule_dialog_close();
                Ok(created)
            }
            Err(ProductError::InvalidForm(errors)) => {
                state.dialog_mut().reject(errors.clone());
                Err(ProductError::InvalidForm(errors))
            }
            Err(err) => {
                state.dialog_mut().fail_submit();
                Err(err)
            }
        }
    }

    fn schedule_dialog_close(&self) {
        let state = Arc::clone(&self.state);
        let logger = Arc::clone(&self.logger);
        let delay = self.dialog_close_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            state.lock().await.dialog_mut().close_after_success();
            logger.debug("Add-product dialog closed after successful submission");
        });
    }
}
