use crate::domain::product::form::{FormErrors, FormField, ProductForm};

/// State of the add-product dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddProductDialog {
    open: bool,
    form: ProductForm,
    errors: FormErrors,
    submitting: bool,
    submit_succeeded: bool,
}

impl AddProductDialog {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn has_succeeded(&self) -> bool {
        self.submit_succeeded
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closing always discards what was typed.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Updates one field and drops the error it was showing, if any.
    pub fn edit(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.clear(field);
    }

    pub fn begin_submit(&mut self) -> ProductForm {
        self.submitting = true;
        self.form.clone()
    }

    pub fn complete_submit(&mut self) {
        self.form = ProductForm::default();
        self.errors = FormErrors::new();
        self.submitting = false;
        self.submit_succeeded = true;
    }

    pub fn reject(&mut self, errors: FormErrors) {
        self.errors = errors;
        self.submitting = false;
    }

    pub fn fail_submit(&mut self) {
        self.submitting = false;
    }

    /// Runs once the post-success delay has elapsed. A dialog that was closed
    /// or resubmitted in the meantime is left alone.
    pub fn close_after_success(&mut self) {
        if self.submit_succeeded {
            self.open = false;
            self.submit_succeeded = false;
        }
    }
}
