//! Input validation logic

use super::state::{App, EditingField};

impl App {
    /// Re-check every form field; `true` when the form can be submitted
    pub fn validate_form(&mut self) -> bool {
        self.form.clear_errors();
        for error in self.form.to_input().errors() {
            let field: EditingField = error.field().into();
            self.form.set_error(field, error.to_string());
        }
        !self.form.has_errors()
    }

    /// Live check while typing; an untouched URL field is not flagged yet
    pub fn validate_inputs(&mut self) {
        self.validate_form();
        if self.form.url.is_empty() {
            self.form.validation_errors.remove(&EditingField::Url);
        }
    }
}
