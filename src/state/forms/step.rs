//! A single page of a multi-step form

use super::field::FormField;

/// An ordered group of fields shown together
#[derive(Debug, Clone)]
pub struct Step {
    pub title: String,
    pub fields: Vec<FormField>,
    active: bool,
}

impl Step {
    pub fn new(title: &str, fields: Vec<FormField>) -> Self {
        Self {
            title: title.to_string(),
            fields,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Inverse of [`Step::is_active`], mirrors `aria-hidden`
    pub fn is_hidden(&self) -> bool {
        !self.active
    }

    pub(super) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Index of the first phone-type field in this step
    pub fn phone_field_index(&self) -> Option<usize> {
        self.fields.iter().position(FormField::is_phone)
    }
}
