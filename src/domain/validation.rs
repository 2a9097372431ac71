use serde::{Deserialize, Serialize};

/// A validation error bound to a single field of the submitted data.
///
/// The `field` is the raw bound name, which may use the dynamic sub-form
/// encoding.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct FieldError {
    pub field: String,
    pub code: String,
}

/// A validation error attached to the submitted object as a whole rather
/// than to any single field.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct GlobalError {
    pub code: String,
}

/// The result of validating submitted data against a target object.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct BindStatus {
    pub field_errors: Vec<FieldError>,
    pub global_errors: Vec<GlobalError>,
}

impl BindStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.field_errors.is_empty() || !self.global_errors.is_empty()
    }

    pub fn add_field_error(&mut self, field: impl Into<String>, code: impl Into<String>) {
        self.field_errors.push(FieldError {
            field: field.into(),
            code: code.into(),
        });
    }

    pub fn add_global_error(&mut self, code: impl Into<String>) {
        self.global_errors.push(GlobalError { code: code.into() });
    }
}
