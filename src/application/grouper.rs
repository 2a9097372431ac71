use crate::domain::field_name;
use crate::domain::form::DEFAULT_TAB_NAME;
use crate::domain::ports::{DiagnosticsBox, DynamicFormLookup, FormLookup, TracingDiagnostics};
use crate::domain::validation::BindStatus;
use std::collections::HashMap;

/// Errors grouped by tab title, then by field display name.
pub type TabErrors = HashMap<String, HashMap<String, String>>;

/// Variables injected into the calling render context's local scope.
pub type LocalVariables = HashMap<String, serde_json::Value>;

/// Name of the local variable the grouped errors are bound to.
pub const TAB_ERRORS_VARIABLE: &str = "tabErrors";

/// Organizes the validation errors of a bound form by tab for display.
///
/// Every field error is attributed to exactly one tab (falling back to
/// [`DEFAULT_TAB_NAME`]) and exactly one display key (falling back to the raw
/// field name when no field definition matches). Misses are never fatal; they
/// degrade with a warning through the diagnostics port.
pub struct ErrorsProcessor {
    diagnostics: DiagnosticsBox,
}

impl Default for ErrorsProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorsProcessor {
    pub fn new() -> Self {
        Self::with_diagnostics(Box::new(TracingDiagnostics))
    }

    pub fn with_diagnostics(diagnostics: DiagnosticsBox) -> Self {
        Self { diagnostics }
    }

    /// Runs the grouping pass and exposes the result as the `tabErrors`
    /// local variable for the calling render context.
    ///
    /// Returns `None` when the bind status carries no errors at all, in which
    /// case no binding is produced.
    pub fn process<F>(&self, form: &F, bind_status: &BindStatus) -> Option<LocalVariables>
    where
        F: FormLookup + DynamicFormLookup,
    {
        if !bind_status.has_errors() {
            return None;
        }

        let result = self.group_errors_by_tab(form, bind_status);

        let mut local_variables = LocalVariables::new();
        local_variables.insert(TAB_ERRORS_VARIABLE.to_string(), serde_json::json!(result));
        Some(local_variables)
    }

    /// Groups each field error under the title of its owning tab, keyed by
    /// the field's display name.
    pub fn group_errors_by_tab<F>(&self, form: &F, bind_status: &BindStatus) -> TabErrors
    where
        F: FormLookup + DynamicFormLookup,
    {
        let mut result = TabErrors::new();

        for err in &bind_status.field_errors {
            // Attempt to look up which tab the field error is on. If it can't
            // be found, use the default tab.
            let tab_name = form
                .find_tab_for_field(&err.field)
                .map(|tab| tab.title.clone())
                .unwrap_or_else(|| DEFAULT_TAB_NAME.to_string());

            let tab_errors = result.entry(tab_name).or_default();

            if field_name::is_dynamic(&err.field) {
                // The field name occurs within some array syntax.
                match field_name::parse_dynamic(&err.field) {
                    Some(parsed) => {
                        let form_field = form
                            .dynamic_form(parsed.form_id)
                            .and_then(|dynamic| dynamic.find_field(parsed.field_name));
                        match form_field {
                            Some(field) => {
                                tab_errors.insert(field.friendly_name.clone(), err.code.clone());
                            }
                            None => {
                                self.diagnostics.warn(&format!(
                                    "Could not find field {} within the dynamic form {}",
                                    parsed.field_name, parsed.form_id
                                ));
                                tab_errors
                                    .insert(parsed.field_name.to_string(), err.code.clone());
                            }
                        }
                    }
                    None => {
                        self.diagnostics
                            .warn(&format!("Malformed dynamic field name {}", err.field));
                        tab_errors.insert(err.field.clone(), err.code.clone());
                    }
                }
            } else {
                match form.find_field(&err.field) {
                    Some(field) => {
                        tab_errors.insert(field.friendly_name.clone(), err.code.clone());
                    }
                    None => {
                        self.diagnostics.warn(&format!(
                            "Could not find field {} within the main form",
                            err.field
                        ));
                        tab_errors.insert(err.field.clone(), err.code.clone());
                    }
                }
            }
        }

        // Global errors are iterated but intentionally contribute no entries.
        for _err in &bind_status.global_errors {}

        result
    }
}
