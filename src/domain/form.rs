use crate::domain::ports::{DynamicFormLookup, FormLookup};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tab title used when a field error cannot be attributed to any tab.
pub const DEFAULT_TAB_NAME: &str = "General";

/// Separator token used inside the bracket syntax of dynamic field names,
/// e.g. `attributes[shipping|postalCode]`.
pub const DYNAMIC_FIELD_SEPARATOR: &str = "|";

/// A single form field with a raw name and a human-friendly display name.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Field {
    pub name: String,
    pub friendly_name: String,
}

impl Field {
    pub fn new(name: impl Into<String>, friendly_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            friendly_name: friendly_name.into(),
        }
    }
}

/// A named grouping of fields within a form.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Tab {
    pub title: String,
    pub fields: Vec<Field>,
}

impl Tab {
    pub fn new(title: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            title: title.into(),
            fields,
        }
    }

    pub fn contains_field(&self, field_name: &str) -> bool {
        self.fields.iter().any(|f| f.name == field_name)
    }
}

/// A nested, separately identified form embedded within a parent form,
/// addressed via the encoded field-name syntax.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct DynamicForm {
    pub fields: Vec<Field>,
}

impl DynamicForm {
    pub fn find_field(&self, field_name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == field_name)
    }
}

/// A UI form bound to a domain entity for the duration of a request.
///
/// Organizes fields into named tabs and carries any dynamic sub-forms keyed
/// by their identifier.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct EntityForm {
    pub tabs: Vec<Tab>,
    #[serde(default)]
    pub dynamic_forms: HashMap<String, DynamicForm>,
}

impl FormLookup for EntityForm {
    fn find_tab_for_field(&self, field_name: &str) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.contains_field(field_name))
    }

    fn find_field(&self, field_name: &str) -> Option<&Field> {
        self.tabs
            .iter()
            .flat_map(|tab| tab.fields.iter())
            .find(|f| f.name == field_name)
    }
}

impl DynamicFormLookup for EntityForm {
    fn dynamic_form(&self, id: &str) -> Option<&DynamicForm> {
        self.dynamic_forms.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> EntityForm {
        EntityForm {
            tabs: vec![
                Tab::new("Pricing", vec![Field::new("price", "Price")]),
                Tab::new("Inventory", vec![Field::new("quantity", "Quantity")]),
            ],
            dynamic_forms: HashMap::from([(
                "shipping".to_string(),
                DynamicForm {
                    fields: vec![Field::new("postalCode", "Postal Code")],
                },
            )]),
        }
    }

    #[test]
    fn test_find_tab_for_field() {
        let form = sample_form();
        assert_eq!(form.find_tab_for_field("price").unwrap().title, "Pricing");
        assert!(form.find_tab_for_field("missing").is_none());
    }

    #[test]
    fn test_find_field_across_tabs() {
        let form = sample_form();
        assert_eq!(form.find_field("quantity").unwrap().friendly_name, "Quantity");
        assert!(form.find_field("missing").is_none());
    }

    #[test]
    fn test_dynamic_form_lookup() {
        let form = sample_form();
        let dynamic = form.dynamic_form("shipping").unwrap();
        assert_eq!(
            dynamic.find_field("postalCode").unwrap().friendly_name,
            "Postal Code"
        );
        assert!(form.dynamic_form("billing").is_none());
    }

    #[test]
    fn test_form_deserialization_defaults_dynamic_forms() {
        let json = r#"{"tabs": [{"title": "Pricing", "fields": []}]}"#;
        let form: EntityForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.tabs.len(), 1);
        assert!(form.dynamic_forms.is_empty());
    }
}
