use crate::domain::form::EntityForm;
use crate::error::Result;
use std::io::Read;

/// Loads an `EntityForm` definition from a JSON document.
pub fn load_form<R: Read>(source: R) -> Result<EntityForm> {
    Ok(serde_json::from_reader(source)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_form_from_json() {
        let json = r#"{
            "tabs": [
                {
                    "title": "Pricing",
                    "fields": [{"name": "price", "friendly_name": "Price"}]
                }
            ],
            "dynamic_forms": {
                "shipping": {
                    "fields": [{"name": "postalCode", "friendly_name": "Postal Code"}]
                }
            }
        }"#;

        let form = load_form(json.as_bytes()).unwrap();
        assert_eq!(form.tabs[0].title, "Pricing");
        assert_eq!(form.dynamic_forms.len(), 1);
    }

    #[test]
    fn test_load_form_rejects_invalid_json() {
        assert!(load_form("not json".as_bytes()).is_err());
    }
}
