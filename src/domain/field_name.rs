use crate::domain::form::DYNAMIC_FIELD_SEPARATOR;

/// A dynamic sub-form reference parsed out of an encoded field name such as
/// `attributes[shipping|postalCode]`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DynamicFieldRef<'a> {
    pub form_id: &'a str,
    pub field_name: &'a str,
}

/// Returns `true` when the raw field name uses the dynamic sub-form encoding.
pub fn is_dynamic(raw: &str) -> bool {
    raw.contains(DYNAMIC_FIELD_SEPARATOR)
}

/// Extracts the sub-form identifier and inner field name from the bracketed
/// segment of an encoded field name.
///
/// Returns `None` when the name is not encoded, or when the encoding is
/// malformed (no bracket syntax, or the segment does not split into an
/// identifier and a field name). Never panics.
pub fn parse_dynamic(raw: &str) -> Option<DynamicFieldRef<'_>> {
    if !is_dynamic(raw) {
        return None;
    }
    let start = raw.find('[')? + 1;
    let end = raw.rfind(']')?;
    if start > end {
        return None;
    }
    let (form_id, field_name) = raw[start..end].split_once(DYNAMIC_FIELD_SEPARATOR)?;
    if form_id.is_empty() || field_name.is_empty() {
        return None;
    }
    Some(DynamicFieldRef {
        form_id,
        field_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encoded_name() {
        let parsed = parse_dynamic("attributes[shipping|postalCode]").unwrap();
        assert_eq!(parsed.form_id, "shipping");
        assert_eq!(parsed.field_name, "postalCode");
    }

    #[test]
    fn test_plain_name_is_not_dynamic() {
        assert!(!is_dynamic("price"));
        assert!(parse_dynamic("price").is_none());
    }

    #[test]
    fn test_separator_without_brackets_is_malformed() {
        assert!(is_dynamic("shipping|postalCode"));
        assert!(parse_dynamic("shipping|postalCode").is_none());
    }

    #[test]
    fn test_brackets_without_separator_inside() {
        // Separator appears outside the bracketed segment.
        assert!(parse_dynamic("a|b[inner]").is_none());
    }

    #[test]
    fn test_empty_segments_are_malformed() {
        assert!(parse_dynamic("attributes[|postalCode]").is_none());
        assert!(parse_dynamic("attributes[shipping|]").is_none());
    }

    #[test]
    fn test_reversed_brackets_do_not_panic() {
        assert!(parse_dynamic("a]x|y[b").is_none());
    }

    #[test]
    fn test_separator_inside_field_name() {
        // Only the first separator splits; the rest belongs to the field name.
        let parsed = parse_dynamic("attributes[form|a|b]").unwrap();
        assert_eq!(parsed.form_id, "form");
        assert_eq!(parsed.field_name, "a|b");
    }
}
