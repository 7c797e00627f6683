//! Fixed structural schema for exported definitions.
//!
//! Works on raw JSON so that input from outside the typed model (files, HTTP
//! bodies) reports bad enum values as field errors instead of failing to parse.

use serde_json::{Map, Value};
use std::str::FromStr;

use super::{ExportField, ExportPayload, FieldError};
use crate::domain::{FieldType, ResolverKind, UiLibKind};

/// Validates `input` against the structural rules and returns the typed payload.
///
/// All errors are collected; validation does not stop at the first one.
pub fn validate_structure(input: &Value) -> Result<ExportPayload, Vec<FieldError>> {
    let mut errors = Vec::new();

    let Some(object) = input.as_object() else {
        return Err(vec![FieldError::new("", None, "definition must be an object")]);
    };

    let fields = match object.get("fields") {
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .filter_map(|(idx, item)| validate_field(idx, item, &mut errors))
            .collect(),
        Some(_) => {
            errors.push(FieldError::new("fields", None, "fields must be an array"));
            Vec::new()
        }
        None => {
            errors.push(FieldError::new("fields", None, "fields is required"));
            Vec::new()
        }
    };

    let resolver = enum_value::<ResolverKind>(object, "resolver", "zod, joi", &mut errors);
    let ui_lib = enum_value::<UiLibKind>(object, "uiLib", "shadcn, mui, chakra", &mut errors);

    if errors.is_empty() {
        Ok(ExportPayload {
            fields,
            resolver: resolver.unwrap_or_default(),
            ui_lib: ui_lib.unwrap_or_default(),
        })
    } else {
        Err(errors)
    }
}

fn validate_field(idx: usize, item: &Value, errors: &mut Vec<FieldError>) -> Option<ExportField> {
    let Some(field) = item.as_object() else {
        errors.push(FieldError::new(format!("fields[{}]", idx), Some(idx), "field must be an object"));
        return None;
    };
    let before = errors.len();

    let name = required_text(field, idx, "name", errors);
    let label = required_text(field, idx, "label", errors);

    let field_type = match field.get("type") {
        None | Some(Value::Null) => Some(FieldType::default()),
        Some(Value::String(s)) => FieldType::from_str(s).ok(),
        Some(_) => None,
    };
    if field_type.is_none() {
        errors.push(FieldError::new(
            format!("fields[{}].type", idx),
            Some(idx),
            "type must be one of text, email, number",
        ));
    }

    let rules = match field.get("rules") {
        None | Some(Value::Null) => Some(String::new()),
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new(format!("fields[{}].rules", idx), Some(idx), "rules must be a string"));
            None
        }
    };

    if errors.len() > before {
        return None;
    }
    Some(ExportField {
        name: name?,
        field_type: field_type?,
        label: label?,
        rules: rules?,
    })
}

fn required_text(
    field: &Map<String, Value>,
    idx: usize,
    key: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let path = format!("fields[{}].{}", idx, key);
    match field.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::String(_)) | None | Some(Value::Null) => {
            errors.push(FieldError::new(path, Some(idx), format!("{} is required", key)));
            None
        }
        Some(_) => {
            errors.push(FieldError::new(path, Some(idx), format!("{} must be a string", key)));
            None
        }
    }
}

fn enum_value<T: FromStr>(
    object: &Map<String, Value>,
    key: &str,
    allowed: &str,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    let parsed = match object.get(key) {
        None | Some(Value::Null) => return None,
        Some(Value::String(s)) => T::from_str(s).ok(),
        Some(_) => None,
    };
    if parsed.is_none() {
        errors.push(FieldError::new(key, None, format!("{} must be one of {}", key, allowed)));
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_valid_definition() {
        let payload = validate_structure(&json!({
            "fields": [{"name": "age", "type": "number", "label": "Age", "rules": "min(18)"}],
            "resolver": "zod",
            "uiLib": "mui"
        }))
        .unwrap();
        assert_eq!(payload.fields[0].field_type, FieldType::Number);
        assert_eq!(payload.ui_lib, UiLibKind::Mui);
    }

    #[test]
    fn test_missing_type_and_rules_take_defaults() {
        let payload = validate_structure(&json!({
            "fields": [{"name": "a", "label": "A", "id": "ignored"}],
            "resolver": "zod",
            "uiLib": "shadcn"
        }))
        .unwrap();
        assert_eq!(payload.fields[0].field_type, FieldType::Text);
        assert_eq!(payload.fields[0].rules, "");
    }

    #[test]
    fn test_reports_every_structural_error() {
        let errors = validate_structure(&json!({
            "fields": [
                {"name": "", "type": "date", "label": "When"},
                {"name": "ok", "label": 4, "rules": ["required"]},
                "nope"
            ],
            "resolver": "yup",
            "uiLib": "antd"
        }))
        .unwrap_err();

        let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "fields[0].name",
                "fields[0].type",
                "fields[1].label",
                "fields[1].rules",
                "fields[2]",
                "resolver",
                "uiLib",
            ]
        );
        assert_eq!(errors[0].message, "name is required");
        assert_eq!(errors[0].index, Some(0));
        assert_eq!(errors[2].message, "label must be a string");
    }

    #[test]
    fn test_rejects_non_object_and_missing_fields() {
        assert_eq!(validate_structure(&json!([1, 2])).unwrap_err()[0].message, "definition must be an object");
        let errors = validate_structure(&json!({"resolver": "zod", "uiLib": "mui"})).unwrap_err();
        assert_eq!(errors[0].message, "fields is required");
    }

    #[test]
    fn test_whitespace_name_passes_structure() {
        let payload = validate_structure(&json!({
            "fields": [{"name": " ", "label": "Blank"}],
            "resolver": "zod",
            "uiLib": "shadcn"
        }));
        assert!(payload.is_ok());
    }
}
