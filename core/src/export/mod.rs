//! Export of a form definition as canonical JSON.
//!
//! The definition is validated by the strategy its resolver selects, then
//! rendered as pretty-printed JSON with a fixed key order and handed to an
//! [`ExportSink`]. Identities are not part of the output.

pub mod schema;
pub mod strategy;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::domain::{FieldType, FormDefinition, ResolverKind, UiLibKind};
use strategy::strategy_for;

/// Export payload. Field order here is the key order of the output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportPayload {
    pub fields: Vec<ExportField>,
    pub resolver: ResolverKind,
    #[serde(rename = "uiLib")]
    pub ui_lib: UiLibKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    pub rules: String,
}

impl From<&FormDefinition> for ExportPayload {
    fn from(definition: &FormDefinition) -> Self {
        Self {
            fields: definition
                .fields
                .iter()
                .map(|field| ExportField {
                    name: field.name.clone(),
                    field_type: field.field_type,
                    label: field.label.clone(),
                    rules: field.rules.clone(),
                })
                .collect(),
            resolver: definition.resolver_kind,
            ui_lib: definition.ui_lib_kind,
        }
    }
}

impl ExportPayload {
    /// Pretty-printed JSON with 2-space indentation.
    pub fn to_canonical_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A structural problem with one part of the definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Location such as `fields[0].name`.
    pub path: String,
    /// Position of the offending field, when the error belongs to one.
    pub index: Option<usize>,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, index: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            index,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Form definition failed validation with {} error(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Unsupported resolver: {0}")]
    UnsupportedResolver(ResolverKind),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ExportError {
    /// Per-field messages; empty for errors that are not structural.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors.as_slice(),
            _ => &[],
        }
    }
}

/// Receiver of the exported text, such as the system clipboard.
///
/// Delivery is fire-and-forget: a sink reports its own failures, the
/// serializer does not observe them.
pub trait ExportSink {
    fn deliver(&mut self, text: &str);
}

/// Sink that keeps every delivered text in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub delivered: Vec<String>,
}

impl ExportSink for MemorySink {
    fn deliver(&mut self, text: &str) {
        self.delivered.push(text.to_string());
    }
}

pub struct ExportSerializer;

impl ExportSerializer {
    /// Validates and serializes `definition`, delivering the text to `sink` on success.
    pub fn export(definition: &FormDefinition, sink: &mut dyn ExportSink) -> Result<String, ExportError> {
        let input = serde_json::to_value(ExportPayload::from(definition))?;
        Self::export_value(&input, sink)
    }

    /// Same as [`ExportSerializer::export`] for raw JSON input.
    pub fn export_value(input: &Value, sink: &mut dyn ExportSink) -> Result<String, ExportError> {
        let text = Self::render_value(input)?;
        sink.deliver(&text);
        Ok(text)
    }

    /// Validates and serializes raw JSON without delivering it anywhere.
    pub fn render_value(input: &Value) -> Result<String, ExportError> {
        // Unparseable resolvers fall through to the default strategy, whose
        // schema reports them.
        let resolver = input
            .get("resolver")
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<ResolverKind>().ok())
            .unwrap_or_default();

        match strategy_for(resolver).validate(input) {
            Ok(payload) => {
                let text = payload.to_canonical_json()?;
                tracing::info!(fields = payload.fields.len(), resolver = %payload.resolver, ui_lib = %payload.ui_lib, "Form definition exported");
                Ok(text)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Form definition export rejected");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldDraft, FieldPatch};
    use crate::store::FieldDefinitionStore;
    use serde_json::json;

    const SEED_EXPORT: &str = r#"{"fields":[{"name":"email","type":"email","label":"Email","rules":"email() | required()"}],"resolver":"zod","uiLib":"shadcn"}"#;

    #[test]
    fn test_seed_payload_compact_form() {
        let payload = ExportPayload::from(&FormDefinition::seed());
        assert_eq!(serde_json::to_string(&payload).unwrap(), SEED_EXPORT);
    }

    #[test]
    fn test_export_seed_delivers_pretty_json() {
        let mut sink = MemorySink::default();
        let text = ExportSerializer::export(&FormDefinition::seed(), &mut sink).unwrap();

        let expected = "{\n  \"fields\": [\n    {\n      \"name\": \"email\",\n      \"type\": \"email\",\n      \"label\": \"Email\",\n      \"rules\": \"email() | required()\"\n    }\n  ],\n  \"resolver\": \"zod\",\n  \"uiLib\": \"shadcn\"\n}";
        assert_eq!(text, expected);
        assert_eq!(sink.delivered, vec![expected.to_string()]);

        let reparsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(reparsed, serde_json::from_str::<Value>(SEED_EXPORT).unwrap());
    }

    #[test]
    fn test_export_omits_identity_and_keeps_order() {
        let mut store = FieldDefinitionStore::new();
        store.append(FieldDraft::new("age", FieldType::Number, "Age", ""));
        let mut sink = MemorySink::default();

        let text = ExportSerializer::export(&store.definition(), &mut sink).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["fields"][0]["name"], "email");
        assert_eq!(value["fields"][1]["name"], "age");
        assert!(value["fields"][0].get("id").is_none());
    }

    #[test]
    fn test_empty_name_or_label_blocks_export() {
        let mut store = FieldDefinitionStore::new();
        let id = store.fields().next().unwrap().id;
        store.update_field(id, FieldPatch::label(""));
        store.append(FieldDraft::default());
        let before = store.clone();
        let mut sink = MemorySink::default();

        let err = ExportSerializer::export(&store.definition(), &mut sink).unwrap_err();

        let messages: Vec<_> = err.field_errors().iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            vec![
                "fields[0].label: label is required",
                "fields[1].name: name is required",
                "fields[1].label: label is required",
            ]
        );
        assert!(sink.delivered.is_empty());
        assert_eq!(store, before);
    }

    #[test]
    fn test_joi_resolver_is_reported_not_defaulted() {
        let mut store = FieldDefinitionStore::new();
        store.set_resolver_kind(ResolverKind::Joi);
        let mut sink = MemorySink::default();

        let err = ExportSerializer::export(&store.definition(), &mut sink).unwrap_err();

        assert!(matches!(err, ExportError::UnsupportedResolver(ResolverKind::Joi)));
        assert!(sink.delivered.is_empty());
    }

    #[test]
    fn test_invalid_resolver_in_raw_input_is_structural() {
        let input = json!({
            "fields": [{"name": "a", "type": "text", "label": "A", "rules": ""}],
            "resolver": "yup",
            "uiLib": "shadcn"
        });
        let err = ExportSerializer::render_value(&input).unwrap_err();
        assert_eq!(err.field_errors()[0].path, "resolver");
    }

    #[test]
    fn test_ui_lib_is_carried_through() {
        let mut store = FieldDefinitionStore::new();
        store.set_ui_lib_kind(UiLibKind::Chakra);
        let text = ExportSerializer::render_value(&serde_json::to_value(ExportPayload::from(&store.definition())).unwrap()).unwrap();
        assert!(text.contains("\"uiLib\": \"chakra\""));
    }
}
