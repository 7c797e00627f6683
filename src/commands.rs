//! One-shot CLI commands.

use formsmith_core::export::ExportPayload;
use formsmith_core::{ExportError, ExportSerializer, ExportSink, FormDefinition};
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Reads a definition file. `.yaml` and `.yml` are parsed as YAML, anything else as JSON.
pub fn load_definition(path: &Path) -> Result<Value, CommandError> {
    let content = std::fs::read_to_string(path).map_err(|source| CommandError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    if is_yaml {
        Ok(serde_yaml::from_str(&content)?)
    } else {
        Ok(serde_json::from_str(&content)?)
    }
}

/// Validates and serializes the definition at `input`, delivering it to `sink`.
pub fn export_file(input: &Path, sink: &mut dyn ExportSink) -> Result<String, CommandError> {
    let definition = load_definition(input)?;
    tracing::debug!("Loaded definition from {}", input.display());
    Ok(ExportSerializer::export_value(&definition, sink)?)
}

/// Canonical export of the seed definition.
pub fn seed_export() -> Result<String, CommandError> {
    Ok(ExportPayload::from(&FormDefinition::seed()).to_canonical_json()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_core::export::MemorySink;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_export_yaml_definition() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("form.yaml");
        fs::write(
            &path,
            r#"
fields:
  - name: age
    type: number
    label: Age
    rules: required()
resolver: zod
uiLib: mui
"#,
        )
        .unwrap();

        let mut sink = MemorySink::default();
        let text = export_file(&path, &mut sink).unwrap();

        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["fields"][0]["type"], "number");
        assert_eq!(value["uiLib"], "mui");
        assert_eq!(sink.delivered.len(), 1);
    }

    #[test]
    fn test_export_reports_field_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("form.json");
        fs::write(&path, r#"{"fields":[{"name":"","label":"A"}]}"#).unwrap();

        let mut sink = MemorySink::default();
        let err = export_file(&path, &mut sink).unwrap_err();

        match err {
            CommandError::Export(e) => {
                assert_eq!(e.field_errors()[0].to_string(), "fields[0].name: name is required");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(sink.delivered.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_definition(Path::new("does-not-exist.json")).unwrap_err();
        assert!(matches!(err, CommandError::Io { .. }));
    }

    #[test]
    fn test_seed_export_round_trips_seed() {
        let text = seed_export().unwrap();
        let payload: ExportPayload = serde_json::from_str(&text).unwrap();
        assert_eq!(payload, ExportPayload::from(&FormDefinition::seed()));
    }
}
