//! Live preview form built from the projected fields.
//!
//! A [`PreviewForm`] is created once per mount and then kept in step with the
//! projection through [`PreviewForm::sync`]. Sync only recomputes which keys
//! have defaults; it never re-initialises the value store. A field renamed
//! while mounted therefore starts out empty under its new name, and whatever
//! was typed under the old name stays behind as an orphaned entry.

use std::collections::BTreeMap;

use crate::domain::{FieldDefinition, FieldId, FieldType};
use crate::rules;

pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Value store and validation state of one mounted preview.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewForm {
    values: BTreeMap<String, String>,
    default_keys: Vec<String>,
    errors: BTreeMap<String, String>,
    submitted: bool,
}

/// Outcome of a preview submission. Local only; never reaches the export path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewSubmission {
    /// Every required field had a value. Carries the full value store.
    Accepted(BTreeMap<String, String>),
    /// Field name to message for each failing required field.
    Rejected(BTreeMap<String, String>),
    /// Nothing is projected, so there is no form to submit.
    Empty,
}

impl PreviewForm {
    /// Initialises a preview with an empty default for every projected name.
    pub fn mount(fields: &[FieldDefinition]) -> Self {
        let mut form = Self::default();
        form.sync(fields);
        form
    }

    /// Recomputes default keys from the projection.
    ///
    /// Keys not yet in the value store get an empty value. Existing values,
    /// including ones whose field has since been renamed, are left untouched.
    /// Errors are only kept for names that are still projected.
    pub fn sync(&mut self, fields: &[FieldDefinition]) {
        self.default_keys = fields.iter().map(|field| field.name.clone()).collect();
        for key in &self.default_keys {
            self.values.entry(key.clone()).or_default();
        }
        let default_keys = &self.default_keys;
        self.errors.retain(|name, _| default_keys.contains(name));
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    /// Commits a value for `name`. After the first submission the field is
    /// re-validated on each commit.
    pub fn set_value(&mut self, fields: &[FieldDefinition], name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
        if self.submitted {
            self.errors.remove(name);
            for field in fields.iter().filter(|field| field.name == name) {
                if let Some(message) = self.check(field) {
                    self.errors.insert(field.name.clone(), message);
                }
            }
        }
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn default_keys(&self) -> &[String] {
        &self.default_keys
    }

    /// Value keys no projected field currently uses.
    pub fn orphaned_keys(&self) -> Vec<&str> {
        self.values
            .keys()
            .filter(|key| !self.default_keys.contains(key))
            .map(String::as_str)
            .collect()
    }

    /// Runs every required check against the projected fields.
    pub fn submit(&mut self, fields: &[FieldDefinition]) -> PreviewSubmission {
        if fields.is_empty() {
            tracing::info!("Preview submission ignored: no projected fields");
            return PreviewSubmission::Empty;
        }
        self.submitted = true;
        self.errors = fields
            .iter()
            .filter_map(|field| self.check(field).map(|message| (field.name.clone(), message)))
            .collect();

        if self.errors.is_empty() {
            tracing::info!(values = ?self.values, "Preview submitted");
            PreviewSubmission::Accepted(self.values.clone())
        } else {
            tracing::info!(errors = ?self.errors, "Preview submission rejected");
            PreviewSubmission::Rejected(self.errors.clone())
        }
    }

    fn check(&self, field: &FieldDefinition) -> Option<String> {
        let constraint = rules::interpret(&field.rules);
        (constraint.required && self.value(&field.name).is_empty()).then(|| REQUIRED_MESSAGE.to_string())
    }
}

/// What the preview area shows for the current projection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewView {
    /// No projected fields: an informational message instead of a form.
    Placeholder,
    Form(Vec<PreviewControl>),
}

/// One labeled input of the preview form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewControl {
    pub id: FieldId,
    pub name: String,
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
    pub value: String,
    pub error: Option<String>,
}

/// Builds the view model for `fields` over the state held in `form`.
pub fn render(fields: &[FieldDefinition], form: &PreviewForm) -> PreviewView {
    if fields.is_empty() {
        return PreviewView::Placeholder;
    }
    PreviewView::Form(
        fields
            .iter()
            .map(|field| PreviewControl {
                id: field.id,
                name: field.name.clone(),
                label: field.label.clone(),
                field_type: field.field_type,
                required: rules::interpret(&field.rules).required,
                value: form.value(&field.name).to_string(),
                error: form.error(&field.name).map(String::from),
            })
            .collect(),
    )
}
