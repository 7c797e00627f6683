use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identity of one field row.
///
/// Minted when the row is created and never derived from its name, so a
/// row keeps its identity across renames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldId(Uuid);

impl FieldId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input control kind of a field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Number,
}

impl FieldType {
    pub const ALL: [FieldType; 3] = [FieldType::Text, FieldType::Email, FieldType::Number];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Number => "number",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "email" => Ok(Self::Email),
            "number" => Ok(Self::Number),
            other => Err(format!("unknown field type '{}'", other)),
        }
    }
}

/// One user-authored row of the form definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    #[serde(default)]
    pub id: FieldId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub rules: String,
}

impl FieldDefinition {
    /// Builds a row with a freshly minted identity.
    pub fn new(draft: FieldDraft) -> Self {
        Self {
            id: FieldId::new(),
            name: draft.name,
            field_type: draft.field_type,
            label: draft.label,
            rules: draft.rules,
        }
    }

    /// A field is eligible for preview once its trimmed name is non-empty.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Merges the set attributes of `patch` into this row. The identity is untouched.
    pub fn apply(&mut self, patch: FieldPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(field_type) = patch.field_type {
            self.field_type = field_type;
        }
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(rules) = patch.rules {
            self.rules = rules;
        }
    }

    /// Attribute content without the identity, for content comparisons.
    pub fn draft(&self) -> FieldDraft {
        FieldDraft {
            name: self.name.clone(),
            field_type: self.field_type,
            label: self.label.clone(),
            rules: self.rules.clone(),
        }
    }
}

/// Attributes of a row that does not have an identity yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    pub rules: String,
}

impl FieldDraft {
    pub fn new(name: impl Into<String>, field_type: FieldType, label: impl Into<String>, rules: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type,
            label: label.into(),
            rules: rules.into(),
        }
    }
}

/// Partial attribute set for `FieldDefinitionStore::update_field`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldPatch {
    pub name: Option<String>,
    pub field_type: Option<FieldType>,
    pub label: Option<String>,
    pub rules: Option<String>,
}

impl FieldPatch {
    pub fn name(value: impl Into<String>) -> Self {
        Self { name: Some(value.into()), ..Default::default() }
    }

    pub fn field_type(value: FieldType) -> Self {
        Self { field_type: Some(value), ..Default::default() }
    }

    pub fn label(value: impl Into<String>) -> Self {
        Self { label: Some(value.into()), ..Default::default() }
    }

    pub fn rules(value: impl Into<String>) -> Self {
        Self { rules: Some(value.into()), ..Default::default() }
    }
}
