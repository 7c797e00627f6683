use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::field::{FieldDefinition, FieldDraft, FieldType};

/// Validation backend the definition targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverKind {
    #[default]
    Zod,
    Joi,
}

impl ResolverKind {
    pub const ALL: [ResolverKind; 2] = [ResolverKind::Zod, ResolverKind::Joi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zod => "zod",
            Self::Joi => "joi",
        }
    }
}

impl fmt::Display for ResolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResolverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zod" => Ok(Self::Zod),
            "joi" => Ok(Self::Joi),
            other => Err(format!("unknown resolver '{}'", other)),
        }
    }
}

/// UI component family the definition targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiLibKind {
    #[default]
    Shadcn,
    Mui,
    Chakra,
}

impl UiLibKind {
    pub const ALL: [UiLibKind; 3] = [UiLibKind::Shadcn, UiLibKind::Mui, UiLibKind::Chakra];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shadcn => "shadcn",
            Self::Mui => "mui",
            Self::Chakra => "chakra",
        }
    }
}

impl fmt::Display for UiLibKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UiLibKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shadcn" => Ok(Self::Shadcn),
            "mui" => Ok(Self::Mui),
            "chakra" => Ok(Self::Chakra),
            other => Err(format!("unknown UI library '{}'", other)),
        }
    }
}

/// The full authorable unit: ordered fields plus the two global choices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefinition {
    pub fields: Vec<FieldDefinition>,
    #[serde(rename = "resolver", default)]
    pub resolver_kind: ResolverKind,
    #[serde(rename = "uiLib", default)]
    pub ui_lib_kind: UiLibKind,
}

impl FormDefinition {
    /// The definition every session starts from.
    pub fn seed() -> Self {
        Self {
            fields: vec![FieldDefinition::new(seed_field())],
            resolver_kind: ResolverKind::Zod,
            ui_lib_kind: UiLibKind::Shadcn,
        }
    }
}

fn seed_field() -> FieldDraft {
    FieldDraft::new("email", FieldType::Email, "Email", "email() | required()")
}
