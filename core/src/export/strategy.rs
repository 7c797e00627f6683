//! Resolver-specific validation.
//!
//! Only the zod-equivalent path is wired up. Other resolvers answer with
//! [`ExportError::UnsupportedResolver`] instead of borrowing the zod behaviour.

use serde_json::Value;

use super::schema::validate_structure;
use super::{ExportError, ExportPayload};
use crate::domain::ResolverKind;

pub trait ValidationStrategy: Send + Sync {
    fn kind(&self) -> ResolverKind;

    /// Whether this strategy can produce an export at all.
    fn is_supported(&self) -> bool {
        true
    }

    /// Validates raw input and returns the typed payload on success.
    fn validate(&self, input: &Value) -> Result<ExportPayload, ExportError>;
}

/// Runs the fixed structural schema.
pub struct ZodStrategy;

impl ValidationStrategy for ZodStrategy {
    fn kind(&self) -> ResolverKind {
        ResolverKind::Zod
    }

    fn validate(&self, input: &Value) -> Result<ExportPayload, ExportError> {
        validate_structure(input).map_err(ExportError::Validation)
    }
}

/// Not implemented yet.
pub struct JoiStrategy;

impl ValidationStrategy for JoiStrategy {
    fn kind(&self) -> ResolverKind {
        ResolverKind::Joi
    }

    fn is_supported(&self) -> bool {
        false
    }

    fn validate(&self, _input: &Value) -> Result<ExportPayload, ExportError> {
        Err(ExportError::UnsupportedResolver(ResolverKind::Joi))
    }
}

pub fn strategy_for(kind: ResolverKind) -> Box<dyn ValidationStrategy> {
    match kind {
        ResolverKind::Zod => Box::new(ZodStrategy),
        ResolverKind::Joi => Box::new(JoiStrategy),
    }
}

/// Resolvers whose strategy can export.
pub fn supported_resolvers() -> Vec<ResolverKind> {
    ResolverKind::ALL
        .into_iter()
        .filter(|kind| strategy_for(*kind).is_supported())
        .collect()
}
