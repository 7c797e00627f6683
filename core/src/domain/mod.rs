//! Form definition model: field rows and the global backend choices.

pub mod field;
pub mod form;

pub use field::{FieldDefinition, FieldDraft, FieldId, FieldPatch, FieldType};
pub use form::{FormDefinition, ResolverKind, UiLibKind};
