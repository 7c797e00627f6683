//! # Formsmith core
//!
//! State and derivation logic behind the form builder:
//!
//! - **domain**: field rows, the form definition and its backend choices
//! - **rules**: free-text rule strings to constraints
//! - **store**: the editable, ordered field collection
//! - **projection**: the subset of fields eligible for preview
//! - **preview**: the live preview form's values and required checks
//! - **export**: structural validation and canonical JSON output
//!
//! The crate does no I/O and holds no global state, so it runs unchanged in
//! the browser and on the host.

pub mod domain;
pub mod export;
pub mod preview;
pub mod projection;
pub mod rules;
pub mod store;

pub use domain::{FieldDefinition, FieldDraft, FieldId, FieldPatch, FieldType, FormDefinition, ResolverKind, UiLibKind};
pub use export::{ExportError, ExportPayload, ExportSerializer, ExportSink, FieldError};
pub use preview::{PreviewForm, PreviewSubmission, PreviewView};
pub use rules::{interpret, tokenize, RuleConstraint, RuleToken};
pub use store::FieldDefinitionStore;

/// Version of the form core, reported by the host's health endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
