//! Derivation of the fields that drive the live preview.

use crate::domain::FieldDefinition;
use crate::store::FieldDefinitionStore;

/// Ordered subsequence of `fields` whose trimmed name is non-empty.
///
/// Recomputed on every call; there is no cache to invalidate.
pub fn valid_fields<'a, I>(fields: I) -> Vec<FieldDefinition>
where
    I: IntoIterator<Item = &'a FieldDefinition>,
{
    fields
        .into_iter()
        .filter(|field| field.is_valid())
        .cloned()
        .collect()
}

/// Projection of the store's current rows.
pub fn project(store: &FieldDefinitionStore) -> Vec<FieldDefinition> {
    valid_fields(store.fields())
}
