//! The authoritative, editable form definition.

use std::collections::HashMap;

use crate::domain::{
    FieldDefinition, FieldDraft, FieldId, FieldPatch, FormDefinition, ResolverKind, UiLibKind,
};

/// Ordered collection of field rows plus the resolver and UI-library choice.
///
/// Rows live in an identity-keyed map; `order` holds display order. Positional
/// operations resolve position to identity first, so identities of the
/// remaining rows never shift.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDefinitionStore {
    fields: HashMap<FieldId, FieldDefinition>,
    order: Vec<FieldId>,
    resolver_kind: ResolverKind,
    ui_lib_kind: UiLibKind,
}

impl FieldDefinitionStore {
    /// A store holding the seed definition.
    pub fn new() -> Self {
        Self::from_definition(FormDefinition::seed())
    }

    /// A store with no fields and default backend choices.
    pub fn empty() -> Self {
        Self {
            fields: HashMap::new(),
            order: Vec::new(),
            resolver_kind: ResolverKind::default(),
            ui_lib_kind: UiLibKind::default(),
        }
    }

    /// Loads an existing definition. Every row gets a fresh identity.
    pub fn from_definition(definition: FormDefinition) -> Self {
        let mut store = Self::empty();
        for field in definition.fields {
            store.append(field.draft());
        }
        store.resolver_kind = definition.resolver_kind;
        store.ui_lib_kind = definition.ui_lib_kind;
        store
    }

    /// Restores the seed definition.
    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::debug!("Form definition reset to seed");
    }

    /// Appends a new row at the end and returns its identity.
    pub fn append(&mut self, draft: FieldDraft) -> FieldId {
        let field = FieldDefinition::new(draft);
        let id = field.id;
        self.order.push(id);
        self.fields.insert(id, field);
        tracing::debug!(%id, position = self.order.len() - 1, "Field appended");
        id
    }

    /// Removes the row at `position`. Out-of-range positions are a no-op.
    pub fn remove_at(&mut self, position: usize) -> Option<FieldDefinition> {
        if position >= self.order.len() {
            tracing::debug!(position, len = self.order.len(), "Ignoring out-of-range removal");
            return None;
        }
        let id = self.order.remove(position);
        let removed = self.fields.remove(&id);
        tracing::debug!(%id, position, "Field removed");
        removed
    }

    /// Merges `patch` into the row with identity `id`. Returns `false` for unknown identities.
    pub fn update_field(&mut self, id: FieldId, patch: FieldPatch) -> bool {
        match self.fields.get_mut(&id) {
            Some(field) => {
                field.apply(patch);
                tracing::debug!(%id, "Field updated");
                true
            }
            None => {
                tracing::debug!(%id, "Ignoring update for unknown field");
                false
            }
        }
    }

    pub fn set_resolver_kind(&mut self, kind: ResolverKind) {
        self.resolver_kind = kind;
        tracing::debug!(resolver = %kind, "Resolver changed");
    }

    pub fn set_ui_lib_kind(&mut self, kind: UiLibKind) {
        self.ui_lib_kind = kind;
        tracing::debug!(ui_lib = %kind, "UI library changed");
    }

    pub fn resolver_kind(&self) -> ResolverKind {
        self.resolver_kind
    }

    pub fn ui_lib_kind(&self) -> UiLibKind {
        self.ui_lib_kind
    }

    /// Rows in display order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> + '_ {
        self.order.iter().filter_map(|id| self.fields.get(id))
    }

    pub fn get(&self, id: FieldId) -> Option<&FieldDefinition> {
        self.fields.get(&id)
    }

    pub fn position_of(&self, id: FieldId) -> Option<usize> {
        self.order.iter().position(|candidate| *candidate == id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Snapshot of the current content as a plain definition.
    pub fn definition(&self) -> FormDefinition {
        FormDefinition {
            fields: self.fields().cloned().collect(),
            resolver_kind: self.resolver_kind,
            ui_lib_kind: self.ui_lib_kind,
        }
    }
}

impl Default for FieldDefinitionStore {
    fn default() -> Self {
        Self::new()
    }
}
