//! Reactive wiring of the form store.
//!
//! The store sits in a single signal owned by the page and shared through
//! context. The projection is a memo over that signal, so every mutation is
//! visible to it before the next render.

use formsmith_core::projection::project;
use formsmith_core::{
    FieldDefinition, FieldDefinitionStore, FieldDraft, FieldError, FieldId, FieldPatch, ResolverKind,
    UiLibKind,
};
use leptos::prelude::*;
use std::collections::HashMap;

/// Structural errors from the last export, attached to rows by identity.
///
/// Errors carry the row position at export time; it is resolved to the row's
/// identity once, so later inserts and removals cannot move an error onto
/// another row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportIssues {
    by_row: HashMap<FieldId, Vec<String>>,
    form: Vec<String>,
}

impl ExportIssues {
    pub fn resolve(store: &FieldDefinitionStore, errors: &[FieldError]) -> Self {
        let ids: Vec<FieldId> = store.fields().map(|f| f.id).collect();
        let mut issues = Self::default();
        for error in errors {
            match error.index.and_then(|i| ids.get(i)) {
                Some(id) => issues.by_row.entry(*id).or_default().push(error.message.clone()),
                None => issues.form.push(error.to_string()),
            }
        }
        issues
    }

    pub fn for_row(&self, id: FieldId) -> Vec<String> {
        self.by_row.get(&id).cloned().unwrap_or_default()
    }

    pub fn form(&self) -> &[String] {
        &self.form
    }

    pub fn is_empty(&self) -> bool {
        self.by_row.is_empty() && self.form.is_empty()
    }

    fn clear_row(&mut self, id: FieldId) -> bool {
        self.by_row.remove(&id).is_some()
    }
}

#[derive(Clone, Copy)]
pub struct BuilderState {
    pub store: RwSignal<FieldDefinitionStore>,
    pub valid_fields: Memo<Vec<FieldDefinition>>,
    pub export_issues: RwSignal<ExportIssues>,
}

impl BuilderState {
    pub fn new() -> Self {
        let store = RwSignal::new(FieldDefinitionStore::new());
        let valid_fields = Memo::new(move |_| store.with(|s| project(s)));
        Self {
            store,
            valid_fields,
            export_issues: RwSignal::new(ExportIssues::default()),
        }
    }

    pub fn append_field(&self) -> Option<FieldId> {
        self.store.try_update(|s| s.append(FieldDraft::default()))
    }

    pub fn remove_at(&self, position: usize) {
        let removed = self.store.try_update(|s| s.remove_at(position)).flatten();
        if let Some(field) = removed {
            self.clear_row_issues(field.id);
        }
    }

    /// Editing a row drops the export errors shown for it.
    pub fn update_field(&self, id: FieldId, patch: FieldPatch) {
        let changed = self.store.try_update(|s| s.update_field(id, patch)).unwrap_or(false);
        if changed {
            self.clear_row_issues(id);
        }
    }

    pub fn set_resolver_kind(&self, kind: ResolverKind) {
        self.store.update(|s| s.set_resolver_kind(kind));
    }

    pub fn set_ui_lib_kind(&self, kind: UiLibKind) {
        self.store.update(|s| s.set_ui_lib_kind(kind));
    }

    pub fn reset(&self) {
        self.store.update(|s| s.reset());
        self.clear_export_issues();
    }

    /// Records the errors of a failed export against the current rows.
    pub fn record_export_errors(&self, errors: &[FieldError]) {
        let issues = self.store.with_untracked(|s| ExportIssues::resolve(s, errors));
        self.export_issues.set(issues);
    }

    pub fn clear_export_issues(&self) {
        self.export_issues.set(ExportIssues::default());
    }

    pub fn errors_for(&self, id: FieldId) -> Vec<String> {
        self.export_issues.with(|issues| issues.for_row(id))
    }

    pub fn form_errors(&self) -> Vec<String> {
        self.export_issues.with(|issues| issues.form().to_vec())
    }

    fn clear_row_issues(&self, id: FieldId) {
        let has_row = self.export_issues.with_untracked(|issues| issues.by_row.contains_key(&id));
        if has_row {
            self.export_issues.update(|issues| {
                issues.clear_row(id);
            });
        }
    }
}

impl Default for BuilderState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_builder_state() -> BuilderState {
    let state = BuilderState::new();
    provide_context(state);
    state
}

pub fn use_builder_state() -> BuilderState {
    expect_context::<BuilderState>()
}
