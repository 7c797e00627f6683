use formsmith_core::export::MemorySink;
use formsmith_core::preview::{render, REQUIRED_MESSAGE};
use formsmith_core::projection::project;
use formsmith_core::{
    ExportSerializer, FieldDraft, FieldPatch, FieldType, FieldDefinitionStore, PreviewForm,
    PreviewSubmission, PreviewView,
};

#[test]
fn test_edit_preview_export_flow() {
    let mut store = FieldDefinitionStore::new();
    let mut preview = PreviewForm::mount(&project(&store));

    // A new blank row is not previewed until it has a name.
    let id = store.append(FieldDraft::default());
    preview.sync(&project(&store));
    assert_eq!(project(&store).len(), 1);

    store.update_field(id, FieldPatch::name("age"));
    store.update_field(id, FieldPatch::field_type(FieldType::Number));
    store.update_field(id, FieldPatch::label("Age"));
    store.update_field(id, FieldPatch::rules("min(18) | required()"));
    let fields = project(&store);
    preview.sync(&fields);

    let PreviewView::Form(controls) = render(&fields, &preview) else {
        panic!("expected a form");
    };
    assert_eq!(controls.len(), 2);
    assert!(controls.iter().all(|c| c.required));

    preview.set_value(&fields, "email", "me@example.com");
    match preview.submit(&fields) {
        PreviewSubmission::Rejected(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get("age").map(String::as_str), Some(REQUIRED_MESSAGE));
        }
        other => panic!("unexpected outcome {:?}", other),
    }

    // Preview failures never block or alter the export.
    let mut sink = MemorySink::default();
    let text = ExportSerializer::export(&store.definition(), &mut sink).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["fields"][1]["type"], "number");
    assert_eq!(value["fields"][1]["rules"], "min(18) | required()");
    assert_eq!(sink.delivered.len(), 1);
}

#[test]
fn test_removing_all_fields_shows_placeholder() {
    let mut store = FieldDefinitionStore::new();
    store.remove_at(0);
    let fields = project(&store);
    let preview = PreviewForm::mount(&fields);

    assert!(store.is_empty());
    assert_eq!(render(&fields, &preview), PreviewView::Placeholder);
}

#[test]
fn test_rename_while_mounted_orphans_previous_value() {
    let mut store = FieldDefinitionStore::new();
    let id = store.fields().next().unwrap().id;
    let fields = project(&store);
    let mut preview = PreviewForm::mount(&fields);
    preview.set_value(&fields, "email", "typed@example.com");

    // Renaming one keystroke at a time, as the editor does.
    for name in ["emai", "emai2", "mail"] {
        store.update_field(id, FieldPatch::name(name));
        preview.sync(&project(&store));
    }

    assert_eq!(preview.value("mail"), "");
    assert_eq!(preview.value("email"), "typed@example.com");
    assert!(preview.orphaned_keys().contains(&"email"));
}
