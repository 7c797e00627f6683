//! Export of the whole definition to the clipboard.

use formsmith_core::{ExportError, ExportSerializer};
use leptos::prelude::*;

use crate::clipboard::ClipboardSink;
use crate::state::use_builder_state;

#[component]
pub fn ExportPanel() -> impl IntoView {
    let state = use_builder_state();
    let (notice, set_notice) = signal(Option::<(bool, String)>::None);

    let on_export = move |_: leptos::ev::MouseEvent| {
        let definition = state.store.with_untracked(|s| s.definition());
        let mut sink = ClipboardSink;
        match ExportSerializer::export(&definition, &mut sink) {
            Ok(_) => {
                state.clear_export_issues();
                set_notice.set(Some((true, "Definition copied to clipboard".to_string())));
                let handle = gloo_timers::callback::Timeout::new(3000, move || {
                    set_notice.set(None);
                });
                handle.forget();
            }
            Err(ExportError::Validation(errors)) => {
                log::debug!("Export blocked by {} structural error(s)", errors.len());
                state.record_export_errors(&errors);
                set_notice.set(None);
            }
            Err(err) => {
                state.clear_export_issues();
                set_notice.set(Some((false, err.to_string())));
            }
        }
    };

    // Structural errors that do not belong to a single field row.
    let form_errors = move || state.form_errors();

    view! {
        <div class="flex flex-col items-end gap-1">
            <button
                type="button"
                class="px-4 py-2 text-sm bg-green-600 text-white rounded-md hover:bg-green-700"
                on:click=on_export
            >
                "Export JSON"
            </button>
            {move || notice.get().map(|(ok, message)| {
                let class = if ok { "text-xs text-green-700" } else { "text-xs text-red-700" };
                view! { <span class=class>{message}</span> }
            })}
            <For
                each=form_errors
                key=|message| message.clone()
                children=|message| view! { <span class="text-xs text-red-700">{message}</span> }
            />
        </div>
    }
}
