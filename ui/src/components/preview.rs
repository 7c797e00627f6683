//! Live preview of the projected fields.
//!
//! The inner form mounts when the projection becomes non-empty and keeps its
//! own value store for as long as it stays mounted. Projection changes only
//! re-sync default keys, so a renamed field shows an empty input and the
//! value typed under its old name is left behind.

use formsmith_core::preview::{render, PreviewControl, PreviewForm, PreviewSubmission, PreviewView};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::state::use_builder_state;

#[component]
pub fn PreviewPanel() -> impl IntoView {
    let state = use_builder_state();
    let has_fields = move || state.valid_fields.with(|fields| !fields.is_empty());

    view! {
        <section class="bg-white rounded-lg shadow p-4">
            <h2 class="text-lg font-semibold text-gray-800 mb-4">"Preview"</h2>
            <Show
                when=has_fields
                fallback=|| view! {
                    <div class="p-4 text-sm text-blue-800 bg-blue-50 rounded-md">
                        "Add a field with a name to see the live preview."
                    </div>
                }
            >
                <LivePreviewForm />
            </Show>
        </section>
    }
}

#[component]
fn LivePreviewForm() -> impl IntoView {
    let state = use_builder_state();

    let form = RwSignal::new(PreviewForm::mount(&state.valid_fields.get_untracked()));
    Effect::new(move |_| {
        let fields = state.valid_fields.get();
        form.update(|f| f.sync(&fields));
    });

    let (outcome, set_outcome) = signal(Option::<PreviewSubmission>::None);

    let controls = move || {
        state.valid_fields.with(|fields| {
            form.with_untracked(|f| match render(fields, f) {
                PreviewView::Form(controls) => controls,
                PreviewView::Placeholder => Vec::new(),
            })
        })
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let fields = state.valid_fields.get_untracked();
        let result = form.try_update(|f| f.submit(&fields));
        if let Some(result) = &result {
            log::info!("Preview submission: {:?}", result);
        }
        set_outcome.set(result);
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <For
                each=controls
                key=|c| (c.id, c.name.clone(), c.label.clone(), c.field_type, c.required)
                children=move |control| view! { <PreviewInput control=control form=form /> }
            />
            <button
                type="submit"
                class="px-4 py-2 text-sm bg-gray-800 text-white rounded-md hover:bg-gray-900"
            >
                "Submit"
            </button>
        </form>
        {move || outcome.get().map(|result| view! { <SubmissionResult result=result /> })}
    }
}

/// One labeled control. Value and error are read from the form by name.
#[component]
fn PreviewInput(control: PreviewControl, form: RwSignal<PreviewForm>) -> impl IntoView {
    let state = use_builder_state();
    let name = StoredValue::new(control.name.clone());
    let input_id = format!("preview-{}", control.id);

    let value = move || name.with_value(|n| form.with(|f| f.value(n).to_string()));
    let error = move || name.with_value(|n| form.with(|f| f.error(n).map(String::from)));

    // Committed on change rather than on every keystroke.
    let on_change = move |ev: web_sys::Event| {
        let fields = state.valid_fields.get_untracked();
        let committed = event_target_value(&ev);
        name.with_value(|n| form.update(|f| f.set_value(&fields, n, committed)));
    };

    view! {
        <div>
            <label for=input_id.clone() class="block text-sm font-medium text-gray-700 mb-1">
                {control.label.clone()}
                {control.required.then(|| view! { <span class="text-red-600">" *"</span> })}
            </label>
            <input
                id=input_id
                name=control.name.clone()
                type=control.field_type.as_str()
                class=move || {
                    let border = if error().is_some() { "border-red-500" } else { "border-gray-300" };
                    format!("w-full px-3 py-2 text-sm border rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 {}", border)
                }
                prop:value=value
                on:change=on_change
            />
            {move || error().map(|message| view! { <p class="text-xs text-red-600 mt-1">{message}</p> })}
        </div>
    }
}

#[component]
fn SubmissionResult(result: PreviewSubmission) -> impl IntoView {
    match result {
        PreviewSubmission::Accepted(values) => {
            let body = serde_json::to_string_pretty(&values).unwrap_or_default();
            view! {
                <div class="mt-4">
                    <p class="text-sm text-green-700 mb-1">"Preview values:"</p>
                    <pre class="p-2 text-xs bg-gray-50 rounded-md overflow-x-auto">{body}</pre>
                </div>
            }
            .into_any()
        }
        PreviewSubmission::Rejected(errors) => view! {
            <p class="mt-4 text-sm text-red-700">
                {format!("{} field(s) need a value.", errors.len())}
            </p>
        }
        .into_any(),
        PreviewSubmission::Empty => view! {
            <p class="mt-4 text-sm text-gray-600">"Nothing to submit."</p>
        }
        .into_any(),
    }
}
