//! Resolver and UI-library choice.

use formsmith_core::{ResolverKind, UiLibKind};
use leptos::prelude::*;

use crate::state::use_builder_state;

const SELECT_CLASS: &str = "px-3 py-2 text-sm border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";

#[component]
pub fn BackendSelector() -> impl IntoView {
    let state = use_builder_state();
    let resolver = move || state.store.with(|s| s.resolver_kind());
    let ui_lib = move || state.store.with(|s| s.ui_lib_kind());

    view! {
        <div class="flex items-end gap-4">
            <label class="flex flex-col text-xs text-gray-600 gap-1">
                "Resolver"
                <select
                    class=SELECT_CLASS
                    on:change=move |ev| {
                        if let Ok(kind) = event_target_value(&ev).parse::<ResolverKind>() {
                            state.set_resolver_kind(kind);
                        }
                    }
                >
                    {ResolverKind::ALL
                        .into_iter()
                        .map(|kind| view! {
                            <option value=kind.as_str() selected=move || resolver() == kind>{kind.as_str()}</option>
                        })
                        .collect_view()}
                </select>
            </label>
            <label class="flex flex-col text-xs text-gray-600 gap-1">
                "UI library"
                <select
                    class=SELECT_CLASS
                    on:change=move |ev| {
                        if let Ok(kind) = event_target_value(&ev).parse::<UiLibKind>() {
                            state.set_ui_lib_kind(kind);
                        }
                    }
                >
                    {UiLibKind::ALL
                        .into_iter()
                        .map(|kind| view! {
                            <option value=kind.as_str() selected=move || ui_lib() == kind>{kind.as_str()}</option>
                        })
                        .collect_view()}
                </select>
            </label>
            <button
                type="button"
                class="px-3 py-2 text-sm text-gray-700 border border-gray-300 rounded-md hover:bg-gray-50"
                on:click=move |_| state.reset()
            >
                "Reset"
            </button>
        </div>
    }
}
