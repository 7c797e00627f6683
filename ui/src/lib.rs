use leptos::prelude::*;

mod clipboard;
mod components;
mod state;

use components::backend_selector::BackendSelector;
use components::export_panel::ExportPanel;
use components::field_editor::FieldEditor;
use components::preview::PreviewPanel;

#[component]
pub fn App() -> impl IntoView {
    state::provide_builder_state();

    view! {
        <div class="min-h-screen bg-gray-100">
            <header class="bg-gray-800 text-white px-6 py-4 flex items-center justify-between">
                <h1 class="text-2xl font-bold">"Formsmith"</h1>
                <span class="text-xs text-gray-400">"Form builder with live preview"</span>
            </header>

            <main class="max-w-7xl mx-auto p-6 space-y-6">
                <div class="flex flex-wrap items-end justify-between gap-4">
                    <BackendSelector />
                    <ExportPanel />
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 items-start">
                    <FieldEditor />
                    <PreviewPanel />
                </div>
            </main>
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
