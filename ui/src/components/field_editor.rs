//! Editor for the ordered list of field rows.

use formsmith_core::rules::{interpret, tokenize, RuleArg, RuleToken};
use formsmith_core::{FieldDefinition, FieldId, FieldPatch, FieldType};
use leptos::prelude::*;

use crate::state::use_builder_state;

const INPUT_CLASS: &str = "w-full px-3 py-2 text-sm border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";

#[component]
pub fn FieldEditor() -> impl IntoView {
    let state = use_builder_state();

    let row_ids = move || state.store.with(|s| s.fields().map(|f| f.id).collect::<Vec<_>>());
    let has_rows = move || state.store.with(|s| !s.is_empty());

    view! {
        <section class="bg-white rounded-lg shadow p-4">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-lg font-semibold text-gray-800">"Fields"</h2>
                <button
                    type="button"
                    class="px-3 py-1.5 text-sm bg-blue-600 text-white rounded-md hover:bg-blue-700"
                    on:click=move |_| {
                        state.append_field();
                    }
                >
                    "+ Add field"
                </button>
            </div>
            <Show
                when=has_rows
                fallback=|| view! { <p class="text-sm text-gray-500 italic">"No fields defined."</p> }
            >
                <div class="space-y-3">
                    <For
                        each=row_ids
                        key=|id| *id
                        children=move |id| view! { <FieldRow id=id /> }
                    />
                </div>
            </Show>
        </section>
    }
}

/// One editable row. Reads its data by identity so it survives reordering.
#[component]
fn FieldRow(id: FieldId) -> impl IntoView {
    let state = use_builder_state();

    let field = Memo::new(move |_| state.store.with(|s| s.get(id).cloned()));
    let position = Memo::new(move |_| state.store.with(|s| s.position_of(id)));
    let read = move |pick: fn(&FieldDefinition) -> String| {
        move || field.with(|f| f.as_ref().map(pick).unwrap_or_default())
    };

    let name = read(|f| f.name.clone());
    let label = read(|f| f.label.clone());
    let rules = read(|f| f.rules.clone());
    let field_type = move || field.with(|f| f.as_ref().map(|f| f.field_type).unwrap_or_default());

    let on_remove = move |_| {
        // Removal is positional; resolve the row's current position first.
        if let Some(pos) = position.get_untracked() {
            state.remove_at(pos);
        }
    };

    let errors = move || state.errors_for(id);

    view! {
        <div class="border border-gray-200 rounded-md p-3">
            <div class="grid grid-cols-1 md:grid-cols-4 gap-2">
                <input
                    type="text"
                    class=INPUT_CLASS
                    placeholder="name"
                    prop:value=name
                    on:input=move |ev| state.update_field(id, FieldPatch::name(event_target_value(&ev)))
                />
                <select
                    class=INPUT_CLASS
                    on:change=move |ev| {
                        if let Ok(kind) = event_target_value(&ev).parse::<FieldType>() {
                            state.update_field(id, FieldPatch::field_type(kind));
                        }
                    }
                >
                    {FieldType::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <option value=kind.as_str() selected=move || field_type() == kind>
                                    {kind.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <input
                    type="text"
                    class=INPUT_CLASS
                    placeholder="label"
                    prop:value=label
                    on:input=move |ev| state.update_field(id, FieldPatch::label(event_target_value(&ev)))
                />
                <div class="flex gap-2">
                    <input
                        type="text"
                        class=INPUT_CLASS
                        placeholder="rules, e.g. email() | required()"
                        prop:value=rules
                        on:input=move |ev| state.update_field(id, FieldPatch::rules(event_target_value(&ev)))
                    />
                    <button
                        type="button"
                        class="px-2 text-sm text-red-600 hover:bg-red-50 rounded-md"
                        title="Remove field"
                        on:click=on_remove
                    >
                        "✕"
                    </button>
                </div>
            </div>
            <RuleHints rules=Signal::derive(rules) />
            <For
                each=errors
                key=|message| message.clone()
                children=|message| view! { <p class="text-xs text-red-600 mt-1">{message}</p> }
            />
        </div>
    }
}

/// Parsed view of a rule string shown under the rules input.
#[component]
fn RuleHints(rules: Signal<String>) -> impl IntoView {
    let tokens = move || rules.with(|r| tokenize(r));
    let required = move || rules.with(|r| interpret(r).required);

    view! {
        <div class="flex flex-wrap items-center gap-1 mt-2 min-h-[1.25rem]">
            {move || required().then(|| view! {
                <span class="px-2 py-0.5 text-xs rounded bg-amber-100 text-amber-800">"required"</span>
            })}
            {move || {
                tokens()
                    .into_iter()
                    .map(|token| view! {
                        <span class="px-2 py-0.5 text-xs rounded bg-gray-100 text-gray-600 font-mono">
                            {describe(&token)}
                        </span>
                    })
                    .collect_view()
            }}
        </div>
    }
}

fn describe(token: &RuleToken) -> String {
    if token.args.is_empty() {
        return token.name.clone();
    }
    let args: Vec<String> = token
        .args
        .iter()
        .map(|arg| match arg {
            RuleArg::Number(n) => n.to_string(),
            RuleArg::Text(t) => format!("\"{}\"", t),
        })
        .collect();
    format!("{}({})", token.name, args.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_tokens() {
        let tokens = tokenize("email() | min(3) | regex('^a')");
        let described: Vec<_> = tokens.iter().map(describe).collect();
        assert_eq!(described, vec!["email", "min(3)", "regex(\"^a\")"]);
    }
}
