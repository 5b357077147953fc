//! Form helpers shared by the pages and dialogs.

use leptos::*;

/// Text input showing `value` and reporting edits to `on_input`
pub fn bound_input(
    placeholder: &'static str,
    kind: &'static str,
    value: impl Fn() -> String + 'static,
    on_input: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <input
            type=kind
            placeholder=placeholder
            prop:value=value
            on:input=move |ev| on_input(event_target_value(&ev))
            class="w-full bg-gray-700 rounded-lg px-4 py-2 border border-gray-600 focus:border-primary-500 focus:outline-none"
        />
    }
}

/// Browser confirm dialog; false when unavailable
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
