//! Inline messages for form errors. Messages must be safe to render and never
//! include tokens or passwords.

use leptos::prelude::*;

/// Form-level error banner.
#[component]
pub fn FormError(message: String) -> impl IntoView {
    view! { <p class="text-red-500" role="alert">{message}</p> }
}

/// Validation message under a single input.
#[component]
pub fn FieldMessage(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        {move || {
            message.get().map(|text| view! { <p class="text-sm text-red-400">{text}</p> })
        }}
    }
}
