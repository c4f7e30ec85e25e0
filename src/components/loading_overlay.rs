//! Full-screen overlay with a spinner, shown while a request blocks the form.

use leptos::prelude::*;

#[component]
pub fn LoadingOverlay(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <div
            class="absolute inset-0 z-10 items-center justify-center bg-black/60"
            class:flex=move || visible.get()
            class:hidden=move || !visible.get()
            aria-hidden=move || (!visible.get()).to_string()
        >
            <div
                class="h-[120px] w-[120px] animate-spin rounded-full border-[16px] border-white border-t-transparent"
                role="status"
                aria-live="polite"
                aria-label="Loading"
            ></div>
        </div>
    }
}
