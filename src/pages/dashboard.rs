//! Dashboard page for signed-in users.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_panel::DashboardPanel;
use crate::state::session::SessionState;
use crate::util::auth::{can_render_protected, install_unauth_redirect};

/// Dashboard page. Shows the panel once a user is confirmed and redirects to
/// `/` once the session has loaded without one.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(state, move |path: &str| {
        navigate(path, NavigateOptions::default());
    });

    view! {
        <div class="flex min-h-[100dvh] items-center justify-center py-[50px]">
            <Show
                when=move || state.with(can_render_protected)
                fallback=|| view! { <p class="text-white">"Loading..."</p> }
            >
                <DashboardPanel/>
            </Show>
        </div>
    }
}
