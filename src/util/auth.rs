//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes that require a signed-in user apply identical redirect behavior:
//! wait for the startup token check, then send anonymous visitors to the
//! landing page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::navigation::{Navigator, Page};

/// Whether a protected page should bounce the visitor.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && state.user.is_none()
}

/// Whether a protected page may render its content. Only a confirmed user
/// counts, so the server render never shows the page to a visitor it cannot
/// identify.
pub fn can_render_protected(state: &SessionState) -> bool {
    state.user.is_some()
}

/// Redirect to the landing page whenever the session has loaded and no user
/// is present.
pub fn install_unauth_redirect<N>(state: RwSignal<SessionState>, navigator: N)
where
    N: Navigator + 'static,
{
    Effect::new(move || {
        if state.with(should_redirect_unauth) {
            navigator.navigate(Page::Landing);
        }
    });
}
