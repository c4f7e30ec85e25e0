//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionProvider` owns the state signal and rehydrates it once from the
//! `token` cookie. Views call `use_session()` to get a `Session` handle that
//! pairs that signal with the cookie store and the router, and mutate the
//! session only through its methods.
//!
//! A stored token that the server rejects, or that cannot be checked because
//! the request failed, is discarded and the user is sent to the landing page.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::AccountApi;
use crate::net::types::User;
use crate::util::cookie::{CookieTokenStore, TOKEN_COOKIE, TokenStore, cookie_header, read_cookie};
use crate::util::navigation::{Navigator, Page};

/// In-memory session: the signed-in user and whether the startup token check
/// is still in flight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    /// Initial state for a page load; guards wait while a stored token is checked.
    pub fn initial(has_stored_token: bool) -> Self {
        Self {
            user: None,
            loading: has_stored_token,
        }
    }

    /// Initial state derived from a raw cookie string. The server render and
    /// the hydrating browser both start here, so their first renders agree.
    pub fn from_cookie_header(header: Option<&str>) -> Self {
        Self::initial(header.and_then(|header| read_cookie(header, TOKEN_COOKIE)).is_some())
    }
}

/// Handle over the session state with the side effects its operations need.
#[derive(Clone)]
pub struct Session<T, N> {
    state: RwSignal<SessionState>,
    tokens: T,
    navigator: N,
}

impl<T, N> Session<T, N>
where
    T: TokenStore,
    N: Navigator,
{
    pub fn new(state: RwSignal<SessionState>, tokens: T, navigator: N) -> Self {
        Self {
            state,
            tokens,
            navigator,
        }
    }

    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|state| state.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|state| state.user.is_some())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|state| state.loading)
    }

    /// Restores the user from the stored token, if there is one.
    pub async fn load_from_token<A: AccountApi>(&self, api: &A) {
        let Some(token) = self.tokens.get() else {
            self.state.update(|state| state.loading = false);
            return;
        };

        self.state.update(|state| state.loading = true);
        match api.fetch_user(&token).await {
            Ok(Some(user)) => self.state.update(|state| {
                state.user = Some(user);
                state.loading = false;
            }),
            Ok(None) => {
                log::warn!("stored session token was rejected");
                self.discard();
            }
            Err(err) => {
                log::warn!("session check failed, signing out: {err}");
                self.discard();
            }
        }
    }

    /// Adopts a user the server just authenticated.
    pub fn login(&self, user: User) {
        self.sign_in(user);
    }

    /// Adopts a user the server just created.
    pub fn register(&self, user: User) {
        self.sign_in(user);
    }

    /// Forgets the session locally. The server is not told.
    pub fn logout(&self) {
        self.tokens.remove();
        self.state.update(|state| {
            state.user = None;
            state.loading = false;
        });
        self.navigator.navigate(Page::Landing);
    }

    /// Replaces any persisted token with `token`.
    pub fn store_token(&self, token: &str) {
        self.tokens.remove();
        self.tokens.set(token);
    }

    fn sign_in(&self, user: User) {
        self.state.update(|state| {
            state.user = Some(user);
            state.loading = false;
        });
        self.navigator.navigate(Page::Dashboard);
    }

    fn discard(&self) {
        self.tokens.remove();
        self.state.update(|state| {
            state.user = None;
            state.loading = false;
        });
        self.navigator.navigate(Page::Landing);
    }
}

/// Provides the session state and rehydrates it once on mount.
/// Must be rendered inside the `Router`.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let state = RwSignal::new(SessionState::from_cookie_header(cookie_header().as_deref()));
    provide_context(state);

    #[cfg(feature = "hydrate")]
    {
        let session = use_session();
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpAccountApi::default();
            session.load_from_token(&api).await;
        });
    }

    children()
}

/// Builds a `Session` for the current view from the provided state, the
/// cookie store, and the router.
pub fn use_session() -> Session<CookieTokenStore, impl Fn(&str) + Clone + 'static> {
    let state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let navigator = move |path: &str| navigate(path, NavigateOptions::default());
    Session::new(state, CookieTokenStore, navigator)
}
