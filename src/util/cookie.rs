//! Session token persistence in the `token` browser cookie.
//!
//! The cookie is written from script (not `HttpOnly`) because the front end
//! reads it back on load to rehydrate the session. Values are percent-encoded.
//! In the browser the store reads `document.cookie`; during server rendering
//! it reads the request's `Cookie` header so both renders start from the same
//! session state. Writes only happen in the browser.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use cookie::{Cookie, SameSite};
use time::{Duration, OffsetDateTime};

/// Name of the cookie holding the session token.
pub const TOKEN_COOKIE: &str = "token";

/// Where the session token is persisted between page loads.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn remove(&self);
}

/// `TokenStore` backed by `document.cookie` (or the request headers on SSR).
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieTokenStore;

impl TokenStore for CookieTokenStore {
    fn get(&self) -> Option<String> {
        read_cookie(&cookie_header()?, TOKEN_COOKIE)
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = html_document() {
                if doc.set_cookie(&set_cookie_string(TOKEN_COOKIE, token)).is_err() {
                    log::warn!("failed to write session cookie");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn remove(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = html_document() {
                let _ = doc.set_cookie(&expired_cookie_string(TOKEN_COOKIE));
            }
        }
    }
}

/// Raw cookie string visible to the current render: `document.cookie` in the
/// browser, the request's `Cookie` headers during server rendering.
#[cfg(feature = "hydrate")]
pub fn cookie_header() -> Option<String> {
    html_document()?.cookie().ok()
}

#[cfg(all(feature = "ssr", not(feature = "hydrate")))]
pub fn cookie_header() -> Option<String> {
    let parts = leptos::prelude::use_context::<axum::http::request::Parts>()?;
    request_cookie_header(&parts.headers)
}

#[cfg(not(any(feature = "hydrate", feature = "ssr")))]
pub fn cookie_header() -> Option<String> {
    None
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

/// Joins every `Cookie` request header into one `document.cookie` style string.
#[cfg(feature = "ssr")]
pub fn request_cookie_header(headers: &axum::http::HeaderMap) -> Option<String> {
    let values: Vec<&str> = headers
        .get_all(axum::http::header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();
    if values.is_empty() { None } else { Some(values.join("; ")) }
}

/// Looks up `name` in a `document.cookie` style header, percent-decoding the
/// value. Malformed pairs are skipped and empty values count as absent.
pub fn read_cookie(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_owned())
        .filter(|value| !value.is_empty())
}

/// Cookie assignment that stores `value` for the whole site.
pub fn set_cookie_string(name: &str, value: &str) -> String {
    Cookie::build((name, value))
        .path("/")
        .same_site(SameSite::Lax)
        .build()
        .encoded()
        .to_string()
}

/// Cookie assignment that expires `name` immediately.
pub fn expired_cookie_string(name: &str) -> String {
    Cookie::build((name, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build()
        .encoded()
        .to_string()
}
