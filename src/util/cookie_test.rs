use super::*;

// =============================================================
// read_cookie
// =============================================================

#[test]
fn read_cookie_finds_named_value() {
    assert_eq!(
        read_cookie("theme=dark; token=abc; other=1", TOKEN_COOKIE),
        Some("abc".to_owned())
    );
}

#[test]
fn read_cookie_missing_or_empty_is_none() {
    assert_eq!(read_cookie("", TOKEN_COOKIE), None);
    assert_eq!(read_cookie("theme=dark", TOKEN_COOKIE), None);
    assert_eq!(read_cookie("token=", TOKEN_COOKIE), None);
}

#[test]
fn read_cookie_does_not_match_prefixes() {
    assert_eq!(read_cookie("xtoken=abc; token_old=def", TOKEN_COOKIE), None);
}

#[test]
fn read_cookie_decodes_percent_escapes() {
    assert_eq!(
        read_cookie("token=a%2Eb%3Dc", TOKEN_COOKIE),
        Some("a.b=c".to_owned())
    );
}

#[test]
fn read_cookie_keeps_equals_inside_value() {
    assert_eq!(
        read_cookie("token=eyJhbGciOi==", TOKEN_COOKIE),
        Some("eyJhbGciOi==".to_owned())
    );
}

#[test]
fn read_cookie_skips_malformed_pairs() {
    assert_eq!(
        read_cookie("junk; =nameless; token=abc", TOKEN_COOKIE),
        Some("abc".to_owned())
    );
}

// =============================================================
// Cookie assignment strings
// =============================================================

#[test]
fn set_cookie_string_is_site_wide_and_lax() {
    let parsed = Cookie::parse_encoded(set_cookie_string(TOKEN_COOKIE, "abc")).unwrap();
    assert_eq!(parsed.name(), TOKEN_COOKIE);
    assert_eq!(parsed.value(), "abc");
    assert_eq!(parsed.path(), Some("/"));
    assert_eq!(parsed.same_site(), Some(SameSite::Lax));
    assert_eq!(parsed.http_only(), None);
}

#[test]
fn set_cookie_string_encodes_separators() {
    let assignment = set_cookie_string(TOKEN_COOKIE, "a;b c");
    let pair = assignment.split(';').next().unwrap();
    assert!(!pair.contains(' '));
    assert_eq!(read_cookie(pair, TOKEN_COOKIE), Some("a;b c".to_owned()));
}

#[test]
fn expired_cookie_string_clears_value_in_the_past() {
    let parsed = Cookie::parse_encoded(expired_cookie_string(TOKEN_COOKIE)).unwrap();
    assert_eq!(parsed.name(), TOKEN_COOKIE);
    assert_eq!(parsed.value(), "");
    assert_eq!(parsed.path(), Some("/"));
    assert_eq!(parsed.max_age(), Some(Duration::ZERO));
    assert_eq!(parsed.expires_datetime(), Some(OffsetDateTime::UNIX_EPOCH));
}

#[test]
fn expired_cookie_reads_back_as_absent() {
    let assignment = expired_cookie_string(TOKEN_COOKIE);
    let pair = assignment.split(';').next().unwrap();
    assert_eq!(read_cookie(pair, TOKEN_COOKIE), None);
}

// =============================================================
// Request headers
// =============================================================

#[cfg(feature = "ssr")]
#[test]
fn request_headers_join_into_one_cookie_string() {
    use axum::http::{HeaderMap, HeaderValue, header::COOKIE};

    let mut headers = HeaderMap::new();
    headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
    headers.append(COOKIE, HeaderValue::from_static("token=abc"));

    let header = request_cookie_header(&headers).unwrap();
    assert_eq!(header, "theme=dark; token=abc");
    assert_eq!(read_cookie(&header, TOKEN_COOKIE), Some("abc".to_owned()));
}

#[cfg(feature = "ssr")]
#[test]
fn request_without_cookie_header_has_no_token() {
    assert_eq!(request_cookie_header(&axum::http::HeaderMap::new()), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn cookie_store_is_empty_without_browser_or_request() {
    let store = CookieTokenStore;
    store.set("abc");
    assert_eq!(store.get(), None);
    store.remove();
}
