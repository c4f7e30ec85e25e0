use super::*;
use serde_json::json;

// =============================================================
// classify_create_account
// =============================================================

#[test]
fn create_account_202_means_username_taken() {
    assert_eq!(
        classify_create_account(202, ""),
        Ok(CreateAccountOutcome::UsernameTaken)
    );
}

#[test]
fn create_account_200_returns_user_with_token() {
    let outcome = classify_create_account(200, r#"{"user":{"token":"abc","name":"X"}}"#).unwrap();
    let CreateAccountOutcome::Created(user) = outcome else {
        panic!("expected created outcome");
    };
    assert_eq!(user.token(), Some("abc"));
    assert_eq!(
        serde_json::to_value(&user).unwrap(),
        json!({ "name": "X", "token": "abc" })
    );
}

#[test]
fn create_account_200_with_garbage_body_is_parse_error() {
    assert!(matches!(
        classify_create_account(200, "<html>oops</html>"),
        Err(ApiError::Parse(_))
    ));
}

#[test]
fn create_account_other_status_is_http_error() {
    assert_eq!(
        classify_create_account(500, "database down"),
        Err(ApiError::Http {
            status: 500,
            message: "database down".to_owned(),
        })
    );
    assert!(matches!(
        classify_create_account(201, ""),
        Err(ApiError::Http { status: 201, .. })
    ));
}

// =============================================================
// classify_get_user
// =============================================================

#[test]
fn get_user_200_returns_user() {
    let user = classify_get_user(200, r#"{"user":{"username":"gonzu"}}"#)
        .unwrap()
        .expect("user present");
    assert_eq!(user.display_name(), Some("gonzu"));
}

#[test]
fn get_user_non_200_means_rejected_token() {
    assert_eq!(classify_get_user(401, "expired"), Ok(None));
    assert_eq!(classify_get_user(403, ""), Ok(None));
    assert_eq!(classify_get_user(204, ""), Ok(None));
}

#[test]
fn get_user_200_without_user_is_parse_error() {
    assert!(matches!(classify_get_user(200, "{}"), Err(ApiError::Parse(_))));
}

// =============================================================
// Request helpers
// =============================================================

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}

#[test]
fn map_request_error_detects_timeouts() {
    assert!(matches!(
        map_request_error("The operation was aborted."),
        ApiError::Timeout(_)
    ));
    assert!(matches!(
        map_request_error("TypeError: Failed to fetch"),
        ApiError::Network(_)
    ));
}

#[test]
fn endpoint_paths_are_rooted() {
    assert_eq!(CREATE_ACCOUNT_PATH, "/user/createAccount");
    assert_eq!(GET_USER_PATH, "/user/getUser");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_without_browser() {
    let api = HttpAccountApi::new(AppConfig {
        api_base_url: "http://localhost:4001".to_owned(),
    });
    let result = futures::executor::block_on(api.fetch_user("abc"));
    assert!(matches!(result, Err(ApiError::Config(_))));
}
