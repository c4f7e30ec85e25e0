use super::*;

// =============================================================
// normalize_runtime_value
// =============================================================

#[test]
fn normalize_runtime_value_trims_and_rejects_empty() {
    assert_eq!(normalize_runtime_value(""), None);
    assert_eq!(normalize_runtime_value("   "), None);
    assert_eq!(
        normalize_runtime_value("  https://api.gym.example "),
        Some("https://api.gym.example".to_owned())
    );
}

// =============================================================
// apply_runtime_overrides
// =============================================================

#[test]
fn apply_runtime_overrides_ignores_missing_values() {
    let mut config = AppConfig {
        api_base_url: "https://api.default".to_owned(),
    };
    let runtime = RuntimeConfig {
        api_base_url: normalize_runtime_value("  "),
    };

    apply_runtime_overrides(&mut config, runtime);

    assert_eq!(config.api_base_url, "https://api.default");
}

#[test]
fn apply_runtime_overrides_overwrites_when_present() {
    let mut config = AppConfig {
        api_base_url: "https://api.default".to_owned(),
    };
    let runtime = RuntimeConfig {
        api_base_url: normalize_runtime_value("https://api.override"),
    };

    apply_runtime_overrides(&mut config, runtime);

    assert_eq!(config.api_base_url, "https://api.override");
}

// =============================================================
// URL building
// =============================================================

#[test]
fn build_url_joins_single_slash() {
    assert_eq!(
        build_url_with_base("http://localhost:4001/", "/user/getUser"),
        "http://localhost:4001/user/getUser"
    );
    assert_eq!(
        build_url_with_base("http://localhost:4001", "user/getUser"),
        "http://localhost:4001/user/getUser"
    );
}

#[test]
fn build_url_with_empty_base_keeps_path() {
    assert_eq!(build_url_with_base("  ", "/user/createAccount"), "/user/createAccount");
}

#[test]
fn load_without_overrides_uses_default_base() {
    let config = AppConfig::load();
    let expected = option_env!("GYM_TRACKER_API_BASE_URL")
        .and_then(normalize_runtime_value)
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
    assert_eq!(config.api_base_url, expected);
}

#[test]
fn endpoint_uses_configured_base() {
    let config = AppConfig {
        api_base_url: "https://api.gym.example".to_owned(),
    };
    assert_eq!(
        config.endpoint("/user/createAccount"),
        "https://api.gym.example/user/createAccount"
    );
}
