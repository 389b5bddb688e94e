use petvote_client::{ClientConfig, ConfigError};

#[test]
fn empty_base_url_is_missing() {
    assert_eq!(ClientConfig::new(""), Err(ConfigError::Missing));
    assert_eq!(ClientConfig::new("   "), Err(ConfigError::Missing));
}

#[test]
fn unset_env_var_is_missing() {
    assert_eq!(
        ClientConfig::from_env("PETVOTE_TEST_UNSET_BASE_URL"),
        Err(ConfigError::Missing)
    );
}

#[test]
fn garbage_base_url_is_invalid() {
    assert!(matches!(
        ClientConfig::new("not a url"),
        Err(ConfigError::Invalid { .. })
    ));
}

#[test]
fn non_http_scheme_is_invalid() {
    assert!(matches!(
        ClientConfig::new("ftp://example.com"),
        Err(ConfigError::Invalid { .. })
    ));
}

#[test]
fn endpoints_resolve_under_the_base() {
    let config = ClientConfig::new("http://localhost:8000").expect("valid");

    assert_eq!(
        config.vote_endpoint().as_str(),
        "http://localhost:8000/api/vote"
    );
    assert_eq!(
        config.results_endpoint().as_str(),
        "http://localhost:8000/api/results"
    );
}

#[test]
fn base_path_without_trailing_slash_is_kept() {
    let config = ClientConfig::new("http://host.example/app").expect("valid");

    assert_eq!(
        config.vote_endpoint().as_str(),
        "http://host.example/app/api/vote"
    );
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let config = ClientConfig::new("  http://localhost:8000  ").expect("valid");

    assert_eq!(config.base_url().as_str(), "http://localhost:8000/");
}
