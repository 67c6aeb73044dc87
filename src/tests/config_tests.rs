use std::fs;

use tempfile::tempdir;

use crate::config::Config;

#[test]
fn test_config_round_trip_through_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("config.json");

    let config = Config {
        base_url: Some("http://panel.example.com".to_string()),
        session_token: Some("abc123".to_string()),
        default_email: Some("admin@example.com".to_string()),
    };

    let serialized = serde_json::to_string_pretty(&config).expect("serializes");
    fs::write(&path, serialized).expect("writes");

    let content = fs::read_to_string(&path).expect("reads");
    let loaded: Config = serde_json::from_str(&content).expect("parses");

    assert_eq!(loaded.base_url.as_deref(), Some("http://panel.example.com"));
    assert_eq!(loaded.session_token.as_deref(), Some("abc123"));
    assert_eq!(loaded.default_email.as_deref(), Some("admin@example.com"));
}

#[test]
fn test_config_missing_fields_default_to_none() {
    let loaded: Config = serde_json::from_str("{}").expect("parses");
    assert!(loaded.base_url.is_none());
    assert!(loaded.session_token.is_none());
    assert!(loaded.default_email.is_none());
}

#[test]
fn test_corrupt_config_falls_back_to_default() {
    let loaded: Config = serde_json::from_str("not json").unwrap_or_default();
    assert!(loaded.base_url.is_none());
    assert!(loaded.session_token.is_none());
}
