use crate::error::{ErrorContext, PanelError};
use crate::panel_error;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found",
    ));

    let panel_result = result.context("Failed to read config file");
    assert!(panel_result.is_err());

    match panel_result {
        Err(PanelError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read config file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected PanelError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    let result = option.context("Session token not found");

    assert!(result.is_err());
    match result {
        Err(PanelError::Unknown(msg)) => {
            assert_eq!(msg, "Session token not found");
        }
        _ => panic!("Expected PanelError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied",
    ));

    let panel_result =
        result.with_context(|| format!("Failed to access file at path: {}", "/tmp/test.txt"));

    assert!(panel_result.is_err());
    match panel_result {
        Err(PanelError::Unknown(msg)) => {
            assert!(msg.contains("Failed to access file at path: /tmp/test.txt"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected PanelError::Unknown"),
    }
}

#[test]
fn test_panel_error_macro() {
    let error = panel_error!(ServerError, "Request failed");
    match error {
        PanelError::ServerError(msg) => assert_eq!(msg, "Request failed"),
        _ => panic!("Expected PanelError::ServerError"),
    }

    let error = panel_error!(InvalidInput, "'{}' is not a valid team id", "abc");
    match error {
        PanelError::InvalidInput(msg) => assert_eq!(msg, "'abc' is not a valid team id"),
        _ => panic!("Expected PanelError::InvalidInput"),
    }
}

#[test]
fn test_no_teams_available_message() {
    let error = PanelError::NoTeamsAvailable;
    assert_eq!(
        error.to_string(),
        "The code is valid but no team currently has a free seat"
    );
}

#[test]
fn test_not_authenticated_mentions_login() {
    let error = PanelError::NotAuthenticated;
    assert!(error.to_string().contains("teamgate auth login"));
}
