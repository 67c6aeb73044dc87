use serde_json::json;

use crate::client::normalize_response;
use crate::error::PanelError;
use crate::models::{ConfirmResponse, GenerateOutcome, ImportOutcome, VerifyResponse};

#[test]
fn test_normalize_passes_through_success_body() {
    let body = json!({ "success": true, "valid": true });
    let result = normalize_response(200, body.clone());
    assert_eq!(result.expect("2xx is ok"), body);
}

#[test]
fn test_normalize_prefers_error_field() {
    let body = json!({ "success": false, "error": "Code already used" });
    match normalize_response(400, body) {
        Err(PanelError::ServerError(msg)) => assert_eq!(msg, "Code already used"),
        other => panic!("Expected ServerError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_normalize_falls_back_to_detail_field() {
    // FastAPI-style validation failures put the message under "detail"
    let body = json!({ "detail": "Not authenticated" });
    match normalize_response(401, body) {
        Err(PanelError::ServerError(msg)) => assert_eq!(msg, "Not authenticated"),
        other => panic!("Expected ServerError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_normalize_generic_message_without_body() {
    match normalize_response(502, serde_json::Value::Null) {
        Err(PanelError::ServerError(msg)) => assert_eq!(msg, "Request failed (HTTP 502)"),
        other => panic!("Expected ServerError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_verify_response_defaults() {
    // A minimal invalid-code body leaves valid and teams at their defaults
    let body = json!({ "success": true, "reason": "expired" });
    let parsed: VerifyResponse = serde_json::from_value(body).expect("parses");
    assert!(parsed.success);
    assert!(!parsed.valid);
    assert!(parsed.teams.is_empty());
    assert_eq!(parsed.reason.as_deref(), Some("expired"));
}

#[test]
fn test_verify_response_team_order_is_preserved() {
    let body = json!({
        "success": true,
        "valid": true,
        "teams": [
            { "id": 7, "team_name": "Soonest", "subscription_plan": "pro",
              "current_members": 1, "max_members": 5, "expires_at": "2026-08-30T00:00:00" },
            { "id": 3, "team_name": "Later", "subscription_plan": "pro",
              "current_members": 0, "max_members": 5, "expires_at": "2026-12-01T00:00:00" }
        ]
    });
    let parsed: VerifyResponse = serde_json::from_value(body).expect("parses");
    assert_eq!(parsed.teams.iter().map(|t| t.id).collect::<Vec<_>>(), vec![7, 3]);
}

#[test]
fn test_confirm_response_with_team_info() {
    let body = json!({
        "success": true,
        "message": "Joined",
        "team_info": { "id": 7, "team_name": "Soonest", "expires_at": "2026-08-30T00:00:00" }
    });
    let parsed: ConfirmResponse = serde_json::from_value(body).expect("parses");
    assert!(parsed.success);
    let info = parsed.team_info.expect("team_info present");
    assert_eq!(info.team_name.as_deref(), Some("Soonest"));
}

#[test]
fn test_import_outcome_row_detail() {
    let body = json!({
        "success": true,
        "total": 2,
        "success_count": 1,
        "failed_count": 1,
        "results": [
            { "email": "a@b.com", "success": true, "message": "Imported" },
            { "email": "c@d.com", "success": false, "error": "Bad token" }
        ]
    });
    let parsed: ImportOutcome = serde_json::from_value(body).expect("parses");
    assert_eq!(parsed.results.len(), 2);
    assert_eq!(parsed.results[0].detail(), "Imported");
    assert_eq!(parsed.results[1].detail(), "Bad token");
}

#[test]
fn test_generate_outcome_single_and_batch_shapes() {
    let single = json!({ "success": true, "code": "ABCD-1234" });
    let parsed: GenerateOutcome = serde_json::from_value(single).expect("parses");
    assert_eq!(parsed.code.as_deref(), Some("ABCD-1234"));
    assert!(parsed.codes.is_empty());

    let batch = json!({ "success": true, "codes": ["A", "B", "C"], "total": 3 });
    let parsed: GenerateOutcome = serde_json::from_value(batch).expect("parses");
    assert!(parsed.code.is_none());
    assert_eq!(parsed.codes, vec!["A", "B", "C"]);
    assert_eq!(parsed.total, 3);
}
