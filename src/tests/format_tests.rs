use crate::formatting::{format_expiry, sanitize, truncate};
use crate::models::TeamOption;

#[test]
fn test_truncate_short_string_unchanged() {
    assert_eq!(truncate("short", 10), "short");
}

#[test]
fn test_truncate_long_string_gets_ellipsis() {
    assert_eq!(truncate("a very long team name", 10), "a very ...");
}

#[test]
fn test_truncate_multibyte_on_char_boundary() {
    // CJK team names are the common case; the cut must never split a codepoint
    assert_eq!(truncate("团队名称团队名称团队名称", 10), "团队名称团队名...");
    assert_eq!(truncate("团队名称", 10), "团队名称");
    assert_eq!(truncate("équipe très longue", 10), "équipe ...");
}

#[test]
fn test_sanitize_strips_escape_sequences() {
    // A team name must not be able to smuggle terminal control sequences
    assert_eq!(sanitize("Team\x1b[31mRed\x07"), "Team[31mRed");
}

#[test]
fn test_sanitize_keeps_newlines_and_tabs() {
    assert_eq!(sanitize("line1\nline2\tend"), "line1\nline2\tend");
}

#[test]
fn test_format_expiry_rfc3339() {
    assert_eq!(format_expiry("2026-09-01T12:30:00Z"), "2026-09-01");
}

#[test]
fn test_format_expiry_naive_timestamp() {
    assert_eq!(format_expiry("2026-09-01T12:30:00"), "2026-09-01");
}

#[test]
fn test_format_expiry_bare_date() {
    assert_eq!(format_expiry("2026-09-01"), "2026-09-01");
}

#[test]
fn test_format_expiry_unparseable_shown_sanitized() {
    assert_eq!(format_expiry("soon\x1b[0m"), "soon[0m");
}

#[test]
fn test_team_display_name_fallback() {
    let team = TeamOption {
        id: 1,
        team_name: None,
        subscription_plan: None,
        current_members: 0,
        max_members: 0,
        expires_at: None,
    };
    assert_eq!(team.display_name(), "Unnamed team");
}
