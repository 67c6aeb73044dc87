use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Length is counted in chars, and the cut lands on a char boundary, so
/// CJK team names and messages from the server never split a codepoint.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Every server-supplied string goes through here before it reaches the
/// terminal. Control characters (including escape) are stripped so a
/// hostile team name or message cannot inject terminal sequences.
pub fn sanitize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

/// Display-only calendar date for a backend timestamp. The raw value is
/// never mutated or sent back; unparseable input is shown as received
/// (sanitized).
pub fn format_expiry(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%Y-%m-%d").to_string();
    }
    // Backends without timezone info send bare ISO timestamps
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return parsed.format("%Y-%m-%d").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%Y-%m-%d").to_string();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed.format("%Y-%m-%d").to_string();
    }
    sanitize(raw)
}
