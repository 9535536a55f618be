use chrono::NaiveDateTime;

/// Validate a required text field with a max length.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.len() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate an optional text field with a max length (empty is OK).
pub fn validate_optional(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.len() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate an email: must contain '@' and '.', max 254 chars.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if trimmed.len() > 254 {
        return Some("Email must be at most 254 characters".to_string());
    }
    if !trimmed.contains('@') || !trimmed.contains('.') {
        return Some("Email must be a valid address (contain '@' and '.')".to_string());
    }
    None
}

/// Parse a `datetime-local` value. Seconds are optional in the input.
pub fn parse_date_time(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .map_err(|_| "Date & Time must be in YYYY-MM-DDTHH:MM format".to_string())
}

/// Parse a date-only value (YYYY-MM-DD).
pub fn parse_date(value: &str) -> Result<chrono::NaiveDate, String> {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| "Date must be in YYYY-MM-DD format".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_empty_and_overlong() {
        assert!(validate_required("", "Agenda", 200).is_some());
        assert!(validate_required("   ", "Agenda", 200).is_some());
        assert!(validate_required(&"x".repeat(201), "Agenda", 200).is_some());
        assert!(validate_required("Standup", "Agenda", 200).is_none());
    }

    #[test]
    fn email_shape_check() {
        assert!(validate_email("not-an-email").is_some());
        assert!(validate_email("").is_some());
        assert!(validate_email("a@b.com").is_none());
    }

    #[test]
    fn date_time_accepts_with_and_without_seconds() {
        assert!(parse_date_time("2099-01-01T10:00").is_ok());
        assert!(parse_date_time("2099-01-01T10:00:30").is_ok());
        assert!(parse_date_time("2099-01-01").is_err());
        assert!(parse_date_time("garbage").is_err());
    }
}
