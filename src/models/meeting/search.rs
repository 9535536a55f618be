use serde::Deserialize;

use super::types::MeetingRecord;
use crate::validate;

/// Advanced-search criteria. Applied to an already-fetched record set, never
/// pushed into the store query. All fields optional; an all-empty criteria is
/// a no-op for the caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub agenda: String,
    #[serde(default)]
    pub create_by: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub time_start_date: String,
    #[serde(default)]
    pub time_end_date: String,
}

fn date_part(value: &str) -> &str {
    value.get(..10).unwrap_or("")
}

impl SearchCriteria {
    pub fn is_empty(&self) -> bool {
        self.agenda.trim().is_empty()
            && self.create_by.trim().is_empty()
            && self.start_date.is_empty()
            && self.end_date.is_empty()
            && self.time_start_date.is_empty()
            && self.time_end_date.is_empty()
    }

    /// Validate field shapes and range ordering. An empty criteria passes.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.create_by.trim().is_empty() {
            if let Some(e) = validate::validate_email(&self.create_by) {
                errors.push(format!("Created By: {e}"));
            }
        }

        errors.extend(validate_range(
            &self.start_date,
            &self.end_date,
            "End Date must be after Start Date",
        ));
        errors.extend(validate_range(
            &self.time_start_date,
            &self.time_end_date,
            "Time End Date must be after Time Start Date",
        ));

        errors
    }

    /// Filter the fetched set. Agenda matches case-insensitively as a
    /// substring, creator by email, the date pair bounds the meeting's
    /// scheduled date and the time pair its creation date (bounds inclusive,
    /// open ends allowed).
    pub fn apply(&self, records: &[MeetingRecord]) -> Vec<MeetingRecord> {
        let agenda = self.agenda.trim().to_lowercase();
        let create_by = self.create_by.trim();

        records
            .iter()
            .filter(|m| {
                if !agenda.is_empty() && !m.agenda.to_lowercase().contains(&agenda) {
                    return false;
                }
                if !create_by.is_empty() && !m.created_by.email.eq_ignore_ascii_case(create_by) {
                    return false;
                }
                if !in_range(date_part(&m.date_time), &self.start_date, &self.end_date) {
                    return false;
                }
                if !in_range(
                    date_part(&m.created_date),
                    &self.time_start_date,
                    &self.time_end_date,
                ) {
                    return false;
                }
                true
            })
            .cloned()
            .collect()
    }

    /// Human-readable chips for the active filters: one per non-empty field,
    /// one per date pair with 'Any' standing in for an open bound.
    pub fn tags(&self) -> Vec<String> {
        let mut tags = Vec::new();
        if !self.agenda.trim().is_empty() {
            tags.push(self.agenda.trim().to_string());
        }
        if !self.create_by.trim().is_empty() {
            tags.push(self.create_by.trim().to_string());
        }
        tags.extend(range_tag(&self.start_date, &self.end_date));
        tags.extend(range_tag(&self.time_start_date, &self.time_end_date));
        tags
    }
}

fn validate_range(start: &str, end: &str, order_message: &str) -> Vec<String> {
    let mut errors = Vec::new();
    let start_parsed = if start.is_empty() {
        Ok(Option::None)
    } else {
        validate::parse_date(start).map(Some)
    };
    let end_parsed = if end.is_empty() {
        Ok(Option::None)
    } else {
        validate::parse_date(end).map(Some)
    };

    match (&start_parsed, &end_parsed) {
        (Ok(Some(s)), Ok(Some(e))) if e < s => errors.push(order_message.to_string()),
        _ => {}
    }
    if let Err(e) = start_parsed {
        errors.push(e);
    }
    if let Err(e) = end_parsed {
        errors.push(e);
    }
    errors
}

/// ISO date strings compare lexically, so the bound checks stay string-level.
fn in_range(value: &str, start: &str, end: &str) -> bool {
    if start.is_empty() && end.is_empty() {
        return true;
    }
    if value.is_empty() {
        return false;
    }
    if !start.is_empty() && value < start {
        return false;
    }
    if !end.is_empty() && value > end {
        return false;
    }
    true
}

fn range_tag(start: &str, end: &str) -> Option<String> {
    if start.is_empty() && end.is_empty() {
        return None;
    }
    let from = if start.is_empty() { "Any" } else { start };
    let to = if end.is_empty() { "Any" } else { end };
    Some(format!("From: {from} To: {to}"))
}
