/// Soft-delete state of a record. Stored as a `deleted` property on the
/// entity; flagged records stay in the store but drop out of list results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    Active,
    Deleted,
}

impl RecordState {
    pub fn from_flag(value: &str) -> Self {
        if value == "true" {
            RecordState::Deleted
        } else {
            RecordState::Active
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, RecordState::Deleted)
    }
}

/// Which attendee set is meaningful for a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelatedTo {
    None,
    Contact,
    Lead,
}

impl RelatedTo {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "None" => Some(RelatedTo::None),
            "Contact" => Some(RelatedTo::Contact),
            "Lead" => Some(RelatedTo::Lead),
            _ => Option::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RelatedTo::None => "None",
            RelatedTo::Contact => "Contact",
            RelatedTo::Lead => "Lead",
        }
    }
}

/// Creator of a meeting, joined from the `created_by` relation.
#[derive(Debug, Clone)]
pub struct Creator {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub deleted: bool,
}

impl Creator {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A meeting as read back from the store, creator populated.
#[derive(Debug, Clone)]
pub struct MeetingRecord {
    pub id: i64,
    pub agenda: String,
    pub location: String,
    pub related: RelatedTo,
    pub date_time: String,
    pub notes: String,
    pub created_date: String,
    pub state: RecordState,
    pub created_by: Creator,
    pub attendee_ids: Vec<i64>,
    pub attendee_lead_ids: Vec<i64>,
}

/// Fields for a new meeting. `created_date` is stamped by the caller,
/// never taken from client input.
pub struct NewMeeting<'a> {
    pub agenda: &'a str,
    pub location: &'a str,
    pub related: RelatedTo,
    pub date_time: &'a str,
    pub notes: &'a str,
    pub created_date: &'a str,
    pub created_by: i64,
    pub attendes: &'a [i64],
    pub attendes_lead: &'a [i64],
}
