/// Form structures for the meeting pages.
///
/// The attendee multi-selects and the delete confirmation post their id sets
/// through CSV hidden inputs kept in sync by the page script.

use serde::Deserialize;

fn parse_id_csv(csv: &str) -> Vec<i64> {
    csv.split(',').filter_map(|s| s.trim().parse().ok()).collect()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeetingForm {
    #[serde(default)]
    pub agenda: String,
    #[serde(default)]
    pub related: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date_time: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub attendes: String,
    #[serde(default)]
    pub attendes_lead: String,
    #[serde(default)]
    pub create_by: i64,
}

impl MeetingForm {
    pub fn attendee_ids(&self) -> Vec<i64> {
        parse_id_csv(&self.attendes)
    }

    pub fn attendee_lead_ids(&self) -> Vec<i64> {
        parse_id_csv(&self.attendes_lead)
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteManyForm {
    #[serde(default)]
    pub ids: String,
}

impl DeleteManyForm {
    pub fn id_list(&self) -> Vec<i64> {
        parse_id_csv(&self.ids)
    }
}
