use serde::{Deserialize, Serialize};

use crate::models::meeting::MeetingRecord;

/// Meeting response for the JSON API. Wire names match the original contract.
#[derive(Serialize, Debug, Clone)]
pub struct ApiMeetingResponse {
    pub id: i64,
    pub agenda: String,
    pub attendes: Vec<i64>,
    #[serde(rename = "attendesLead")]
    pub attendes_lead: Vec<i64>,
    pub location: String,
    pub related: String,
    #[serde(rename = "dateTime")]
    pub date_time: String,
    pub notes: String,
    #[serde(rename = "createBy")]
    pub create_by: ApiCreatorResponse,
    #[serde(rename = "createdDate")]
    pub created_date: String,
    pub deleted: bool,
}

/// Populated creator reference.
#[derive(Serialize, Debug, Clone)]
pub struct ApiCreatorResponse {
    pub id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
}

impl From<MeetingRecord> for ApiMeetingResponse {
    fn from(m: MeetingRecord) -> Self {
        ApiMeetingResponse {
            id: m.id,
            agenda: m.agenda,
            attendes: m.attendee_ids,
            attendes_lead: m.attendee_lead_ids,
            location: m.location,
            related: m.related.as_str().to_string(),
            date_time: m.date_time,
            notes: m.notes,
            create_by: ApiCreatorResponse {
                id: m.created_by.id,
                first_name: m.created_by.first_name,
                last_name: m.created_by.last_name,
                email: m.created_by.email,
            },
            created_date: m.created_date,
            deleted: m.state.is_deleted(),
        }
    }
}

/// Create request for the API. `createdDate` is not accepted from clients —
/// the server stamps it.
#[derive(Deserialize, Debug)]
pub struct ApiMeetingRequest {
    #[serde(default)]
    pub agenda: String,
    #[serde(default)]
    pub attendes: Vec<i64>,
    #[serde(default, rename = "attendesLead")]
    pub attendes_lead: Vec<i64>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub related: String,
    #[serde(default, rename = "dateTime")]
    pub date_time: String,
    #[serde(default)]
    pub notes: String,
    #[serde(rename = "createBy")]
    pub create_by: i64,
}

/// Single soft-delete response: message plus the pre-update record
/// (null when the id was unknown).
#[derive(Serialize, Debug)]
pub struct ApiDeleteResponse {
    pub message: String,
    pub meeting: Option<ApiMeetingResponse>,
}

/// Bulk soft-delete response: message plus the update summary.
#[derive(Serialize, Debug)]
pub struct ApiDeleteManyResponse {
    pub message: String,
    pub modified: usize,
}

/// API error response.
#[derive(Serialize, Debug)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
