use askama::Template;

use super::PageContext;
use crate::access::ModuleAccess;
use crate::handlers::meeting_handlers::MeetingForm;
use crate::models::contact::ContactOption;
use crate::models::lead::LeadOption;
use crate::models::meeting::search::SearchCriteria;
use crate::models::meeting::MeetingRecord;

#[derive(Template)]
#[template(path = "meetings/list.html")]
pub struct MeetingsListTemplate {
    pub ctx: PageContext,
    pub access: ModuleAccess,
    pub meetings: Vec<MeetingRecord>,
    /// Active-filter chips; empty when no search is applied.
    pub tags: Vec<String>,
    pub search_active: bool,
    pub search: SearchCriteria,
    pub search_errors: Vec<String>,
    pub search_open: bool,
    /// Add-form state: values are kept across a failed submit.
    pub form: MeetingForm,
    pub form_errors: Vec<String>,
    pub form_open: bool,
    pub contacts: Vec<ContactOption>,
    pub leads: Vec<LeadOption>,
    pub current_user_id: i64,
    /// Lower bound for the datetime-local input.
    pub min_date_time: String,
}

#[derive(Template)]
#[template(path = "meetings/detail.html")]
pub struct MeetingDetailTemplate {
    pub ctx: PageContext,
    pub meeting: MeetingRecord,
    pub attendees: Vec<ContactOption>,
    pub attendee_leads: Vec<LeadOption>,
}
