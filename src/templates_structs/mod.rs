// Template context structures for askama templates, plus the JSON DTOs the
// REST controller speaks.

use actix_session::Session;
use rusqlite::Connection;

use crate::flash::take_flash;
use crate::models::setting;

mod api;
mod meeting;

pub use self::api::{
    ApiCreatorResponse, ApiDeleteManyResponse, ApiDeleteResponse, ApiErrorResponse,
    ApiMeetingRequest, ApiMeetingResponse,
};
pub use self::meeting::{MeetingDetailTemplate, MeetingsListTemplate};

/// Common context shared by all pages.
pub struct PageContext {
    pub app_name: String,
    pub flash: Option<String>,
}

impl PageContext {
    pub fn build(session: &Session, conn: &Connection) -> Self {
        let app_name = setting::get_value(conn, "app.name", "MiniCRM");
        let flash = take_flash(session);
        Self { app_name, flash }
    }
}
