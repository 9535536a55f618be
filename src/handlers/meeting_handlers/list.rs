use std::collections::HashMap;

use actix_session::Session;
use actix_web::{HttpResponse, web};
use rusqlite::Connection;

use super::forms::MeetingForm;
use crate::access::ModuleAccess;
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::meeting::search::SearchCriteria;
use crate::models::{contact, lead, meeting, user};
use crate::templates_structs::{MeetingsListTemplate, PageContext};

/// Build the list page context with everything closed and unfiltered.
/// Handlers adjust the search/form state before rendering.
pub(crate) fn build_list_template(
    conn: &Connection,
    session: &Session,
    access: ModuleAccess,
) -> Result<MeetingsListTemplate, AppError> {
    let ctx = PageContext::build(session, conn);
    let meetings = meeting::find_visible(conn, &HashMap::new())?;
    let contacts = contact::find_all(conn)?;
    let leads = lead::find_all(conn)?;
    let current_user_id = user::find_default(conn)?.map(|u| u.id).unwrap_or(0);
    let min_date_time = chrono::Local::now().format("%Y-%m-%dT%H:%M").to_string();

    Ok(MeetingsListTemplate {
        ctx,
        access,
        meetings,
        tags: vec![],
        search_active: false,
        search: SearchCriteria::default(),
        search_errors: vec![],
        search_open: false,
        form: MeetingForm::default(),
        form_errors: vec![],
        form_open: false,
        contacts,
        leads,
        current_user_id,
        min_date_time,
    })
}

/// GET /meetings — the meeting list, with optional advanced-search params.
///
/// The search filters the already-fetched set in memory; it never narrows the
/// store query. Invalid criteria re-open the modal with errors and leave the
/// list unfiltered.
pub async fn list(
    pool: web::Data<DbPool>,
    session: Session,
    query: web::Query<SearchCriteria>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let access = ModuleAccess::load(&conn, "meetings");
    if !access.view {
        return Err(AppError::Forbidden);
    }

    let mut tmpl = build_list_template(&conn, &session, access)?;

    let criteria = query.into_inner();
    if !criteria.is_empty() {
        let errors = criteria.validate();
        if errors.is_empty() {
            tmpl.meetings = criteria.apply(&tmpl.meetings);
            tmpl.tags = criteria.tags();
            tmpl.search_active = true;
        } else {
            tmpl.search_errors = errors;
            tmpl.search_open = true;
        }
        tmpl.search = criteria;
    }

    render(tmpl)
}
