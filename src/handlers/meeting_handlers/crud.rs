use actix_session::Session;
use actix_web::{HttpResponse, web};

use super::forms::{DeleteManyForm, MeetingForm};
use super::list::build_list_template;
use crate::access::ModuleAccess;
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::flash::set_flash;
use crate::models::meeting::{self, NewMeeting, RelatedTo};
use crate::models::{contact, lead, user};
use crate::templates_structs::{MeetingDetailTemplate, PageContext};
use crate::validate;

/// POST /meetings/add — create a meeting from the modal form.
///
/// This is the form boundary the original validated on the client: required
/// fields, the related enum, and a dateTime that must not precede now. On
/// failure the list re-renders with the modal open and the entered values
/// intact; on success the browser is redirected back, which is the refetch.
pub async fn create(
    pool: web::Data<DbPool>,
    session: Session,
    form: web::Form<MeetingForm>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let access = ModuleAccess::load(&conn, "meetings");
    if !access.create {
        return Err(AppError::Forbidden);
    }

    let form = form.into_inner();
    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&form.agenda, "Agenda", 200));
    errors.extend(validate::validate_optional(&form.location, "Location", 200));
    errors.extend(validate::validate_optional(&form.notes, "Notes", 2000));

    let related = RelatedTo::parse(&form.related);
    if related.is_none() {
        errors.push("Related To is required".to_string());
    }

    match validate::parse_date_time(&form.date_time) {
        Ok(dt) if dt < chrono::Local::now().naive_local() => {
            errors.push("Date & Time must not be in the past".to_string());
        }
        Ok(_) => {}
        Err(e) => errors.push(e),
    }

    let creator = user::find_display_by_id(&conn, form.create_by)?;
    if !creator.map(|u| !u.deleted).unwrap_or(false) {
        errors.push("No active account to attribute the meeting to".to_string());
    }

    if !errors.is_empty() {
        let mut tmpl = build_list_template(&conn, &session, access)?;
        tmpl.form = form;
        tmpl.form_errors = errors;
        tmpl.form_open = true;
        return render(tmpl);
    }

    let created_date = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
    meeting::create(
        &conn,
        &NewMeeting {
            agenda: form.agenda.trim(),
            location: form.location.trim(),
            related: related.unwrap_or(RelatedTo::None),
            date_time: &form.date_time,
            notes: form.notes.trim(),
            created_date: &created_date,
            created_by: form.create_by,
            attendes: &form.attendee_ids(),
            attendes_lead: &form.attendee_lead_ids(),
        },
    )?;

    set_flash(&session, "Meeting added successfully");
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/meetings"))
        .finish())
}

/// GET /meetings/{id} — read-only detail page. Soft-deleted records still
/// resolve here; only lists hide them.
pub async fn detail(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let access = ModuleAccess::load(&conn, "meetings");
    if !access.view {
        return Err(AppError::Forbidden);
    }

    let meeting = meeting::find_by_id(&conn, path.into_inner())?.ok_or(AppError::NotFound)?;
    let attendees = contact::find_by_ids(&conn, &meeting.attendee_ids)?;
    let attendee_leads = lead::find_by_ids(&conn, &meeting.attendee_lead_ids)?;

    let tmpl = MeetingDetailTemplate {
        ctx: PageContext::build(&session, &conn),
        meeting,
        attendees,
        attendee_leads,
    };
    render(tmpl)
}

/// POST /meetings/delete — soft-delete the staged id set (single-row deletes
/// post a one-element set). Success and failure both surface as a flash
/// message before redirecting back to the list.
pub async fn delete_many(
    pool: web::Data<DbPool>,
    session: Session,
    form: web::Form<DeleteManyForm>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let access = ModuleAccess::load(&conn, "meetings");
    if !access.delete {
        return Err(AppError::Forbidden);
    }

    let ids = form.id_list();
    match meeting::mark_deleted_many(&conn, &ids) {
        Ok(_) => set_flash(&session, "Meetings deleted successfully"),
        Err(e) => {
            log::error!("Failed to delete meetings: {e}");
            set_flash(&session, "Failed to delete meetings");
        }
    }

    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/meetings"))
        .finish())
}
