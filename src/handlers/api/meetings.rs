use std::collections::HashMap;

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::meeting::{self, NewMeeting, RelatedTo};
use crate::models::user;
use crate::templates_structs::{
    ApiDeleteManyResponse, ApiDeleteResponse, ApiErrorResponse, ApiMeetingRequest,
    ApiMeetingResponse,
};
use crate::validate;

/// GET /api/meeting/ - list non-deleted meetings.
/// Query params become whitelisted property-equality filters; `deleted=false`
/// is always forced and rows whose creator no longer resolves are dropped.
pub async fn index(
    pool: web::Data<DbPool>,
    query: web::Query<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let meetings = meeting::find_visible(&conn, &query.into_inner())?;
    let items: Vec<ApiMeetingResponse> = meetings.into_iter().map(ApiMeetingResponse::from).collect();
    Ok(HttpResponse::Ok().json(items))
}

/// POST /api/meeting/add - create a meeting.
/// The server stamps `createdDate`; validation failure returns 400. Past
/// dateTime values are not re-rejected here — that check belongs to the form
/// layer, matching the original controller.
pub async fn add(
    pool: web::Data<DbPool>,
    body: web::Json<ApiMeetingRequest>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;

    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&body.agenda, "Agenda", 200));
    errors.extend(validate::validate_optional(&body.location, "Location", 200));
    errors.extend(validate::validate_optional(&body.notes, "Notes", 2000));

    let related = RelatedTo::parse(&body.related);
    if related.is_none() {
        errors.push("Related must be one of None, Contact, Lead".to_string());
    }
    if let Err(e) = validate::parse_date_time(&body.date_time) {
        errors.push(e);
    }
    let creator = user::find_display_by_id(&conn, body.create_by)?;
    if creator.is_none() {
        errors.push("Create By must reference an existing user".to_string());
    }

    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiErrorResponse {
            error: "Failed to create meeting".to_string(),
            details: Some(errors.join("; ")),
        }));
    }

    let created_date = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
    // Store failures on create collapse to 400, like every other failure on
    // this path (e.g. an attendee id that doesn't resolve).
    let id = match meeting::create(
        &conn,
        &NewMeeting {
            agenda: body.agenda.trim(),
            location: body.location.trim(),
            related: related.unwrap_or(RelatedTo::None),
            date_time: &body.date_time,
            notes: body.notes.trim(),
            created_date: &created_date,
            created_by: body.create_by,
            attendes: &body.attendes,
            attendes_lead: &body.attendes_lead,
        },
    ) {
        Ok(id) => id,
        Err(e) => {
            log::error!("Failed to create meeting: {e}");
            return Ok(HttpResponse::BadRequest().json(ApiErrorResponse {
                error: "Failed to create meeting".to_string(),
                details: None,
            }));
        }
    };

    let created = meeting::find_by_id(&conn, id)?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(ApiMeetingResponse::from(created)))
}

/// GET /api/meeting/view/{id} - fetch one record regardless of deleted flag.
pub async fn view(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let meeting = meeting::find_by_id(&conn, path.into_inner())?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(ApiMeetingResponse::from(meeting)))
}

/// DELETE /api/meeting/delete/{id} - soft-delete one record.
/// Returns 200 with the pre-update record; unknown ids still answer 200 with
/// a null record, as the original controller did.
pub async fn delete_one(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let id = path.into_inner();
    let before = meeting::find_by_id(&conn, id)?;
    meeting::mark_deleted(&conn, id)?;
    Ok(HttpResponse::Ok().json(ApiDeleteResponse {
        message: "Meeting deleted successfully".to_string(),
        meeting: before.map(ApiMeetingResponse::from),
    }))
}

/// POST /api/meeting/deleteMany - soft-delete a set of ids in one update.
pub async fn delete_many(
    pool: web::Data<DbPool>,
    body: web::Json<Vec<i64>>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let modified = meeting::mark_deleted_many(&conn, &body)?;
    Ok(HttpResponse::Ok().json(ApiDeleteManyResponse {
        message: "Meetings deleted successfully".to_string(),
        modified,
    }))
}
