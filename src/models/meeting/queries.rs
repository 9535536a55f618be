use std::collections::HashMap;

use rusqlite::{Connection, params};

use super::filter;
use super::types::*;
use crate::models::{entity, relation};

/// Base SELECT for meeting reads: properties flattened, creator joined via the
/// `created_by` relation, attendee id sets inlined as GROUP_CONCAT subqueries.
const MEETING_SELECT: &str = "\
SELECT e.id, \
       COALESCE(p_agenda.value, '') AS agenda, \
       COALESCE(p_loc.value, '') AS location, \
       COALESCE(p_rel.value, 'None') AS related, \
       COALESCE(p_dt.value, '') AS date_time, \
       COALESCE(p_notes.value, '') AS notes, \
       COALESCE(p_created.value, '') AS created_date, \
       COALESCE(p_del.value, 'false') AS deleted, \
       COALESCE(u.id, 0) AS created_by_id, \
       COALESCE(pu_first.value, '') AS created_by_first, \
       COALESCE(pu_last.value, '') AS created_by_last, \
       COALESCE(pu_email.value, '') AS created_by_email, \
       COALESCE(pu_del.value, 'false') AS created_by_deleted, \
       (SELECT COALESCE(GROUP_CONCAT(ra.target_id), '') FROM relations ra \
         WHERE ra.source_id = e.id \
           AND ra.relation_type_id = (SELECT id FROM entities WHERE entity_type = 'relation_type' AND name = 'has_attendee') \
       ) AS attendee_ids, \
       (SELECT COALESCE(GROUP_CONCAT(rl.target_id), '') FROM relations rl \
         WHERE rl.source_id = e.id \
           AND rl.relation_type_id = (SELECT id FROM entities WHERE entity_type = 'relation_type' AND name = 'has_attendee_lead') \
       ) AS attendee_lead_ids \
FROM entities e \
LEFT JOIN entity_properties p_agenda ON e.id = p_agenda.entity_id AND p_agenda.key = 'agenda' \
LEFT JOIN entity_properties p_loc ON e.id = p_loc.entity_id AND p_loc.key = 'location' \
LEFT JOIN entity_properties p_rel ON e.id = p_rel.entity_id AND p_rel.key = 'related' \
LEFT JOIN entity_properties p_dt ON e.id = p_dt.entity_id AND p_dt.key = 'date_time' \
LEFT JOIN entity_properties p_notes ON e.id = p_notes.entity_id AND p_notes.key = 'notes' \
LEFT JOIN entity_properties p_created ON e.id = p_created.entity_id AND p_created.key = 'created_date' \
LEFT JOIN entity_properties p_del ON e.id = p_del.entity_id AND p_del.key = 'deleted' \
LEFT JOIN relations r_creator ON e.id = r_creator.source_id \
    AND r_creator.relation_type_id = (SELECT id FROM entities WHERE entity_type = 'relation_type' AND name = 'created_by') \
LEFT JOIN entities u ON r_creator.target_id = u.id \
LEFT JOIN entity_properties pu_first ON u.id = pu_first.entity_id AND pu_first.key = 'first_name' \
LEFT JOIN entity_properties pu_last ON u.id = pu_last.entity_id AND pu_last.key = 'last_name' \
LEFT JOIN entity_properties pu_email ON u.id = pu_email.entity_id AND pu_email.key = 'email' \
LEFT JOIN entity_properties pu_del ON u.id = pu_del.entity_id AND pu_del.key = 'deleted' \
WHERE e.entity_type = 'meeting'";

fn parse_id_csv(csv: &str) -> Vec<i64> {
    let mut ids: Vec<i64> = csv
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();
    ids.sort_unstable();
    ids
}

fn row_to_meeting(row: &rusqlite::Row) -> rusqlite::Result<MeetingRecord> {
    Ok(MeetingRecord {
        id: row.get("id")?,
        agenda: row.get("agenda")?,
        location: row.get("location")?,
        related: RelatedTo::parse(&row.get::<_, String>("related")?).unwrap_or(RelatedTo::None),
        date_time: row.get("date_time")?,
        notes: row.get("notes")?,
        created_date: row.get("created_date")?,
        state: RecordState::from_flag(&row.get::<_, String>("deleted")?),
        created_by: Creator {
            id: row.get("created_by_id")?,
            first_name: row.get("created_by_first")?,
            last_name: row.get("created_by_last")?,
            email: row.get("created_by_email")?,
            deleted: row.get::<_, String>("created_by_deleted")? == "true",
        },
        attendee_ids: parse_id_csv(&row.get::<_, String>("attendee_ids")?),
        attendee_lead_ids: parse_id_csv(&row.get::<_, String>("attendee_lead_ids")?),
    })
}

/// Create a meeting entity with its properties and reference relations.
/// Empty optional fields are skipped (not stored as properties); the
/// soft-delete flag is always written out as `'false'`.
pub fn create(conn: &Connection, new: &NewMeeting) -> rusqlite::Result<i64> {
    let name = format!(
        "{}-{}",
        new.agenda.to_lowercase().replace(' ', "-"),
        new.date_time
    );
    let meeting_id = entity::create(conn, "meeting", &name, new.agenda)?;

    let props: Vec<(&str, &str)> = vec![
        ("agenda", new.agenda),
        ("related", new.related.as_str()),
        ("date_time", new.date_time),
        ("created_date", new.created_date),
        ("deleted", "false"),
        ("location", new.location),
        ("notes", new.notes),
    ];
    for (key, value) in props {
        if !value.is_empty() || matches!(key, "agenda" | "related" | "date_time" | "created_date" | "deleted") {
            conn.execute(
                "INSERT INTO entity_properties (entity_id, key, value) VALUES (?1, ?2, ?3)",
                params![meeting_id, key, value],
            )?;
        }
    }

    relation::create(conn, "created_by", meeting_id, new.created_by)?;
    for contact_id in new.attendes {
        relation::create(conn, "has_attendee", meeting_id, *contact_id)?;
    }
    for lead_id in new.attendes_lead {
        relation::create(conn, "has_attendee_lead", meeting_id, *lead_id)?;
    }

    Ok(meeting_id)
}

/// List meetings for display: soft-deleted records are excluded, the creator
/// must resolve, and creators flagged deleted drop their meetings from the
/// output (orphan filtering — rows are dropped, never errored).
/// `query` carries whitelisted property-equality filters (see `filter`).
pub fn find_visible(
    conn: &Connection,
    query: &HashMap<String, String>,
) -> rusqlite::Result<Vec<MeetingRecord>> {
    let (where_clause, filter_params) = filter::build_where(query);
    let sql = format!(
        "{MEETING_SELECT} \
         AND COALESCE(p_del.value, 'false') != 'true' \
         AND u.id IS NOT NULL \
         AND COALESCE(pu_del.value, 'false') != 'true' \
         AND ({where_clause}) \
         ORDER BY e.id"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(rusqlite::params_from_iter(filter_params.iter()), row_to_meeting)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Fetch one meeting by id regardless of its soft-delete state.
pub fn find_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<MeetingRecord>> {
    let sql = format!("{MEETING_SELECT} AND e.id = ?1");
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query_map(params![id], row_to_meeting)?;
    match rows.next() {
        Some(row) => Ok(Some(row?)),
        None => Ok(None),
    }
}

/// Flip the soft-delete flag on one meeting. Returns whether a record was
/// flagged (false for unknown ids — the caller still reports success, as the
/// original controller did).
pub fn mark_deleted(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    let n = conn.execute(
        "INSERT INTO entity_properties (entity_id, key, value) \
         SELECT id, 'deleted', 'true' FROM entities WHERE entity_type = 'meeting' AND id = ?1 \
         ON CONFLICT(entity_id, key) DO UPDATE SET value = 'true'",
        params![id],
    )?;
    Ok(n > 0)
}

/// Bulk soft delete. Flags exactly the given ids (ids that are not meetings
/// are ignored) and returns how many records were flagged.
pub fn mark_deleted_many(conn: &Connection, ids: &[i64]) -> rusqlite::Result<usize> {
    if ids.is_empty() {
        return Ok(0);
    }
    let placeholders = ids.iter().map(|_| "?").collect::<Vec<_>>().join(", ");
    let sql = format!(
        "INSERT INTO entity_properties (entity_id, key, value) \
         SELECT id, 'deleted', 'true' FROM entities WHERE entity_type = 'meeting' AND id IN ({placeholders}) \
         ON CONFLICT(entity_id, key) DO UPDATE SET value = 'true'"
    );
    let n = conn.execute(&sql, rusqlite::params_from_iter(ids.iter()))?;
    Ok(n)
}
