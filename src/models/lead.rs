use rusqlite::{Connection, params};

/// Lead option for the attendee picker.
#[derive(Debug, Clone)]
pub struct LeadOption {
    pub id: i64,
    pub label: String,
    pub email: String,
}

const SELECT_LEAD: &str = "\
    SELECT e.id, e.label, COALESCE(p_email.value, '') AS email \
    FROM entities e \
    LEFT JOIN entity_properties p_email ON e.id = p_email.entity_id AND p_email.key = 'email' \
    WHERE e.entity_type = 'lead'";

fn row_to_lead(row: &rusqlite::Row) -> rusqlite::Result<LeadOption> {
    Ok(LeadOption {
        id: row.get("id")?,
        label: row.get("label")?,
        email: row.get("email")?,
    })
}

pub fn find_all(conn: &Connection) -> rusqlite::Result<Vec<LeadOption>> {
    let sql = format!("{SELECT_LEAD} ORDER BY e.label");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], row_to_lead)?.collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn find_by_ids(conn: &Connection, ids: &[i64]) -> rusqlite::Result<Vec<LeadOption>> {
    if ids.is_empty() {
        return Ok(vec![]);
    }
    let placeholders = ids.iter().map(|_| "?").collect::<Vec<_>>().join(", ");
    let sql = format!("{SELECT_LEAD} AND e.id IN ({placeholders}) ORDER BY e.label");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(rusqlite::params_from_iter(ids.iter()), row_to_lead)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn create(conn: &Connection, label: &str, email: &str) -> rusqlite::Result<i64> {
    let name = label.to_lowercase().replace(' ', "-");
    conn.execute(
        "INSERT INTO entities (entity_type, name, label) VALUES ('lead', ?1, ?2)",
        params![name, label],
    )?;
    let id = conn.last_insert_rowid();
    crate::models::entity::set_property(conn, id, "email", email)?;
    Ok(id)
}
