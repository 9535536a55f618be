use rusqlite::{Connection, params};

/// Contact option for the attendee picker.
#[derive(Debug, Clone)]
pub struct ContactOption {
    pub id: i64,
    pub label: String,
    pub email: String,
}

const SELECT_CONTACT: &str = "\
    SELECT e.id, e.label, COALESCE(p_email.value, '') AS email \
    FROM entities e \
    LEFT JOIN entity_properties p_email ON e.id = p_email.entity_id AND p_email.key = 'email' \
    WHERE e.entity_type = 'contact'";

fn row_to_contact(row: &rusqlite::Row) -> rusqlite::Result<ContactOption> {
    Ok(ContactOption {
        id: row.get("id")?,
        label: row.get("label")?,
        email: row.get("email")?,
    })
}

pub fn find_all(conn: &Connection) -> rusqlite::Result<Vec<ContactOption>> {
    let sql = format!("{SELECT_CONTACT} ORDER BY e.label");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], row_to_contact)?.collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn find_by_ids(conn: &Connection, ids: &[i64]) -> rusqlite::Result<Vec<ContactOption>> {
    if ids.is_empty() {
        return Ok(vec![]);
    }
    let placeholders = ids.iter().map(|_| "?").collect::<Vec<_>>().join(", ");
    let sql = format!("{SELECT_CONTACT} AND e.id IN ({placeholders}) ORDER BY e.label");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(rusqlite::params_from_iter(ids.iter()), row_to_contact)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn create(conn: &Connection, label: &str, email: &str) -> rusqlite::Result<i64> {
    let name = label.to_lowercase().replace(' ', "-");
    conn.execute(
        "INSERT INTO entities (entity_type, name, label) VALUES ('contact', ?1, ?2)",
        params![name, label],
    )?;
    let id = conn.last_insert_rowid();
    crate::models::entity::set_property(conn, id, "email", email)?;
    Ok(id)
}
