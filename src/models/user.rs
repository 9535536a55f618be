use rusqlite::{Connection, params};

/// Account record as shown in meeting lists ("Created By" column) and used to
/// attribute new records.
#[derive(Debug, Clone)]
pub struct UserDisplay {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub deleted: bool,
}

impl UserDisplay {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

const SELECT_USER: &str = "\
    SELECT e.id, \
           COALESCE(p_first.value, '') AS first_name, \
           COALESCE(p_last.value, '') AS last_name, \
           COALESCE(p_email.value, '') AS email, \
           COALESCE(p_del.value, 'false') AS deleted \
    FROM entities e \
    LEFT JOIN entity_properties p_first ON e.id = p_first.entity_id AND p_first.key = 'first_name' \
    LEFT JOIN entity_properties p_last ON e.id = p_last.entity_id AND p_last.key = 'last_name' \
    LEFT JOIN entity_properties p_email ON e.id = p_email.entity_id AND p_email.key = 'email' \
    LEFT JOIN entity_properties p_del ON e.id = p_del.entity_id AND p_del.key = 'deleted' \
    WHERE e.entity_type = 'user'";

fn row_to_user(row: &rusqlite::Row) -> rusqlite::Result<UserDisplay> {
    Ok(UserDisplay {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        email: row.get("email")?,
        deleted: row.get::<_, String>("deleted")? == "true",
    })
}

pub fn find_display_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<UserDisplay>> {
    let sql = format!("{SELECT_USER} AND e.id = ?1");
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query_map(params![id], row_to_user)?;
    match rows.next() {
        Some(row) => Ok(Some(row?)),
        None => Ok(None),
    }
}

/// The account UI actions run as while authentication lives elsewhere:
/// the first non-deleted user (the seeded admin on a fresh install).
pub fn find_default(conn: &Connection) -> rusqlite::Result<Option<UserDisplay>> {
    let sql = format!("{SELECT_USER} AND COALESCE(p_del.value, 'false') != 'true' ORDER BY e.id LIMIT 1");
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query_map([], row_to_user)?;
    match rows.next() {
        Some(row) => Ok(Some(row?)),
        None => Ok(None),
    }
}

/// Create a user entity. Label doubles as the display name.
pub fn create(
    conn: &Connection,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> rusqlite::Result<i64> {
    let name = email.split('@').next().unwrap_or(email).to_lowercase();
    let label = format!("{first_name} {last_name}");
    let id = crate::models::entity::create(conn, "user", &name, label.trim())?;
    crate::models::entity::set_properties(
        conn,
        id,
        &[
            ("first_name", first_name),
            ("last_name", last_name),
            ("email", email),
        ],
    )?;
    Ok(id)
}

/// Flip a user's soft-delete flag. Their meetings drop out of list results.
pub fn mark_deleted(conn: &Connection, id: i64) -> rusqlite::Result<()> {
    crate::models::entity::set_property(conn, id, "deleted", "true")
}
