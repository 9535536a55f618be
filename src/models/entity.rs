use rusqlite::{Connection, params};

/// Create a new entity, returning its id.
pub fn create(conn: &Connection, entity_type: &str, name: &str, label: &str) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO entities (entity_type, name, label) VALUES (?1, ?2, ?3)",
        params![entity_type, name, label],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Count entities of a given type.
pub fn count_by_type(conn: &Connection, entity_type: &str) -> rusqlite::Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM entities WHERE entity_type = ?1",
        params![entity_type],
        |row| row.get(0),
    )
}

/// Set a property (upsert).
pub fn set_property(conn: &Connection, entity_id: i64, key: &str, value: &str) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO entity_properties (entity_id, key, value) VALUES (?1, ?2, ?3) \
         ON CONFLICT(entity_id, key) DO UPDATE SET value = excluded.value",
        params![entity_id, key, value],
    )?;
    Ok(())
}

/// Set multiple properties at once.
pub fn set_properties(conn: &Connection, entity_id: i64, props: &[(&str, &str)]) -> rusqlite::Result<()> {
    for (key, value) in props {
        set_property(conn, entity_id, key, value)?;
    }
    Ok(())
}
