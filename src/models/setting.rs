use rusqlite::{Connection, params};

/// Get a single setting's value by name, returning a default if not found.
pub fn get_value(conn: &Connection, name: &str, default: &str) -> String {
    conn.query_row(
        "SELECT COALESCE(p.value, ?2) \
         FROM entities e \
         LEFT JOIN entity_properties p ON e.id = p.entity_id AND p.key = 'value' \
         WHERE e.entity_type = 'setting' AND e.name = ?1",
        params![name, default],
        |row| row.get(0),
    )
    .unwrap_or_else(|_| default.to_string())
}

/// Create a setting entity with an initial value. Used by the seed.
pub fn create(conn: &Connection, name: &str, label: &str, value: &str) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO entities (entity_type, name, label) VALUES ('setting', ?1, ?2)",
        params![name, label],
    )?;
    let id = conn.last_insert_rowid();
    conn.execute(
        "INSERT INTO entity_properties (entity_id, key, value) VALUES (?1, 'value', ?2)",
        params![id, value],
    )?;
    Ok(id)
}
