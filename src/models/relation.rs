use rusqlite::{Connection, params};

/// Create a relation between two entities (idempotent — duplicates ignored).
pub fn create(
    conn: &Connection,
    relation_type_name: &str,
    source_id: i64,
    target_id: i64,
) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO relations (relation_type_id, source_id, target_id) \
         VALUES ((SELECT id FROM entities WHERE entity_type = 'relation_type' AND name = ?1), ?2, ?3)",
        params![relation_type_name, source_id, target_id],
    )?;
    Ok(())
}
