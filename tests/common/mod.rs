//! Shared test infrastructure.
//!
//! `setup_test_db()` gives a bare connection for model-layer tests;
//! `setup_test_pool()` gives a seeded pool for handler-level tests.
//! The TempDir must be kept alive for the connection/pool to stay valid.

#![allow(dead_code)]

use rusqlite::Connection;
use tempfile::TempDir;

use minicrm::db::{self, DbPool, MIGRATIONS, RELATION_TYPES};
use minicrm::models::{entity, setting};

/// Setup a test database with schema, relation types, and access settings.
pub fn setup_test_db() -> (TempDir, Connection) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let conn = Connection::open(&db_path).expect("Failed to open test DB");

    conn.execute_batch("PRAGMA foreign_keys=ON; PRAGMA journal_mode=WAL;")
        .expect("Failed to set pragmas");
    conn.execute_batch(MIGRATIONS).expect("Failed to run migrations");

    seed_base_entities(&conn).expect("Failed to seed base entities");

    (dir, conn)
}

fn seed_base_entities(conn: &Connection) -> rusqlite::Result<()> {
    for (name, label) in RELATION_TYPES {
        entity::create(conn, "relation_type", name, label)?;
    }
    setting::create(conn, "app.name", "App Name", "Test CRM")?;
    for action in ["view", "create", "update", "delete"] {
        setting::create(
            conn,
            &format!("meetings.{action}"),
            &format!("Meetings: {action}"),
            "true",
        )?;
    }
    Ok(())
}

/// Setup a pooled test database with the full base seed (includes the default
/// admin user), as handler tests need it.
pub fn setup_test_pool() -> (TempDir, DbPool) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.db");
    let pool = db::init_pool(db_path.to_str().expect("utf-8 path"));
    db::run_migrations(&pool);
    db::seed_base(&pool);
    (dir, pool)
}

/// Id of the seeded default admin user.
pub fn admin_id(pool: &DbPool) -> i64 {
    let conn = pool.get().expect("pool");
    conn.query_row(
        "SELECT id FROM entities WHERE entity_type = 'user' AND name = 'admin'",
        [],
        |row| row.get(0),
    )
    .expect("admin user seeded")
}
