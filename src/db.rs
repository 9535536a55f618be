use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::models::{entity, setting};

pub type DbPool = Pool<SqliteConnectionManager>;

pub const MIGRATIONS: &str = include_str!("schema.sql");

pub fn init_pool(database_url: &str) -> DbPool {
    let manager = SqliteConnectionManager::file(database_url).with_init(|conn| {
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        Ok(())
    });
    Pool::builder()
        .max_size(8)
        .build(manager)
        .expect("Failed to create DB pool")
}

pub fn run_migrations(pool: &DbPool) {
    let conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.execute_batch(MIGRATIONS)
        .expect("Failed to run migrations");
    log::info!("Database migrations complete");
}

/// Relation types the meeting store depends on. Seeded once, looked up by name
/// in every query that traverses a reference.
pub const RELATION_TYPES: &[(&str, &str)] = &[
    ("created_by", "Created By"),
    ("has_attendee", "Has Attendee"),
    ("has_attendee_lead", "Has Attendee Lead"),
];

/// Seed base data (relation types, settings, default user) if the database is
/// empty. Idempotent: skipped as soon as any entity exists.
pub fn seed_base(pool: &DbPool) {
    let conn = pool.get().expect("Failed to get DB connection for seeding");

    let count = entity::count_by_type(&conn, "relation_type").unwrap_or(0);
    if count > 0 {
        log::info!("Database already seeded ({count} relation types), skipping");
        return;
    }

    seed_base_conn(&conn).expect("Failed to seed base data");
    log::info!("Base seed complete");
}

fn seed_base_conn(conn: &rusqlite::Connection) -> rusqlite::Result<()> {
    for (name, label) in RELATION_TYPES {
        entity::create(conn, "relation_type", name, label)?;
    }

    setting::create(conn, "app.name", "App Name", "MiniCRM")?;
    for action in ["view", "create", "update", "delete"] {
        setting::create(
            conn,
            &format!("meetings.{action}"),
            &format!("Meetings: {action}"),
            "true",
        )?;
    }

    // Default account that UI-created records are attributed to.
    let admin = entity::create(conn, "user", "admin", "Admin User")?;
    entity::set_properties(
        conn,
        admin,
        &[
            ("first_name", "Admin"),
            ("last_name", "User"),
            ("email", "admin@example.com"),
        ],
    )?;

    Ok(())
}

/// Seed base data plus demo contacts and leads so the attendee pickers have
/// something to offer on a fresh install.
pub fn seed_demo(pool: &DbPool) {
    seed_base(pool);

    let conn = pool.get().expect("Failed to get DB connection for demo seed");
    let has_demo = entity::count_by_type(&conn, "contact").unwrap_or(0) > 0;
    if has_demo {
        log::info!("Demo data already present, skipping");
        return;
    }

    let contacts = [
        ("alice-moreau", "Alice Moreau", "alice.moreau@example.com"),
        ("ben-okafor", "Ben Okafor", "ben.okafor@example.com"),
        ("carla-reyes", "Carla Reyes", "carla.reyes@example.com"),
    ];
    let leads = [
        ("dmitri-novak", "Dmitri Novak", "dmitri.novak@example.com"),
        ("erin-walsh", "Erin Walsh", "erin.walsh@example.com"),
    ];

    for (name, label, email) in contacts {
        if let Ok(id) = entity::create(&conn, "contact", name, label) {
            let _ = entity::set_property(&conn, id, "email", email);
        }
    }
    for (name, label, email) in leads {
        if let Ok(id) = entity::create(&conn, "lead", name, label) {
            let _ = entity::set_property(&conn, id, "email", email);
        }
    }

    log::info!("Demo seed complete");
}
