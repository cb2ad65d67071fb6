use perennial::db;
use perennial::db::migrations::{get_schema_version, run_migrations, CURRENT_SCHEMA_VERSION};

#[test]
fn fresh_db_migrates_to_current_version() {
    let conn = db::open_memory_database().unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);
}

#[test]
fn migrations_are_idempotent() {
    let mut conn = db::open_memory_database().unwrap();
    // Running again should be a no-op
    run_migrations(&mut conn).unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);
}

#[test]
fn v1_db_with_quotes_upgrades_and_becomes_searchable() {
    // Simulate a v1 database seeded before the search index existed
    let mut conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.pragma_update(None, "foreign_keys", "ON").unwrap();
    db::schema::init_schema(&conn).unwrap();
    conn.execute_batch(
        r#"
        INSERT INTO traditions (id, name, origin, core_principles)
            VALUES ('taoist', 'Taoism', 'China', '["Wu wei"]');
        INSERT INTO philosophers (id, name, tradition_id, era, bio, key_teachings)
            VALUES ('laozi', 'Lao Tzu', 'taoist', '6th century BCE', '', '[]');
        INSERT INTO quotes (id, text, philosopher_id, tradition_id, source)
            VALUES ('lt1', 'Nature does not hurry, yet everything is accomplished.',
                    'laozi', 'taoist', 'Tao Te Ching');
        "#,
    )
    .unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), 1);

    run_migrations(&mut conn).unwrap();

    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);
    let hits: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM quotes_fts WHERE quotes_fts MATCH '\"accomplished\"'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(hits, 1);
}
