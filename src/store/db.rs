use std::fs;
use std::path::Path;

use rusqlite::Connection;

use super::StoreError;

/// Open (or create) the database at the given path and apply the schema.
pub fn open(path: &Path) -> Result<Connection, StoreError> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).map_err(|e| StoreError::DataDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }
    let conn = Connection::open(path)?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Open an in-memory database (tests).
pub fn open_in_memory() -> Result<Connection, StoreError> {
    let conn = Connection::open_in_memory()?;
    init_schema(&conn)?;
    Ok(conn)
}

fn init_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;

        CREATE TABLE IF NOT EXISTS days (
            id          INTEGER PRIMARY KEY,
            name        TEXT NOT NULL,
            sort_order  INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS tasks (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            title   TEXT NOT NULL,
            day_id  INTEGER NOT NULL,
            done    INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_tasks_day ON tasks(day_id);
        ",
    )?;
    Ok(())
}
