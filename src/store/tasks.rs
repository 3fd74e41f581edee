//! Row-level access to the `tasks` table.

use rusqlite::{Connection, OptionalExtension, Row, params};

use super::StoreError;

/// A raw `tasks` row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: i64,
    pub title: String,
    pub day_id: i64,
    pub done: bool,
}

fn from_row(row: &Row) -> rusqlite::Result<TaskRow> {
    Ok(TaskRow {
        id: row.get(0)?,
        title: row.get(1)?,
        day_id: row.get(2)?,
        done: row.get(3)?,
    })
}

/// All tasks, in rowid order.
pub fn all(conn: &Connection) -> Result<Vec<TaskRow>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, title, day_id, done FROM tasks")?;
    let rows = stmt.query_map([], from_row)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// Tasks owned by the given day.
pub fn by_day(conn: &Connection, day_id: i64) -> Result<Vec<TaskRow>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, title, day_id, done FROM tasks WHERE day_id = ?1")?;
    let rows = stmt.query_map(params![day_id], from_row)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// Point read by id.
pub fn get(conn: &Connection, id: i64) -> Result<Option<TaskRow>, StoreError> {
    let row = conn
        .query_row(
            "SELECT id, title, day_id, done FROM tasks WHERE id = ?1",
            params![id],
            from_row,
        )
        .optional()?;
    Ok(row)
}

/// Insert a task. An id of 0 lets the store assign one; an explicit id
/// replaces any existing row with that id. Returns the row id.
pub fn insert(conn: &Connection, task: &TaskRow) -> Result<i64, StoreError> {
    if task.id == 0 {
        conn.execute(
            "INSERT OR REPLACE INTO tasks (title, day_id, done) VALUES (?1, ?2, ?3)",
            params![task.title, task.day_id, task.done],
        )?;
    } else {
        conn.execute(
            "INSERT OR REPLACE INTO tasks (id, title, day_id, done) VALUES (?1, ?2, ?3, ?4)",
            params![task.id, task.title, task.day_id, task.done],
        )?;
    }
    Ok(conn.last_insert_rowid())
}

/// Full-record replace by id.
pub fn update(conn: &Connection, task: &TaskRow) -> Result<(), StoreError> {
    conn.execute(
        "UPDATE tasks SET title = ?2, day_id = ?3, done = ?4 WHERE id = ?1",
        params![task.id, task.title, task.day_id, task.done],
    )?;
    Ok(())
}

/// Delete by id.
pub fn delete(conn: &Connection, id: i64) -> Result<(), StoreError> {
    conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
    Ok(())
}

/// Delete every task owned by the given day. Returns the number removed.
pub fn delete_by_day(conn: &Connection, day_id: i64) -> Result<usize, StoreError> {
    let n = conn.execute("DELETE FROM tasks WHERE day_id = ?1", params![day_id])?;
    Ok(n)
}
