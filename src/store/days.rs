//! Row-level access to the `days` table.
//!
//! All functions are stateless and take a `&Connection`; mapping to domain
//! records lives in the repository layer.

use rusqlite::{Connection, OptionalExtension, Row, params};

use super::StoreError;

/// A raw `days` row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRow {
    pub id: i64,
    pub name: String,
    pub sort_order: i32,
}

fn from_row(row: &Row) -> rusqlite::Result<DayRow> {
    Ok(DayRow {
        id: row.get(0)?,
        name: row.get(1)?,
        sort_order: row.get(2)?,
    })
}

/// All days, ordered by sort order ascending.
pub fn all(conn: &Connection) -> Result<Vec<DayRow>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, name, sort_order FROM days ORDER BY sort_order ASC")?;
    let rows = stmt.query_map([], from_row)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// Point read by id.
pub fn get(conn: &Connection, id: i64) -> Result<Option<DayRow>, StoreError> {
    let row = conn
        .query_row(
            "SELECT id, name, sort_order FROM days WHERE id = ?1",
            params![id],
            from_row,
        )
        .optional()?;
    Ok(row)
}

/// Insert a single day. An explicit id is honored; a colliding id replaces
/// the existing row. Returns the row id.
pub fn insert(conn: &Connection, day: &DayRow) -> Result<i64, StoreError> {
    if day.id == 0 {
        conn.execute(
            "INSERT OR REPLACE INTO days (name, sort_order) VALUES (?1, ?2)",
            params![day.name, day.sort_order],
        )?;
    } else {
        conn.execute(
            "INSERT OR REPLACE INTO days (id, name, sort_order) VALUES (?1, ?2, ?3)",
            params![day.id, day.name, day.sort_order],
        )?;
    }
    Ok(conn.last_insert_rowid())
}

/// Insert a batch of days in one transaction. Returns the row ids in order.
pub fn insert_batch(conn: &mut Connection, days: &[DayRow]) -> Result<Vec<i64>, StoreError> {
    let tx = conn.transaction()?;
    let mut ids = Vec::with_capacity(days.len());
    for day in days {
        if day.id == 0 {
            tx.execute(
                "INSERT OR REPLACE INTO days (name, sort_order) VALUES (?1, ?2)",
                params![day.name, day.sort_order],
            )?;
        } else {
            tx.execute(
                "INSERT OR REPLACE INTO days (id, name, sort_order) VALUES (?1, ?2, ?3)",
                params![day.id, day.name, day.sort_order],
            )?;
        }
        ids.push(tx.last_insert_rowid());
    }
    tx.commit()?;
    Ok(ids)
}

/// Full-record replace by id.
pub fn update(conn: &Connection, day: &DayRow) -> Result<(), StoreError> {
    conn.execute(
        "UPDATE days SET name = ?2, sort_order = ?3 WHERE id = ?1",
        params![day.id, day.name, day.sort_order],
    )?;
    Ok(())
}

/// Delete by id.
pub fn delete(conn: &Connection, id: i64) -> Result<(), StoreError> {
    conn.execute("DELETE FROM days WHERE id = ?1", params![id])?;
    Ok(())
}
