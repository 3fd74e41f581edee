//! Repository layer: maps store rows to domain records and publishes a
//! change notification after every committed write.
//!
//! Subscriptions have replay semantics: a new subscriber immediately
//! observes one notification per record type, then every subsequent change
//! in emission order. The receiver is polled from the UI tick loop the same
//! way the file watcher channel would be.

use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};

use rusqlite::Connection;

use crate::model::{Day, Task};
use crate::store::days::DayRow;
use crate::store::tasks::TaskRow;
use crate::store::{StoreError, days, db, tasks};

/// Which record type changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Days,
    Tasks,
}

/// Domain-level access to the persistent store
pub struct Repository {
    conn: Connection,
    subscribers: Vec<Sender<Change>>,
}

impl Repository {
    /// Open (or create) the database at the given path.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Ok(Repository {
            conn: db::open(path)?,
            subscribers: Vec::new(),
        })
    }

    /// In-memory repository (tests).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Ok(Repository {
            conn: db::open_in_memory()?,
            subscribers: Vec::new(),
        })
    }

    /// Subscribe to change notifications. Replays one notification per
    /// record type so the subscriber starts from the current contents.
    pub fn subscribe(&mut self) -> Receiver<Change> {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(Change::Days);
        let _ = tx.send(Change::Tasks);
        self.subscribers.push(tx);
        rx
    }

    fn notify(&mut self, change: Change) {
        // Drop subscribers whose receiver is gone
        self.subscribers.retain(|tx| tx.send(change).is_ok());
    }

    // --- days ---

    /// All days, ordered by sort order.
    pub fn days(&self) -> Result<Vec<Day>, StoreError> {
        Ok(days::all(&self.conn)?.into_iter().map(day_from_row).collect())
    }

    pub fn day(&self, id: i64) -> Result<Option<Day>, StoreError> {
        Ok(days::get(&self.conn, id)?.map(day_from_row))
    }

    /// Insert a batch of days in one transaction. Explicit ids are honored
    /// (replace-on-collision). Returns the assigned ids in order.
    pub fn insert_days(&mut self, batch: &[Day]) -> Result<Vec<i64>, StoreError> {
        let rows: Vec<DayRow> = batch.iter().map(day_to_row).collect();
        let ids = days::insert_batch(&mut self.conn, &rows)?;
        self.notify(Change::Days);
        Ok(ids)
    }

    pub fn update_day(&mut self, day: &Day) -> Result<(), StoreError> {
        days::update(&self.conn, &day_to_row(day))?;
        self.notify(Change::Days);
        Ok(())
    }

    pub fn delete_day(&mut self, id: i64) -> Result<(), StoreError> {
        days::delete(&self.conn, id)?;
        self.notify(Change::Days);
        Ok(())
    }

    // --- tasks ---

    pub fn tasks(&self) -> Result<Vec<Task>, StoreError> {
        Ok(tasks::all(&self.conn)?.into_iter().map(task_from_row).collect())
    }

    pub fn tasks_by_day(&self, day_id: i64) -> Result<Vec<Task>, StoreError> {
        Ok(tasks::by_day(&self.conn, day_id)?
            .into_iter()
            .map(task_from_row)
            .collect())
    }

    pub fn task(&self, id: i64) -> Result<Option<Task>, StoreError> {
        Ok(tasks::get(&self.conn, id)?.map(task_from_row))
    }

    /// Insert a task, returning its assigned id.
    pub fn insert_task(&mut self, task: &Task) -> Result<i64, StoreError> {
        let id = tasks::insert(&self.conn, &task_to_row(task))?;
        self.notify(Change::Tasks);
        Ok(id)
    }

    pub fn update_task(&mut self, task: &Task) -> Result<(), StoreError> {
        tasks::update(&self.conn, &task_to_row(task))?;
        self.notify(Change::Tasks);
        Ok(())
    }

    pub fn delete_task(&mut self, id: i64) -> Result<(), StoreError> {
        tasks::delete(&self.conn, id)?;
        self.notify(Change::Tasks);
        Ok(())
    }

    /// Delete every task owned by a day. Returns the number removed.
    pub fn delete_tasks_by_day(&mut self, day_id: i64) -> Result<usize, StoreError> {
        let n = tasks::delete_by_day(&self.conn, day_id)?;
        self.notify(Change::Tasks);
        Ok(n)
    }
}

fn day_from_row(row: DayRow) -> Day {
    Day {
        id: row.id,
        name: row.name,
        order: row.sort_order,
    }
}

fn day_to_row(day: &Day) -> DayRow {
    DayRow {
        id: day.id,
        name: day.name.clone(),
        sort_order: day.order,
    }
}

fn task_from_row(row: TaskRow) -> Task {
    Task {
        id: row.id,
        title: row.title,
        day_id: row.day_id,
        done: row.done,
    }
}

fn task_to_row(task: &Task) -> TaskRow {
    TaskRow {
        id: task.id,
        title: task.title.clone(),
        day_id: task.day_id,
        done: task.done,
    }
}
