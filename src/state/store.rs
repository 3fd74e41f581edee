//! The application state store: the single source of UI truth and the single
//! entry point for every user-triggered mutation.
//!
//! Commands validate, then either mutate transient dialog state in place or
//! write through the repository and reconcile from the resulting change
//! notification. Reconciliation always re-reads both collections, so the
//! snapshot can never drift from the database.

use std::sync::mpsc::Receiver;

use crate::model::{Day, Task};
use crate::repo::{Change, Repository};
use crate::state::cell::StateCell;
use crate::state::dialog::{DayClear, TaskDialog};
use crate::state::home::HomeState;
use crate::store::StoreError;

pub struct AppStore {
    repo: Repository,
    changes: Receiver<Change>,
    cell: StateCell<HomeState>,
}

impl AppStore {
    /// Wrap a repository and run the initial reconciliation pass (which
    /// seeds the default week into an empty database).
    pub fn new(mut repo: Repository) -> Result<Self, StoreError> {
        let changes = repo.subscribe();
        let mut store = AppStore {
            repo,
            changes,
            cell: StateCell::new(HomeState::default()),
        };
        store.pump()?;
        Ok(store)
    }

    /// The latest snapshot.
    pub fn snapshot(&self) -> &HomeState {
        self.cell.get()
    }

    /// Subscribe to snapshots: the receiver observes the current state
    /// immediately, then every subsequent emission in order.
    pub fn subscribe(&mut self) -> Receiver<HomeState> {
        self.cell.subscribe()
    }

    /// Drain pending change notifications, reconciling once per observed
    /// change. Returns true if anything was reconciled. Called once per UI
    /// tick and from every command that writes.
    pub fn pump(&mut self) -> Result<bool, StoreError> {
        let mut reconciled = false;
        // A reconcile pass can itself queue a notification (the seed
        // insert); the loop keeps draining until the store is quiet.
        while self.changes.try_recv().is_ok() {
            self.reconcile()?;
            reconciled = true;
        }
        Ok(reconciled)
    }

    /// Recompute the snapshot's collections from the repository. An empty
    /// day collection is seeded with the default week, adopted locally in
    /// the same pass; ids are client-assigned, so the adopted set and the
    /// storage echo are identical. Selection is preserved when the selected
    /// day still exists, otherwise falls back to the first day.
    fn reconcile(&mut self) -> Result<(), StoreError> {
        let mut days = self.repo.days()?;
        let tasks = self.repo.tasks()?;

        if days.is_empty() {
            days = Day::default_week();
            self.repo.insert_days(&days)?;
        }

        self.cell.update(|s| {
            s.selected_day_id = s
                .selected_day_id
                .filter(|id| days.iter().any(|d| d.id == *id))
                .or_else(|| days.first().map(|d| d.id));
            s.days = days;
            s.tasks = tasks;
        });
        Ok(())
    }

    // --- selection ---

    /// Select a day unconditionally. A non-matching id simply yields an
    /// absent selected day and an empty filtered list.
    pub fn select_day(&mut self, day_id: i64) {
        self.cell.update(|s| s.selected_day_id = Some(day_id));
    }

    // --- task commands ---

    /// Add a task. No-op when the title is blank or no day is given.
    pub fn add_task(&mut self, title: &str, day_id: Option<i64>) -> Result<(), StoreError> {
        let Some(day_id) = day_id else {
            return Ok(());
        };
        if title.trim().is_empty() {
            return Ok(());
        }
        self.repo.insert_task(&Task::new(title, day_id))?;
        self.pump()?;
        Ok(())
    }

    /// Flip a task's completion flag. No-op when the id is not in the
    /// current snapshot.
    pub fn toggle_task(&mut self, task_id: i64) -> Result<(), StoreError> {
        let Some(mut task) = self.cell.get().task(task_id).cloned() else {
            return Ok(());
        };
        task.done = !task.done;
        self.repo.update_task(&task)?;
        self.pump()?;
        Ok(())
    }

    // --- long-press-a-task dialog flow ---

    /// Open the action-choice dialog for a task (the long-press intent).
    /// No-op when the id is unknown.
    pub fn open_task_actions(&mut self, task_id: i64) {
        let Some(task) = self.cell.get().task(task_id).cloned() else {
            return;
        };
        self.cell.update(|s| s.task_dialog = TaskDialog::Actions { task });
    }

    /// Move from the action choice to the delete confirmation.
    pub fn request_delete(&mut self) {
        self.cell.update(|s| {
            if let TaskDialog::Actions { task } = &s.task_dialog {
                s.task_dialog = TaskDialog::ConfirmDelete { task: task.clone() };
            }
        });
    }

    /// Delete the task under confirmation and close the dialog.
    pub fn confirm_delete(&mut self) -> Result<(), StoreError> {
        let dialog = self.cell.get().task_dialog.clone();
        let TaskDialog::ConfirmDelete { task } = dialog else {
            return Ok(());
        };
        self.cell.update(|s| s.task_dialog = TaskDialog::Idle);
        self.repo.delete_task(task.id)?;
        self.pump()?;
        Ok(())
    }

    /// Move from the action choice to editing, seeding the buffer with the
    /// current title.
    pub fn request_edit(&mut self) {
        self.cell.update(|s| {
            if let TaskDialog::Actions { task } = &s.task_dialog {
                let buffer = task.title.clone();
                s.task_dialog = TaskDialog::Edit {
                    task: task.clone(),
                    buffer,
                };
            }
        });
    }

    /// Replace the pending edit text.
    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.cell.update(|s| {
            if let TaskDialog::Edit { buffer, .. } = &mut s.task_dialog {
                *buffer = text;
            }
        });
    }

    /// Apply the buffered text as the new title if it is non-blank;
    /// otherwise discard silently. The dialog closes either way.
    pub fn confirm_edit(&mut self) -> Result<(), StoreError> {
        let dialog = self.cell.get().task_dialog.clone();
        let TaskDialog::Edit { task, buffer } = dialog else {
            return Ok(());
        };
        self.cell.update(|s| s.task_dialog = TaskDialog::Idle);
        if buffer.trim().is_empty() {
            return Ok(());
        }
        let mut updated = task;
        updated.title = buffer;
        self.repo.update_task(&updated)?;
        self.pump()?;
        Ok(())
    }

    /// Close the task dialog from any stage, dropping transient state.
    pub fn dismiss_task_dialog(&mut self) {
        self.cell.update(|s| s.task_dialog = TaskDialog::Idle);
    }

    // --- long-press-a-day bulk-clear flow ---

    /// Open the bulk-clear confirmation for a day (the long-press intent).
    /// No-op when the day is unknown or currently owns no tasks.
    pub fn open_clear_day(&mut self, day_id: i64) {
        let state = self.cell.get();
        if !state.days.iter().any(|d| d.id == day_id) {
            return;
        }
        if !state.tasks.iter().any(|t| t.day_id == day_id) {
            return;
        }
        self.cell.update(|s| s.day_clear = DayClear::Confirm { day_id });
    }

    /// Delete every task of the day under confirmation and close the dialog.
    pub fn confirm_clear_day(&mut self) -> Result<(), StoreError> {
        let DayClear::Confirm { day_id } = self.cell.get().day_clear else {
            return Ok(());
        };
        self.cell.update(|s| s.day_clear = DayClear::Idle);
        self.repo.delete_tasks_by_day(day_id)?;
        self.pump()?;
        Ok(())
    }

    /// Close the bulk-clear confirmation without deleting.
    pub fn dismiss_clear_day(&mut self) {
        self.cell.update(|s| s.day_clear = DayClear::Idle);
    }
}
