use crate::model::{Day, Task};
use crate::state::dialog::{DayClear, TaskDialog};

/// Everything the presentation layer needs to render one frame.
///
/// `days` and `tasks` mirror the persisted collections; the dialog machines
/// are transient. The selected day and the filtered task list are derived on
/// access from the authoritative lists, never stored, so they cannot drift.
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    /// All days, ordered by sort order
    pub days: Vec<Day>,
    /// All tasks
    pub tasks: Vec<Task>,
    /// Selected day id; `None` means nothing is selected yet
    pub selected_day_id: Option<i64>,
    /// Long-press-a-task dialog flow
    pub task_dialog: TaskDialog,
    /// Long-press-a-day bulk-clear flow
    pub day_clear: DayClear,
}

impl HomeState {
    /// The selected day, or `None` when the selected id matches nothing.
    pub fn selected_day(&self) -> Option<&Day> {
        let id = self.selected_day_id?;
        self.days.iter().find(|d| d.id == id)
    }

    /// Tasks owned by the selected day. Empty when nothing is selected or
    /// the selected id matches no day.
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        match self.selected_day_id {
            Some(id) => self.tasks.iter().filter(|t| t.day_id == id).collect(),
            None => Vec::new(),
        }
    }

    /// Look up a task by id in the current snapshot.
    pub fn task(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Open-task count for a day (for tab bar badges).
    pub fn open_count(&self, day_id: i64) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.day_id == day_id && !t.done)
            .count()
    }
}
