use crate::model::Task;

/// State machine for the long-press-a-task flow.
///
/// Idle → Actions → (ConfirmDelete | Edit) → Idle. Modeling the flow as an
/// enum keeps combinations like "delete confirmation open with no target
/// task" unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TaskDialog {
    #[default]
    Idle,
    /// Action choice: delete or edit
    Actions { task: Task },
    /// Waiting for delete confirmation
    ConfirmDelete { task: Task },
    /// Editing the title; `buffer` holds the pending text
    Edit { task: Task, buffer: String },
}

impl TaskDialog {
    /// The task this dialog is scoped to, if any.
    pub fn task(&self) -> Option<&Task> {
        match self {
            TaskDialog::Idle => None,
            TaskDialog::Actions { task }
            | TaskDialog::ConfirmDelete { task }
            | TaskDialog::Edit { task, .. } => Some(task),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, TaskDialog::Idle)
    }
}

/// State machine for the long-press-a-day bulk-clear flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayClear {
    #[default]
    Idle,
    /// Waiting for confirmation to clear every task of `day_id`
    Confirm { day_id: i64 },
}

impl DayClear {
    pub fn is_idle(&self) -> bool {
        matches!(self, DayClear::Idle)
    }
}
